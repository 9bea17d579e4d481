pub mod config;
pub mod res;
pub mod rooms;

use std::path::Path;

use axum::{Router, extract::FromRef};
use tower_http::trace::TraceLayer;

pub use config::Config;
use rooms::Hub;

#[derive(Clone, Default, FromRef)]
pub struct AppState {
    pub hub: Hub,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The whole HTTP surface: the relay socket at `/ws`, static assets for
/// everything else.
pub fn app(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(rooms::router())
        .fallback_service(res::assets(public_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
