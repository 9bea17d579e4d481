mod history;
mod hub;
mod msg;
mod registry;
mod session;
mod ws;

use std::fmt;

use axum::{Router, routing::get};
use uuid::Uuid;

use crate::AppState;

pub use history::HistoryStore;
pub use hub::{Hub, Inbox, Outbox};
pub use msg::{ClientEvent, Payload, ServerEvent};
pub use registry::RoomRegistry;
pub use session::{Session, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::relay_ws))
}
