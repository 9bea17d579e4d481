use roomrelay::{AppState, Config, app};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(false))
        .init();

    let config = Config::from_env()?;
    let app = app(AppState::new(), &config.public_dir);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    info!("Live at http://0.0.0.0:{}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
