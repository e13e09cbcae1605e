use anyhow::Context;
use contact_form::{app, Config};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load_default().unwrap_or_else(|e| {
        warn!("failed to load config: {}, using defaults", e);
        Config::default()
    });

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("contact form running at http://{}", addr);
    axum::serve(listener, app()).await.context("server error")?;

    Ok(())
}
