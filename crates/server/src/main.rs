use server::app;
use server::clients::geekdo::GeekdoClient;
use server::config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env();

    let client = GeekdoClient::new(&config).context("Failed to build upstream client")?;
    tracing::info!(
        owner = %config.owner,
        collection_url = %config.collection_base_url,
        boardgame_url = %config.boardgame_base_url,
        timeout_secs = config.upstream_timeout.as_secs(),
        "Upstream configured"
    );
    if config.legacy_errors {
        tracing::info!("Legacy error mode: failures are answered with status 200");
    }

    let app = app::router(&config, client);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
