use anyhow::Context;
use tracing_subscriber::EnvFilter;

use buildview::config::AppConfig;
use buildview::server;
use buildview::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logs
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load centralized configuration
    let config = AppConfig::load().context("failed to load configuration")?;
    tracing::info!(
        build_root = %config.storage.build_root.display(),
        "starting build output API"
    );

    // The build root is immutable after startup; every handler reads it
    // through AppState rather than a process-wide global.
    let state = AppState::new(config.storage.build_root.clone());

    server::start(&config, state).await
}
