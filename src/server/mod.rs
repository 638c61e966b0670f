//! Server startup and lifecycle
//!
//! Binds the HTTP listener and serves the Axum router until ctrl-c.

use anyhow::{Context, Result};
use tokio::net::TcpListener;

mod router;

pub use router::build_router;

use crate::config::AppConfig;
use crate::state::AppState;

/// Start the HTTP listener and serve until shutdown.
pub async fn start(config: &AppConfig, state: AppState) -> Result<()> {
    let router = build_router(state);

    let addr = format!(
        "{}:{}",
        config.network.http_bind_addr, config.network.http_port
    );
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "serving build output API");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to install ctrl-c handler");
    }
    tracing::info!("shutdown signal received");
}
