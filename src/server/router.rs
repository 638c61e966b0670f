//! Axum router configuration
//!
//! ```text
//! /api
//! ├── /builds                                  - List builds
//! ├── /builds/{build_id}                       - Build detail
//! ├── /builds/{build_id}/log                   - Build log (optional ?tail=N)
//! ├── /builds/{build_id}/artifacts/{*path}     - Download / delete artifact
//! └── /status                                  - Service status
//! ```

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::artifacts::{delete_artifact, download_artifact};
use crate::handlers::builds::{get_build, get_build_log, list_builds};
use crate::handlers::status::status;
use crate::state::AppState;

/// Build the complete Axum router with all routes
///
/// CORS is wide open: the API is consumed by browser dashboards served from
/// other origins, and there is no credentialed state to protect.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/builds", get(list_builds))
        .route("/builds/{build_id}", get(get_build))
        .route("/builds/{build_id}/log", get(get_build_log))
        .route(
            "/builds/{build_id}/artifacts/{*artifact_path}",
            get(download_artifact).delete(delete_artifact),
        )
        .route("/status", get(status))
}
