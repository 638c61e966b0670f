//! Build listing, lookup, and log handlers

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::builds::{self, BuildDetail, BuildSummary, LOG_FILE};
use crate::error::ApiError;
use crate::resolve;
use crate::state::AppState;

/// `GET /api/builds` - summarize every usable build, newest name first.
pub async fn list_builds(State(state): State<AppState>) -> Json<Vec<BuildSummary>> {
    Json(builds::list_builds(state.build_root()).await)
}

/// `GET /api/builds/{build_id}` - full detail for one build.
///
/// Unlike listing, a missing or corrupt metadata document here is a hard
/// server error naming the build.
pub async fn get_build(
    State(state): State<AppState>,
    Path(build_id): Path<String>,
) -> Result<Json<BuildDetail>, ApiError> {
    let build_dir = resolve::resolve_build_dir(state.build_root(), &build_id)?;
    Ok(Json(builds::detail(&build_dir).await?))
}

/// Query parameters for log retrieval
#[derive(Debug, Deserialize)]
pub struct LogQuery {
    /// Return only the final N lines when positive
    pub tail: Option<usize>,
}

/// `GET /api/builds/{build_id}/log?tail=N` - build log as plain text.
pub async fn get_build_log(
    State(state): State<AppState>,
    Path(build_id): Path<String>,
    Query(query): Query<LogQuery>,
) -> Result<String, ApiError> {
    let build_dir = resolve::resolve_build_dir(state.build_root(), &build_id)?;
    let log_path = build_dir.join(LOG_FILE);

    let bytes = tokio::fs::read(&log_path).await.map_err(|_| ApiError::NotFound {
        reason: format!("log file not found for build '{build_id}'"),
    })?;
    // Lossy decode: the log is opaque text and must never fail on encoding.
    let text = String::from_utf8_lossy(&bytes).into_owned();

    Ok(match query.tail {
        Some(tail) if tail > 0 => tail_lines(&text, tail),
        _ => text,
    })
}

fn tail_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].join("\n")
}
