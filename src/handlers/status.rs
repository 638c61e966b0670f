//! Service status handler

use axum::extract::State;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Status report payload
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub build_root: String,
    pub build_count: u64,
    pub timestamp: String,
}

/// `GET /api/status` - configured root, count of immediate subdirectories
/// (0 if the root is absent), and the current UTC timestamp.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let root = state.build_root();

    let mut build_count = 0;
    if let Ok(mut entries) = tokio::fs::read_dir(root).await {
        while let Ok(Some(entry)) = entries.next_entry().await {
            if entry.file_type().await.map(|kind| kind.is_dir()).unwrap_or(false) {
                build_count += 1;
            }
        }
    }

    Json(StatusResponse {
        build_root: root.display().to_string(),
        build_count,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    })
}
