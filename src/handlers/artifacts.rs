//! Artifact download and deletion handlers
//!
//! Both operations resolve twice: the build identifier under the build root,
//! then the artifact's relative path under that build's `artifacts/`
//! directory. The same confinement algorithm runs with two different roots.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tokio_util::io::ReaderStream;

use crate::artifacts::ARTIFACTS_DIR;
use crate::error::ApiError;
use crate::resolve;
use crate::state::AppState;

/// `GET /api/builds/{build_id}/artifacts/{*artifact_path}` - stream one
/// artifact's bytes with a content type inferred from its name.
pub async fn download_artifact(
    State(state): State<AppState>,
    Path((build_id, artifact_path)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let file_path = resolve_artifact_file(state.build_root(), &build_id, &artifact_path)?;

    let file = tokio::fs::File::open(&file_path).await.map_err(not_found_or_io)?;
    let mime = mime_guess::from_path(&file_path).first_or_octet_stream();
    let headers = [(header::CONTENT_TYPE, mime.essence_str().to_owned())];

    Ok((headers, Body::from_stream(ReaderStream::new(file))).into_response())
}

/// `DELETE /api/builds/{build_id}/artifacts/{*artifact_path}` - irreversibly
/// remove one artifact file.
///
/// Deleting an already-deleted artifact yields 404, not success; the loser
/// of a racing delete observes the same.
pub async fn delete_artifact(
    State(state): State<AppState>,
    Path((build_id, artifact_path)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let file_path = resolve_artifact_file(state.build_root(), &build_id, &artifact_path)?;

    tokio::fs::remove_file(&file_path).await.map_err(not_found_or_io)?;
    tracing::info!(build = %build_id, artifact = %artifact_path, "deleted artifact");

    Ok(StatusCode::NO_CONTENT)
}

fn resolve_artifact_file(
    root: &std::path::Path,
    build_id: &str,
    artifact_path: &str,
) -> Result<std::path::PathBuf, ApiError> {
    let build_dir = resolve::resolve_build_dir(root, build_id)?;
    let artifacts_dir = build_dir.join(ARTIFACTS_DIR);
    if !artifacts_dir.is_dir() {
        return Err(ApiError::NotFound {
            reason: format!("no artifacts directory for build '{build_id}'"),
        });
    }
    resolve::resolve_artifact(&artifacts_dir, artifact_path)
}

fn not_found_or_io(err: std::io::Error) -> ApiError {
    if err.kind() == std::io::ErrorKind::NotFound {
        ApiError::NotFound {
            reason: "artifact not found".to_string(),
        }
    } else {
        ApiError::Io(err)
    }
}
