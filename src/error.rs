//! API error taxonomy shared by all HTTP handlers.
//!
//! Every failure maps to a structured JSON body `{"error": "..."}` with the
//! status code carrying the classification: client errors for invalid or
//! unknown identifiers, server errors for malformed build directories.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::metadata::MetadataError;

/// Errors surfaced by the build API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller-supplied identifier or relative path escapes its root.
    #[error("{reason}")]
    InvalidIdentifier { reason: String },
    /// The build, log, artifacts directory, or artifact does not exist.
    #[error("{reason}")]
    NotFound { reason: String },
    /// The build directory exists but its metadata cannot be used.
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    /// Local filesystem failure outside the categories above.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidIdentifier { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Metadata(_) | ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
