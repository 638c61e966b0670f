//! Loading and classifying per-build `metadata.json` documents.
//!
//! The document is an open-ended mapping with no required keys; consumers
//! read fields by name and treat absence as normal. A missing or unreadable
//! file means the build directory itself is malformed, which listing callers
//! tolerate by skipping the build and lookup callers surface as an error.

use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

/// Name of the per-build metadata document.
pub const METADATA_FILE: &str = "metadata.json";

/// Why a build's metadata could not be used.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("missing metadata.json for build '{build}'")]
    Missing { build: String },
    #[error("metadata.json for build '{build}' is invalid JSON: {source}")]
    Corrupt {
        build: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read metadata.json for build '{build}': {source}")]
    Unreadable {
        build: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read and parse `metadata.json` from a confirmed build directory.
///
/// A top-level value that is not a JSON object counts as corrupt.
pub async fn load_metadata(build_dir: &Path) -> Result<Map<String, Value>, MetadataError> {
    let build = build_name(build_dir);
    let path = build_dir.join(METADATA_FILE);

    let text = match tokio::fs::read_to_string(&path).await {
        Ok(text) => text,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            return Err(MetadataError::Missing { build });
        }
        Err(source) => return Err(MetadataError::Unreadable { build, source }),
    };

    serde_json::from_str(&text).map_err(|source| MetadataError::Corrupt { build, source })
}

/// Display name of a build directory (its final path component).
pub fn build_name(build_dir: &Path) -> String {
    build_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
