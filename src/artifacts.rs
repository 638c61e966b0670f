//! Deterministic enumeration of a build's artifact subtree.
//!
//! Only regular files count; directory entries and special files are
//! excluded, and a missing `artifacts/` directory is an empty result rather
//! than an error. Symlinked directories are not followed, so a link cycle
//! cannot extend the walk.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use walkdir::WalkDir;

/// Name of the per-build artifacts directory.
pub const ARTIFACTS_DIR: &str = "artifacts";

/// One regular file under a build's `artifacts/` tree.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactRecord {
    /// Path relative to `artifacts/`, with `/` separators.
    pub name: String,
    pub size_bytes: u64,
    /// Last modification time, ISO-8601 UTC.
    pub modified_at: String,
}

/// Number of regular files anywhere under `artifacts_dir`, recursively.
pub fn count(artifacts_dir: &Path) -> u64 {
    if !artifacts_dir.is_dir() {
        return 0;
    }
    WalkDir::new(artifacts_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .count() as u64
}

/// List every regular file under `artifacts_dir` in full-path lexicographic
/// order, so repeated calls against an unchanged tree yield identical output.
pub fn list(artifacts_dir: &Path) -> Vec<ArtifactRecord> {
    if !artifacts_dir.is_dir() {
        return Vec::new();
    }

    let mut records = Vec::new();
    for entry in WalkDir::new(artifacts_dir).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(meta) = entry.metadata() else {
            continue;
        };
        let relative = entry.path().strip_prefix(artifacts_dir).unwrap_or(entry.path());
        let name = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let modified: DateTime<Utc> = meta.modified().map(DateTime::from).unwrap_or_default();
        records.push(ArtifactRecord {
            name,
            size_bytes: meta.len(),
            modified_at: modified.to_rfc3339_opts(SecondsFormat::Micros, true),
        });
    }

    records.sort_by(|a, b| a.name.cmp(&b.name));
    records
}
