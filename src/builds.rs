//! Aggregation of per-build state into summary and detail records.
//!
//! A summary combines three independent filesystem objects read fresh on
//! every call: the metadata document, the artifact count, and the byte
//! length of `build.log`. Listing all builds drops any subdirectory whose
//! metadata cannot be used; direct lookup of the same build surfaces the
//! failure instead. That asymmetry is a deliberate contract: the root may
//! contain partially-written or foreign directories, but a caller naming a
//! build deserves the true cause.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::artifacts::{self, ArtifactRecord, ARTIFACTS_DIR};
use crate::metadata::{self, MetadataError};

/// Name of the per-build log file.
pub const LOG_FILE: &str = "build.log";

/// Projection of one build for listings.
///
/// Every metadata field is independently optional; absence serializes as
/// null, matching the open-ended document.
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    pub id: String,
    pub application: Option<String>,
    pub board: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub completed_at: Option<String>,
    pub duration_seconds: Option<i64>,
    pub warnings: Option<i64>,
    pub errors: Option<i64>,
    pub artifact_count: u64,
    pub log_bytes: u64,
}

/// Summary plus the full metadata mapping and artifact listing.
#[derive(Debug, Clone, Serialize)]
pub struct BuildDetail {
    #[serde(flatten)]
    pub summary: BuildSummary,
    pub toolchain: Option<String>,
    pub west_command: Option<String>,
    pub build_dir: Option<String>,
    pub metadata: Map<String, Value>,
    pub artifacts: Vec<ArtifactRecord>,
}

fn string_field(metadata: &Map<String, Value>, key: &str) -> Option<String> {
    metadata.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn int_field(metadata: &Map<String, Value>, key: &str) -> Option<i64> {
    metadata.get(key).and_then(Value::as_i64)
}

async fn log_bytes(build_dir: &Path) -> u64 {
    match tokio::fs::metadata(build_dir.join(LOG_FILE)).await {
        Ok(meta) => meta.len(),
        Err(_) => 0,
    }
}

fn project_summary(
    build_dir: &Path,
    metadata: &Map<String, Value>,
    artifact_count: u64,
    log_bytes: u64,
) -> BuildSummary {
    BuildSummary {
        id: string_field(metadata, "id").unwrap_or_else(|| metadata::build_name(build_dir)),
        application: string_field(metadata, "application"),
        board: string_field(metadata, "board"),
        status: string_field(metadata, "status"),
        created_at: string_field(metadata, "created_at"),
        completed_at: string_field(metadata, "completed_at"),
        duration_seconds: int_field(metadata, "duration_seconds"),
        warnings: int_field(metadata, "warnings"),
        errors: int_field(metadata, "errors"),
        artifact_count,
        log_bytes,
    }
}

/// Summarize one build directory.
pub async fn summarize(build_dir: &Path) -> Result<BuildSummary, MetadataError> {
    let metadata = metadata::load_metadata(build_dir).await?;
    let artifacts_dir = build_dir.join(ARTIFACTS_DIR);
    Ok(project_summary(
        build_dir,
        &metadata,
        artifacts::count(&artifacts_dir),
        log_bytes(build_dir).await,
    ))
}

/// Full detail record for one build directory.
pub async fn detail(build_dir: &Path) -> Result<BuildDetail, MetadataError> {
    let metadata = metadata::load_metadata(build_dir).await?;
    let artifacts_dir = build_dir.join(ARTIFACTS_DIR);
    let summary = project_summary(
        build_dir,
        &metadata,
        artifacts::count(&artifacts_dir),
        log_bytes(build_dir).await,
    );

    Ok(BuildDetail {
        toolchain: string_field(&metadata, "toolchain"),
        west_command: string_field(&metadata, "west_command"),
        build_dir: string_field(&metadata, "build_dir"),
        artifacts: artifacts::list(&artifacts_dir),
        metadata,
        summary,
    })
}

/// Summarize every usable build under the root, most-recently-named first.
///
/// Ordering is reverse lexicographic by directory name, which the build
/// pipeline's timestamped naming convention makes newest-first. Builds whose
/// metadata is missing or corrupt are skipped, and a nonexistent root is an
/// empty listing, not an error.
pub async fn list_builds(root: &Path) -> Vec<BuildSummary> {
    let mut entries = match tokio::fs::read_dir(root).await {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut dirs: Vec<PathBuf> = Vec::new();
    while let Ok(Some(entry)) = entries.next_entry().await {
        match entry.file_type().await {
            Ok(kind) if kind.is_dir() => dirs.push(entry.path()),
            _ => continue,
        }
    }
    dirs.sort();
    dirs.reverse();

    let mut builds = Vec::with_capacity(dirs.len());
    for dir in dirs {
        match summarize(&dir).await {
            Ok(summary) => builds.push(summary),
            Err(err) => {
                tracing::debug!(build = %dir.display(), error = %err, "skipping unusable build");
            }
        }
    }
    builds
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_build(root: &Path, name: &str, metadata: &str) -> PathBuf {
        let dir = root.join(name);
        std::fs::create_dir_all(&dir).expect("build dir");
        std::fs::write(dir.join(crate::metadata::METADATA_FILE), metadata).expect("metadata");
        dir
    }

    #[tokio::test]
    async fn summarize_combines_metadata_artifacts_and_log() {
        let root = TempDir::new().expect("tempdir");
        let dir = write_build(
            root.path(),
            "b1",
            r#"{"id":"b1","board":"nrf52840dk","status":"passed","warnings":3}"#,
        );
        std::fs::create_dir(dir.join(ARTIFACTS_DIR)).expect("artifacts");
        std::fs::write(dir.join(ARTIFACTS_DIR).join("app.bin"), b"0123456789").expect("bin");
        std::fs::write(dir.join(LOG_FILE), "line1\nline2\n").expect("log");

        let summary = summarize(&dir).await.expect("summary");
        assert_eq!(summary.id, "b1");
        assert_eq!(summary.board.as_deref(), Some("nrf52840dk"));
        assert_eq!(summary.status.as_deref(), Some("passed"));
        assert_eq!(summary.warnings, Some(3));
        assert_eq!(summary.errors, None);
        assert_eq!(summary.artifact_count, 1);
        assert_eq!(summary.log_bytes, 12);
    }

    #[tokio::test]
    async fn missing_artifacts_and_log_yield_zero_values() {
        let root = TempDir::new().expect("tempdir");
        let dir = write_build(root.path(), "b1", "{}");

        let summary = summarize(&dir).await.expect("summary");
        // No "id" key: identity falls back to the directory name.
        assert_eq!(summary.id, "b1");
        assert_eq!(summary.artifact_count, 0);
        assert_eq!(summary.log_bytes, 0);
    }

    #[tokio::test]
    async fn detail_carries_full_mapping_and_artifact_list() {
        let root = TempDir::new().expect("tempdir");
        let dir = write_build(
            root.path(),
            "b1",
            r#"{"id":"b1","toolchain":"zephyr-sdk-0.16","extra":{"nested":true}}"#,
        );
        std::fs::create_dir(dir.join(ARTIFACTS_DIR)).expect("artifacts");
        std::fs::write(dir.join(ARTIFACTS_DIR).join("app.hex"), b"hex").expect("hex");

        let detail = detail(&dir).await.expect("detail");
        assert_eq!(detail.toolchain.as_deref(), Some("zephyr-sdk-0.16"));
        assert!(detail.metadata.contains_key("extra"));
        assert_eq!(detail.artifacts.len(), 1);
        assert_eq!(detail.artifacts[0].name, "app.hex");
    }

    #[tokio::test]
    async fn listing_skips_unusable_builds_in_reverse_name_order() {
        let root = TempDir::new().expect("tempdir");
        write_build(root.path(), "20240101-aaa", r#"{"id":"20240101-aaa"}"#);
        write_build(root.path(), "20240301-ccc", r#"{"id":"20240301-ccc"}"#);
        write_build(root.path(), "20240201-bbb", "{broken");
        // Directory without any metadata at all.
        std::fs::create_dir(root.path().join("20240401-ddd")).expect("bare dir");
        // Stray file in the root is ignored entirely.
        std::fs::write(root.path().join("README.txt"), "hi").expect("stray");

        let builds = list_builds(root.path()).await;
        let ids: Vec<&str> = builds.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["20240301-ccc", "20240101-aaa"]);
    }

    #[tokio::test]
    async fn nonexistent_root_lists_nothing() {
        let root = TempDir::new().expect("tempdir");
        let missing = root.path().join("never-created");
        assert!(list_builds(&missing).await.is_empty());
    }

    #[tokio::test]
    async fn lookup_of_unusable_build_surfaces_the_failure() {
        let root = TempDir::new().expect("tempdir");
        let dir = write_build(root.path(), "bad", "{broken");
        let err = summarize(&dir).await.unwrap_err();
        assert!(matches!(err, MetadataError::Corrupt { .. }));
    }
}
