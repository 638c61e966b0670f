//! Confinement of caller-supplied identifiers inside a configured root.
//!
//! The same algorithm runs twice per artifact-scoped request: once to pin a
//! build identifier under the build root, once to pin the artifact's
//! relative path under that build's `artifacts/` directory. Identifiers are
//! screened lexically before any filesystem access, then the joined path is
//! canonicalized and required to stay a strict descendant of the canonical
//! root, which also catches symlink escapes.

use std::path::{Component, Path, PathBuf};

use crate::error::ApiError;

/// Expected kind of the resolved filesystem entry.
#[derive(Debug, Clone, Copy)]
enum EntryKind {
    Directory,
    File,
}

/// Why a candidate path was refused.
#[derive(Debug, Clone, Copy)]
enum Rejection {
    /// The path escapes the root, lexically or after symlink resolution.
    Escape,
    /// The entry does not exist or is not of the expected kind.
    Missing,
}

/// Resolve a build identifier to its directory under the build root.
///
/// The root itself is never a build, so an identifier resolving to the root
/// (for example `.`) is rejected as invalid rather than served.
pub fn resolve_build_dir(root: &Path, build_id: &str) -> Result<PathBuf, ApiError> {
    resolve_under(root, build_id, EntryKind::Directory, false).map_err(|rejection| {
        match rejection {
            Rejection::Escape => ApiError::InvalidIdentifier {
                reason: format!("invalid build identifier '{build_id}'"),
            },
            Rejection::Missing => ApiError::NotFound {
                reason: format!("build '{build_id}' not found"),
            },
        }
    })
}

/// Resolve an artifact's relative path to a regular file under the build's
/// `artifacts/` directory.
pub fn resolve_artifact(artifacts_dir: &Path, artifact_path: &str) -> Result<PathBuf, ApiError> {
    resolve_under(artifacts_dir, artifact_path, EntryKind::File, true).map_err(|rejection| {
        match rejection {
            Rejection::Escape => ApiError::InvalidIdentifier {
                reason: format!("invalid artifact path '{artifact_path}'"),
            },
            Rejection::Missing => ApiError::NotFound {
                reason: "artifact not found".to_string(),
            },
        }
    })
}

fn resolve_under(
    root: &Path,
    relative: &str,
    kind: EntryKind,
    allow_root: bool,
) -> Result<PathBuf, Rejection> {
    // Lexical screen: refuse `..` and absolute overrides before touching the
    // filesystem, so traversal never leaks existence of outside paths.
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            _ => return Err(Rejection::Escape),
        }
    }

    let root = root.canonicalize().map_err(|_| Rejection::Missing)?;
    let resolved = root.join(relative).canonicalize().map_err(|_| Rejection::Missing)?;

    // Canonical comparison catches symlinks pointing outside the root.
    if !resolved.starts_with(&root) {
        return Err(Rejection::Escape);
    }
    if resolved == root && !allow_root {
        return Err(Rejection::Escape);
    }

    let kind_matches = match kind {
        EntryKind::Directory => resolved.is_dir(),
        EntryKind::File => resolved.is_file(),
    };
    if !kind_matches {
        return Err(Rejection::Missing);
    }

    Ok(resolved)
}
