//! Shared application state injected into every handler.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Immutable per-process state.
///
/// Holds only the configured build root; handlers re-read the filesystem on
/// every request and keep no caches or locks.
#[derive(Clone)]
pub struct AppState {
    build_root: Arc<PathBuf>,
}

impl AppState {
    /// Create new application state around the configured build root
    pub fn new(build_root: impl Into<PathBuf>) -> Self {
        Self {
            build_root: Arc::new(build_root.into()),
        }
    }

    /// Get the configured build root
    pub fn build_root(&self) -> &Path {
        &self.build_root
    }
}
