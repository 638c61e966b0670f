//! Read-mostly HTTP API over a build output directory tree.
//!
//! Each subdirectory of the configured build root is one build, holding a
//! `metadata.json` document, a `build.log` file, and an `artifacts/` tree.
//! The service aggregates those three filesystem objects into summary and
//! detail records and serves them over HTTP; it never writes to the tree
//! except to delete individual artifacts on request.

pub mod artifacts;
pub mod builds;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metadata;
pub mod resolve;
pub mod server;
pub mod state;

pub use config::AppConfig;
pub use error::ApiError;
pub use state::AppState;
