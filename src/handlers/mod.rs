//! HTTP request handlers
//!
//! Handlers organized by API surface:
//! - `builds` - Build listing, detail lookup, and log retrieval
//! - `artifacts` - Artifact download and deletion
//! - `status` - Service status report

pub mod artifacts;
pub mod builds;
pub mod status;
