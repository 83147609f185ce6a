//! textdiff core - human-readable diffs of byte buffers via the host `diff` tool
//!
//! This crate provides:
//! - [`TextDiffer`]: persists two buffers to temporary files, runs the
//!   platform diff executable over them and returns its combined output
//! - An error facility with a stable kind/code taxonomy
//! - A structured logging facility built on `tracing`
//!
//! No diff algorithm lives here; output is whatever the host tool prints.

pub mod differ;
pub mod errors;
pub mod logging_facility;

pub use textdiff_core_types::schema;

// Re-export commonly used types
pub use differ::{default_tool, diff, DiffOutput, TempArtifact, TextDiffer};
pub use errors::{DiffErrorKind, ExError, Result, TextDiffError};
