//! Error types for benchdiff library.

use std::io;
use thiserror::Error;

/// Result type alias for benchdiff operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while processing benchmark artifacts.
///
/// Per-row problems in a comparison table never surface here; they degrade
/// to a pass-through line. Only failures that stop a whole run do.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON could not be parsed or serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An input glob pattern is malformed.
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A required field is absent from an input document.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Input data is structurally invalid.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
