//! Error types for file helpers.

use std::io;

/// Result type alias for file helpers.
pub type Result<T> = std::result::Result<T, FilesError>;

/// File helper error.
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The listing filter is not a valid regular expression.
    #[error("invalid filter: {0}")]
    Regex(#[from] regex::Error),
}
