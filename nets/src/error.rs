//! Error types for network helpers.

use std::io;

/// Result type alias for network helpers.
pub type Result<T> = std::result::Result<T, NetsError>;

/// Network helper error.
#[derive(Debug, thiserror::Error)]
pub enum NetsError {
    /// The URL is malformed or lacks a scheme or host.
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request could not be completed.
    #[error("http error: {0}")]
    Http(#[from] ureq::Error),

    /// The server answered with a non-success status.
    #[error("http status {status} for {url}")]
    Status { status: u16, url: String },

    /// IO error while reading the response body.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The local file could not be written.
    #[error("file error: {0}")]
    Files(#[from] kitbag_files::FilesError),
}

impl NetsError {
    pub(crate) fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        NetsError::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}
