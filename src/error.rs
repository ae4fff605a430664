//! Error types for product-extract.
//!
//! This module defines the error types returned by extraction and
//! collaborator operations.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input markup could not be tokenized at all.
    #[error("HTML parsing failed: {0}")]
    Parse(String),

    /// Fetching a page over HTTP failed.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Writing to the snapshot store failed.
    #[error("Snapshot store failed: {0}")]
    Snapshot(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Snapshot(err.to_string())
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
