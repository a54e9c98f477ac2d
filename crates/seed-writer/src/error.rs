//! Error types for the streaming writer.

use thiserror::Error;

/// Errors that can occur while streaming a JSON array to a sink.
#[derive(Error, Debug)]
pub enum WriterError {
    /// IO error from the sink or the filesystem.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The sequence being written produced an error.
    #[error("Source error: {0}")]
    Source(Box<dyn std::error::Error + Send + Sync>),
}

impl WriterError {
    /// Wrap an upstream error.
    pub fn from_source<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        WriterError::Source(err.into())
    }
}
