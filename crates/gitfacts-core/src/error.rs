//! Core error types.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Git error.
    #[error("git error: {0}")]
    Git(#[from] gitfacts_git::GitError),

    /// The output could not be opened.
    #[error("output error: {0}")]
    Sink(#[from] crate::SinkError),

    /// A configured column has no extractor.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// The temporary working area could not be created.
    #[error("failed to create working area: {0}")]
    WorkArea(#[source] std::io::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
