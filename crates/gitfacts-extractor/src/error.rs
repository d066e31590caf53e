//! Extractor error types.

use thiserror::Error;

/// Extraction errors.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The repository could not answer a query.
    #[error("git error: {0}")]
    Git(#[from] gitfacts_git::GitError),

    /// The extractor could not derive a value.
    #[error("extraction failed: {0}")]
    Failed(String),
}

/// Result type for extraction.
pub type ExtractResult<T> = Result<T, ExtractError>;
