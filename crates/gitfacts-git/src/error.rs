//! Git error types.

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Cloning the remote failed.
    #[error("failed to clone {remote}: {source}")]
    Clone {
        /// The remote locator that was cloned.
        remote: String,
        /// The underlying git error.
        source: git2::Error,
    },

    /// Commit timestamp cannot be represented.
    #[error("commit {0} has an invalid author timestamp")]
    InvalidTimestamp(String),

    /// Git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
