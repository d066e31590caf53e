//! Git access layer for Gitfacts.
//!
//! This crate provides Git operations:
//! - Cloning a remote into a working directory
//! - Paged history queries ([`CommitSource`])
//! - Per-commit diffs ([`DiffSource`])

mod error;
mod repository;
mod source;

pub use error::{GitError, GitResult};
pub use repository::Repository;
pub use source::{CommitSource, DiffSource};
