//! Contracts the export pipeline needs from a repository.

use gitfacts_commit::CommitRecord;

use crate::GitResult;

/// Serves commit history one page at a time.
pub trait CommitSource {
    /// Returns up to `limit` commits after skipping the `skip` most recent.
    ///
    /// Commits come most-recent-first. An empty page means the history is
    /// exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read.
    fn fetch_page(&self, skip: usize, limit: usize) -> GitResult<Vec<CommitRecord>>;
}

/// Computes the textual change a commit introduced.
pub trait DiffSource {
    /// Returns the patch between the commit and its primary parent.
    ///
    /// Root commits are compared against the empty tree, so every file they
    /// contain shows up as added.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit or its trees cannot be read.
    fn diff_against_parent(&self, commit: &CommitRecord) -> GitResult<String>;
}
