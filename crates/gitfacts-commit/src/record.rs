//! Commit record as retrieved from Git.

use chrono::{DateTime, FixedOffset};

/// A commit as retrieved from Git.
///
/// The author timestamp keeps the offset the author recorded, so date
/// comparisons and rendering happen in the commit's own time zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// The commit hash (SHA).
    pub id: String,

    /// When the commit was authored, in the author's offset.
    pub authored_at: DateTime<FixedOffset>,

    /// The full, unmodified commit message.
    pub message: String,

    /// The commit author name.
    pub author: String,

    /// The commit author email.
    pub email: String,

    /// Parent hashes, primary parent first.
    pub parent_ids: Vec<String>,
}

impl CommitRecord {
    /// Creates a new commit record without parents.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        authored_at: DateTime<FixedOffset>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            authored_at,
            message: message.into(),
            author: String::new(),
            email: String::new(),
            parent_ids: Vec::new(),
        }
    }

    /// Sets the author identity.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>, email: impl Into<String>) -> Self {
        self.author = author.into();
        self.email = email.into();
        self
    }

    /// Sets the parent hashes, primary parent first.
    #[must_use]
    pub fn with_parents<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parent_ids = parents.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short_id(&self) -> &str {
        &self.id[..7.min(self.id.len())]
    }
}
