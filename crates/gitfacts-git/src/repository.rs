//! Git repository wrapper.

use std::path::Path;

use chrono::{DateTime, FixedOffset};
use git2::{DiffFormat, Oid, Repository as Git2Repo, Sort};
use gitfacts_commit::CommitRecord;
use tracing::debug;

use crate::{CommitSource, DiffSource, GitError, GitResult};

/// A Git repository wrapper.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Clones `remote` into `dest` and opens the working copy.
    ///
    /// `remote` may be any locator libgit2 understands, including a local path.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote cannot be reached or the destination
    /// cannot be written.
    pub fn clone_from(remote: &str, dest: impl AsRef<Path>) -> GitResult<Self> {
        let dest = dest.as_ref();
        debug!(remote, ?dest, "cloning repository");
        let inner = Git2Repo::clone(remote, dest).map_err(|source| GitError::Clone {
            remote: remote.to_string(),
            source,
        })?;
        Ok(Self { inner })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    /// Returns true if the repository has no commits yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the references cannot be read.
    pub fn is_empty(&self) -> GitResult<bool> {
        Ok(self.inner.is_empty()?)
    }

    fn to_record(commit: &git2::Commit<'_>) -> GitResult<CommitRecord> {
        let id = commit.id().to_string();
        let author = commit.author();
        let when = author.when();

        let offset = FixedOffset::east_opt(when.offset_minutes() * 60)
            .ok_or_else(|| GitError::InvalidTimestamp(id.clone()))?;
        let authored_at = DateTime::from_timestamp(when.seconds(), 0)
            .ok_or_else(|| GitError::InvalidTimestamp(id.clone()))?
            .with_timezone(&offset);

        let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();

        Ok(CommitRecord::new(id, authored_at, message)
            .with_author(
                author.name().unwrap_or("Unknown"),
                author.email().unwrap_or(""),
            )
            .with_parents(commit.parent_ids().map(|oid| oid.to_string())))
    }
}

impl CommitSource for Repository {
    fn fetch_page(&self, skip: usize, limit: usize) -> GitResult<Vec<CommitRecord>> {
        // An unborn HEAD cannot be pushed onto a revwalk.
        if self.is_empty()? {
            return Ok(Vec::new());
        }

        let mut revwalk = self.inner.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_head()?;

        revwalk
            .skip(skip)
            .take(limit)
            .map(|oid| {
                let commit = self.inner.find_commit(oid?)?;
                Self::to_record(&commit)
            })
            .collect()
    }
}

impl DiffSource for Repository {
    fn diff_against_parent(&self, record: &CommitRecord) -> GitResult<String> {
        let commit = self.inner.find_commit(Oid::from_str(&record.id)?)?;
        let tree = commit.tree()?;

        // Root commits diff against the empty tree.
        let parent_tree = if commit.parent_count() > 0 {
            Some(commit.parent(0)?.tree()?)
        } else {
            None
        };

        let diff = self
            .inner
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;

        let mut patch = String::new();
        diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
            if matches!(line.origin(), '+' | '-' | ' ') {
                patch.push(line.origin());
            }
            patch.push_str(&String::from_utf8_lossy(line.content()));
            true
        })?;

        Ok(patch)
    }
}
