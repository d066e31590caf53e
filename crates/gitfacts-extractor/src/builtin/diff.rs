//! Diff column.

use gitfacts_commit::CommitRecord;
use gitfacts_git::DiffSource;

use crate::{ExtractResult, Extractor, Value};

/// Returns the patch a commit introduced relative to its primary parent.
///
/// Root commits are diffed against the empty tree. This is the expensive
/// column: it asks the repository for a fresh diff on every call.
pub struct DiffExtractor<'a> {
    source: &'a dyn DiffSource,
}

impl<'a> DiffExtractor<'a> {
    /// Column name.
    pub const NAME: &'static str = "diff";

    /// Creates a diff extractor backed by `source`.
    #[must_use]
    pub fn new(source: &'a dyn DiffSource) -> Self {
        Self { source }
    }
}

impl Extractor for DiffExtractor<'_> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extract(&self, commit: &CommitRecord) -> ExtractResult<Value> {
        Ok(Value::Text(self.source.diff_against_parent(commit)?))
    }
}
