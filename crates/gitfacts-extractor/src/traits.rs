//! Extractor trait.

use gitfacts_commit::CommitRecord;

use crate::{ExtractResult, Value};

/// Derives one named fact from a commit.
///
/// Implementations must not keep state between calls: the same commit always
/// yields the same value, whatever order commits are visited in.
pub trait Extractor {
    /// Returns the column name. Used verbatim as the output header.
    fn name(&self) -> &'static str;

    /// Extracts the value for the given commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the fact cannot be derived for this commit.
    fn extract(&self, commit: &CommitRecord) -> ExtractResult<Value>;
}
