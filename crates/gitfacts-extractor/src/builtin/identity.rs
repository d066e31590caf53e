//! Commit hash and author columns.

use gitfacts_commit::CommitRecord;

use crate::{ExtractResult, Extractor, Value};

/// Returns the full commit hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdExtractor;

impl IdExtractor {
    /// Column name.
    pub const NAME: &'static str = "id";
}

impl Extractor for IdExtractor {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extract(&self, commit: &CommitRecord) -> ExtractResult<Value> {
        Ok(Value::Text(commit.id.clone()))
    }
}

/// Returns the author as `Name <email>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorExtractor;

impl AuthorExtractor {
    /// Column name.
    pub const NAME: &'static str = "author";
}

impl Extractor for AuthorExtractor {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extract(&self, commit: &CommitRecord) -> ExtractResult<Value> {
        let value = if commit.email.is_empty() {
            commit.author.clone()
        } else {
            format!("{} <{}>", commit.author, commit.email)
        };
        Ok(Value::Text(value))
    }
}
