//! Extractor execution.

use gitfacts_commit::CommitRecord;
use gitfacts_extractor::{Extractor, Value};
use gitfacts_git::GitResult;
use tracing::trace;

use crate::{CoreResult, Diagnostics};

/// One output row: a value per extractor, in extractor order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    values: Vec<Value>,
    failures: usize,
}

impl Row {
    /// Creates a row from values that were all extracted successfully.
    #[must_use]
    pub fn new(values: Vec<Value>) -> Self {
        Self {
            values,
            failures: 0,
        }
    }

    /// Returns the field text of each value in column order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(Value::as_field)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns how many values were replaced by [`Value::Missing`].
    #[must_use]
    pub fn failures(&self) -> usize {
        self.failures
    }
}

/// Applies an ordered set of extractors to each commit.
///
/// An extractor that fails on a commit leaves [`Value::Missing`] in its
/// column and is reported through [`Diagnostics`]; the row is still emitted.
pub struct Pipeline<'a> {
    extractors: Vec<Box<dyn Extractor + 'a>>,
}

impl<'a> Pipeline<'a> {
    /// Creates a pipeline. Extractor order is column order.
    #[must_use]
    pub fn new(extractors: Vec<Box<dyn Extractor + 'a>>) -> Self {
        Self { extractors }
    }

    /// Returns the column names, in order.
    pub fn schema(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    /// Runs every extractor on one commit.
    pub fn extract_row(&self, commit: &CommitRecord, diagnostics: &dyn Diagnostics) -> Row {
        let mut failures = 0;
        let values = self
            .extractors
            .iter()
            .map(|extractor| match extractor.extract(commit) {
                Ok(value) => value,
                Err(err) => {
                    failures += 1;
                    diagnostics.extraction_failed(commit, extractor.name(), &err);
                    Value::Missing
                }
            })
            .collect();

        trace!(commit = %commit.short_id(), failures, "extracted row");
        Row { values, failures }
    }

    /// Lazily turns commits into rows.
    ///
    /// A history error is passed on as-is and should end the export.
    pub fn rows<'p, I>(
        &'p self,
        commits: I,
        diagnostics: &'p dyn Diagnostics,
    ) -> impl Iterator<Item = CoreResult<Row>> + 'p
    where
        I: IntoIterator<Item = GitResult<CommitRecord>>,
        I::IntoIter: 'p,
    {
        commits.into_iter().map(move |commit| -> CoreResult<Row> {
            let commit = commit?;
            Ok(self.extract_row(&commit, diagnostics))
        })
    }
}
