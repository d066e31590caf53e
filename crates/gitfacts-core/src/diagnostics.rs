//! Reporting of recoverable failures.

use std::io;
use std::path::Path;

use gitfacts_commit::CommitRecord;
use gitfacts_extractor::ExtractError;
use tracing::{error, warn};

use crate::{Row, SinkError};

/// Receives failures that are reported but do not stop an export.
///
/// Components take a `&dyn Diagnostics` instead of logging directly, so
/// tests can observe what went wrong.
pub trait Diagnostics {
    /// An extractor failed on a commit; the cell was left empty.
    fn extraction_failed(&self, commit: &CommitRecord, column: &str, error: &ExtractError);

    /// A row could not be written; the export moved on.
    fn row_write_failed(&self, row: &Row, error: &SinkError);

    /// The working area could not be removed.
    fn cleanup_failed(&self, path: &Path, error: &io::Error);
}

/// Forwards every report to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn extraction_failed(&self, commit: &CommitRecord, column: &str, error: &ExtractError) {
        error!(commit = %commit.short_id(), column, %error, "failed to extract value");
    }

    fn row_write_failed(&self, row: &Row, error: &SinkError) {
        error!(values = ?row.fields().collect::<Vec<_>>(), %error, "failed to write row");
    }

    fn cleanup_failed(&self, path: &Path, error: &io::Error) {
        warn!(?path, %error, "failed to remove working area");
    }
}
