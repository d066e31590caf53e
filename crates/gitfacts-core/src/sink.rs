//! CSV row output.

use std::io::{self, Write};

use thiserror::Error;
use tracing::debug;

use crate::{Diagnostics, Row};

/// Row output errors.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The record could not be encoded.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The row does not match the header.
    #[error("row has {actual} columns, header has {expected}")]
    ColumnCount {
        /// Number of header columns.
        expected: usize,
        /// Number of values in the row.
        actual: usize,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for row output.
pub type SinkResult<T> = Result<T, SinkError>;

/// Counts of rows handled by a sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkStats {
    /// Rows written.
    pub written: usize,
    /// Rows that failed and were skipped.
    pub failed: usize,
}

/// Writes a header and then rows as CSV.
///
/// Every record is encoded into its own buffer before it reaches the
/// destination, so a row that fails leaves nothing behind for the next one.
pub struct RowSink<W: Write> {
    out: W,
    columns: usize,
    stats: SinkStats,
}

impl<W: Write> RowSink<W> {
    /// Writes the header and returns a sink ready for rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be written.
    pub fn open(mut out: W, schema: &[&str]) -> SinkResult<Self> {
        out.write_all(&encode(schema)?)?;
        debug!(?schema, "wrote header");
        Ok(Self {
            out,
            columns: schema.len(),
            stats: SinkStats::default(),
        })
    }

    /// Writes one row.
    ///
    /// Failures are reported to `diagnostics` and counted; the sink stays
    /// usable. Returns whether the row was written.
    pub fn write(&mut self, row: &Row, diagnostics: &dyn Diagnostics) -> bool {
        match self.try_write(row) {
            Ok(()) => {
                self.stats.written += 1;
                true
            }
            Err(err) => {
                self.stats.failed += 1;
                diagnostics.row_write_failed(row, &err);
                false
            }
        }
    }

    fn try_write(&mut self, row: &Row) -> SinkResult<()> {
        if row.len() != self.columns {
            return Err(SinkError::ColumnCount {
                expected: self.columns,
                actual: row.len(),
            });
        }
        self.out.write_all(&encode(row.fields())?)?;
        Ok(())
    }

    /// Flushes the destination and returns the final counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be flushed.
    pub fn finish(mut self) -> SinkResult<SinkStats> {
        self.out.flush()?;
        Ok(self.stats)
    }
}

fn encode<I, T>(fields: I) -> SinkResult<Vec<u8>>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(fields)?;
    writer
        .into_inner()
        .map_err(|err| SinkError::Io(err.into_error()))
}
