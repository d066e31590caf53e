//! Core library for Gitfacts.
//!
//! This crate provides the export pipeline: paging through history,
//! extracting one row per commit, and writing rows to CSV while a temporary
//! clone of the remote is held.

mod diagnostics;
mod error;
mod export;
mod pipeline;
mod sink;
mod walker;
mod workarea;

pub use diagnostics::{Diagnostics, TracingDiagnostics};
pub use error::{CoreError, CoreResult};
pub use export::{ExportSummary, Exporter, RunPhase};
pub use pipeline::{Pipeline, Row};
pub use sink::{RowSink, SinkError, SinkResult, SinkStats};
pub use walker::{HistoryPages, commits_since};
pub use workarea::WorkArea;
