//! Author timestamp column.

use chrono::SecondsFormat;
use gitfacts_commit::CommitRecord;

use crate::{ExtractResult, Extractor, Value};

/// Renders the author timestamp as RFC 3339 in the author's own offset.
///
/// UTC is written as `+00:00`, never `Z`, so every value has the same shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthoredAtExtractor;

impl AuthoredAtExtractor {
    /// Column name.
    pub const NAME: &'static str = "authored_at";
}

impl Extractor for AuthoredAtExtractor {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extract(&self, commit: &CommitRecord) -> ExtractResult<Value> {
        Ok(Value::Text(
            commit
                .authored_at
                .to_rfc3339_opts(SecondsFormat::Secs, false),
        ))
    }
}
