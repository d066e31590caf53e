//! Time boundary for exported commits.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate};
use thiserror::Error;

use crate::CommitRecord;

/// Decides which commits are old enough to leave out of an export.
///
/// A commit qualifies only when it was authored strictly after the cutoff.
/// Date cutoffs are compared against the commit's calendar date in the
/// commit's own offset, not in UTC or the local time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cutoff {
    /// No boundary: the whole history qualifies.
    #[default]
    Beginning,

    /// Commits authored on a later calendar day qualify.
    Date(NaiveDate),

    /// Commits authored after this instant qualify.
    Instant(DateTime<FixedOffset>),
}

impl Cutoff {
    /// Returns true if the commit was authored strictly after the cutoff.
    #[must_use]
    pub fn admits(&self, commit: &CommitRecord) -> bool {
        match self {
            Self::Beginning => true,
            Self::Date(date) => commit.authored_at.date_naive() > *date,
            Self::Instant(instant) => commit.authored_at > *instant,
        }
    }
}

impl fmt::Display for Cutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginning => f.write_str("beginning of history"),
            Self::Date(date) => write!(f, "{date}"),
            Self::Instant(instant) => write!(f, "{}", instant.to_rfc3339()),
        }
    }
}

/// Error returned when a cutoff cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid cutoff '{0}': expected YYYY-MM-DD or an RFC 3339 timestamp")]
pub struct CutoffParseError(pub String);

impl FromStr for Cutoff {
    type Err = CutoffParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::Date(date));
        }
        DateTime::parse_from_rfc3339(s)
            .map(Self::Instant)
            .map_err(|_| CutoffParseError(s.to_string()))
    }
}
