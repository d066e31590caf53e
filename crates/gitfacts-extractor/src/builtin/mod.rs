//! Built-in extractors and the name registry.

mod authored;
mod diff;
mod identity;
mod message;

use gitfacts_git::DiffSource;

use crate::Extractor;

pub use authored::AuthoredAtExtractor;
pub use diff::DiffExtractor;
pub use identity::{AuthorExtractor, IdExtractor};
pub use message::MessageExtractor;

/// Columns exported when none are configured.
pub const DEFAULT_COLUMNS: [&str; 3] = [
    MessageExtractor::NAME,
    AuthoredAtExtractor::NAME,
    DiffExtractor::NAME,
];

/// A built-in column and what it contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnInfo {
    /// Column name, as used in configuration and headers.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// Every built-in column.
pub const COLUMNS: [ColumnInfo; 5] = [
    ColumnInfo {
        name: MessageExtractor::NAME,
        description: "full commit message, verbatim",
    },
    ColumnInfo {
        name: AuthoredAtExtractor::NAME,
        description: "author timestamp (RFC 3339, author's offset)",
    },
    ColumnInfo {
        name: DiffExtractor::NAME,
        description: "patch against the primary parent (empty tree for root commits)",
    },
    ColumnInfo {
        name: IdExtractor::NAME,
        description: "full commit hash",
    },
    ColumnInfo {
        name: AuthorExtractor::NAME,
        description: "author as 'Name <email>'",
    },
];

/// Returns true if `name` is a built-in column.
pub fn is_known(name: &str) -> bool {
    COLUMNS.iter().any(|column| column.name == name)
}

/// Creates the built-in extractor registered under `name`.
///
/// Returns `None` for unknown names.
pub fn create<'a>(name: &str, diffs: &'a dyn DiffSource) -> Option<Box<dyn Extractor + 'a>> {
    let extractor: Box<dyn Extractor + 'a> = match name {
        MessageExtractor::NAME => Box::new(MessageExtractor),
        AuthoredAtExtractor::NAME => Box::new(AuthoredAtExtractor),
        IdExtractor::NAME => Box::new(IdExtractor),
        AuthorExtractor::NAME => Box::new(AuthorExtractor),
        name if name == DiffExtractor::NAME => Box::new(DiffExtractor::new(diffs)),
        _ => return None,
    };
    Some(extractor)
}
