//! Commit message column.

use gitfacts_commit::CommitRecord;

use crate::{ExtractResult, Extractor, Value};

/// Returns the full commit message, newlines included.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageExtractor;

impl MessageExtractor {
    /// Column name.
    pub const NAME: &'static str = "message";
}

impl Extractor for MessageExtractor {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extract(&self, commit: &CommitRecord) -> ExtractResult<Value> {
        Ok(Value::Text(commit.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_multiline_message_verbatim() {
        let message = "feat: add export\n\nLonger body, with \"quotes\".\n";
        let commit = CommitRecord::new(
            "abc",
            DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z").unwrap(),
            message,
        );

        let value = MessageExtractor.extract(&commit).unwrap();
        assert_eq!(value, Value::Text(message.to_string()));
    }

    #[test]
    fn test_name() {
        assert_eq!(MessageExtractor.name(), "message");
    }
}
