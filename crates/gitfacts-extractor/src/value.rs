//! Output values.

use std::fmt;

/// A single cell of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Extracted text, written as-is. Quoting is left to the writer.
    Text(String),

    /// Placeholder for a value that could not be extracted.
    ///
    /// Rendered as an empty field so the row keeps its column count.
    Missing,
}

impl Value {
    /// Returns the text that goes into the output field.
    #[must_use]
    pub fn as_field(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Missing => "",
        }
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_field())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field() {
        let value = Value::from("line one\nline two");
        assert_eq!(value.as_field(), "line one\nline two");
    }

    #[test]
    fn test_missing_renders_empty() {
        assert_eq!(Value::Missing.as_field(), "");
        assert_eq!(Value::Missing.to_string(), "");
    }

    #[test]
    fn test_from_string() {
        assert_eq!(Value::from(String::from("x")), Value::Text("x".to_string()));
    }
}
