//! Configuration schema.

use serde::{Deserialize, Serialize};

/// Default number of commits requested per history page.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Default output file.
pub const DEFAULT_OUTPUT: &str = "output.csv";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Export configuration.
    #[serde(default)]
    pub export: ExportConfig,
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Remote repository to clone.
    pub remote: Option<String>,

    /// Only export commits authored after this date or timestamp.
    pub since: Option<String>,

    /// Output file path.
    #[serde(default = "default_output")]
    pub output: String,

    /// Commits requested per history page.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Columns to export, in order. Empty means the built-in defaults.
    #[serde(default)]
    pub columns: Vec<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            remote: None,
            since: None,
            output: default_output(),
            chunk_size: default_chunk_size(),
            columns: Vec::new(),
        }
    }
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}
