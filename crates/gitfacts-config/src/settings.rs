//! Resolved export settings.

use std::path::PathBuf;

use gitfacts_commit::Cutoff;

use crate::{ConfigError, ConfigResult, ExportConfig};

/// Values supplied on the command line or through the environment.
///
/// Each field that is set wins over the configuration file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Remote repository to clone.
    pub remote: Option<String>,
    /// Cutoff text (`YYYY-MM-DD` or RFC 3339).
    pub since: Option<String>,
    /// Output file path.
    pub output: Option<PathBuf>,
    /// Commits requested per history page.
    pub chunk_size: Option<usize>,
    /// Columns to export. Empty keeps the configured ones.
    pub columns: Vec<String>,
}

/// Validated settings for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Remote repository to clone.
    pub remote: String,
    /// Commits authored on or before this boundary are skipped.
    pub cutoff: Cutoff,
    /// Output file path.
    pub output: PathBuf,
    /// Commits requested per history page.
    pub chunk_size: usize,
    /// Columns to export, in order. Empty means the built-in defaults.
    pub columns: Vec<String>,
}

impl Settings {
    /// Merges overrides over the file configuration and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRemote`] if no remote is set anywhere,
    /// and other variants for unparseable cutoffs or a zero chunk size.
    pub fn resolve(config: &ExportConfig, overrides: Overrides) -> ConfigResult<Self> {
        let remote = overrides
            .remote
            .or_else(|| config.remote.clone())
            .filter(|remote| !remote.trim().is_empty())
            .ok_or(ConfigError::MissingRemote)?;

        let cutoff = match overrides.since.or_else(|| config.since.clone()) {
            Some(since) if !since.trim().is_empty() => since.parse::<Cutoff>()?,
            _ => Cutoff::Beginning,
        };

        let chunk_size = overrides.chunk_size.unwrap_or(config.chunk_size);
        if chunk_size == 0 {
            return Err(ConfigError::Invalid(
                "chunk_size must be at least 1".to_string(),
            ));
        }

        let columns = if overrides.columns.is_empty() {
            config.columns.clone()
        } else {
            overrides.columns
        };

        Ok(Self {
            remote,
            cutoff,
            output: overrides
                .output
                .unwrap_or_else(|| PathBuf::from(&config.output)),
            chunk_size,
            columns,
        })
    }
}
