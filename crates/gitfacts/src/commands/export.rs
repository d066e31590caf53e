//! Export command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use gitfacts_config::{Config, ConfigError, Overrides, Settings, find_and_load_config, load_config};
use gitfacts_core::{Exporter, TracingDiagnostics};

/// Arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Remote repository to clone (URL or path)
    #[arg(short, long, env = "REMOTE")]
    pub remote: Option<String>,

    /// Only export commits authored after this date (YYYY-MM-DD or RFC 3339)
    #[arg(short, long, env = "SINCE")]
    pub since: Option<String>,

    /// Output file (default: output.csv)
    #[arg(short, long, env = "GITFACTS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Commits requested per history page (default: 100)
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Column to export; repeat to choose several, in order
    #[arg(short = 'c', long = "column")]
    pub columns: Vec<String>,

    /// Configuration file (default: gitfacts.toml in this or a parent directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ExportArgs {
    fn overrides(self) -> Overrides {
        Overrides {
            remote: self.remote,
            since: self.since,
            output: self.output,
            chunk_size: self.chunk_size,
            columns: self.columns,
        }
    }
}

/// Loads the explicit configuration file, or the discovered one if any.
fn load(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return load_config(path).context("failed to load configuration");
    }
    match find_and_load_config() {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound(_)) => Ok(Config::default()),
        Err(e) => Err(e).context("failed to load configuration"),
    }
}

/// Runs the export command.
pub fn run(mut args: ExportArgs) -> Result<()> {
    let config = load(args.config.take().as_deref())?;
    let settings = Settings::resolve(&config.export, args.overrides())?;
    let output = settings.output.clone();

    info!(remote = %settings.remote, cutoff = %settings.cutoff, "exporting history");
    let summary = Exporter::new(settings)
        .run(&TracingDiagnostics)
        .context("export failed")?;

    println!(
        "Exported {} commit(s) to {}",
        summary.rows_written,
        output.display()
    );
    if summary.rows_failed > 0 {
        println!("{} row(s) could not be written", summary.rows_failed);
    }
    if summary.extraction_failures > 0 {
        println!(
            "{} value(s) could not be extracted and were left empty",
            summary.extraction_failures
        );
    }

    Ok(())
}
