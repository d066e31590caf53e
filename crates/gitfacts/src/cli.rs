//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Export per-commit facts from a Git repository's history to CSV.
#[derive(Debug, Parser)]
#[command(name = "gitfacts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Clone a remote and write one CSV row per commit
    Export(commands::export::ExportArgs),

    /// List the available columns
    Columns,
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Export(args) => commands::export::run(args),
            Commands::Columns => {
                commands::columns::run();
                Ok(())
            }
        }
    }
}
