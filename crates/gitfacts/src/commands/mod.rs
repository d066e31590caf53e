//! Subcommands.

pub mod columns;
pub mod export;
