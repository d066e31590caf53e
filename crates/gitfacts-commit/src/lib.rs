//! Commit types for Gitfacts.
//!
//! This crate provides the types shared by every stage of an export:
//! - [`CommitRecord`]: A commit as retrieved from Git
//! - [`Cutoff`]: The time boundary that decides which commits are exported

mod cutoff;
mod record;

pub use cutoff::{Cutoff, CutoffParseError};
pub use record::CommitRecord;
