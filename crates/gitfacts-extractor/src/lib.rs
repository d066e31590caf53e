//! Fact extractors for Gitfacts.
//!
//! This crate provides the extractor contract and the built-in columns:
//! - [`Extractor`]: Maps one commit to one named value
//! - [`Value`]: A single cell of output
//! - [`builtin`]: Message, timestamp, diff and identity extractors

pub mod builtin;
mod error;
mod traits;
mod value;

pub use error::{ExtractError, ExtractResult};
pub use traits::Extractor;
pub use value::Value;
