//! Configuration management for Gitfacts.
//!
//! This crate loads the optional `gitfacts.toml` file and merges it with
//! command-line and environment overrides into validated [`Settings`].

mod error;
mod loader;
mod schema;
mod settings;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config, find_and_load_config_from, load_config};
pub use schema::{Config, DEFAULT_CHUNK_SIZE, DEFAULT_OUTPUT, ExportConfig};
pub use settings::{Overrides, Settings};
