//! Parsing of `cairn.toml` and the configuration store read by every command.
//!
//! The file is deserialized into a strongly-typed [`ProjectConfig`], then
//! flattened by [`build_store`] into a [`ConfigStore`]: the current
//! [`LogLevel`] threshold plus the [`Definitions`] variable store that holds
//! policy flags, message indentation, and user variables.

#![warn(missing_docs)]

pub mod definitions;
pub mod error;
pub mod loader;
pub mod log_level;
pub mod store;
pub mod types;

pub use definitions::Definitions;
pub use error::ConfigError;
pub use loader::{load_config, load_config_from_path, load_config_from_str, CONFIG_FILE_NAME};
pub use log_level::{LogLevel, ParseLogLevelError};
pub use store::{build_store, ConfigStore};
pub use types::*;
