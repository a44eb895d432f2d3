//! Configuration module
//!
//! Defines the persisted Config shape (user profile and default task
//! preferences), the closed set of dot-path keys, and the allowed value sets.

mod types;

pub use types::{Config, ConfigKey, Priority, SortOrder};

/// Config file location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = ".task/config.json";
