//! Command-line interface module
//!
//! Handlers for the `config` command family:
//! - config set: Validate and store a value
//! - config get: Print a single value
//! - config list: Print all values
pub mod config;
