//! Config service
//!
//! Key resolution and per-key validation on top of [`Storage`]. Every call
//! is a full load-mutate-save cycle; nothing is cached.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::{Config, ConfigKey, Priority, SortOrder};
use crate::error::{Result, TaskError};
use crate::storage::Storage;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Loads, validates and stores config values
#[derive(Debug, Clone)]
pub struct ConfigService {
    storage: Storage,
}

impl ConfigService {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Result<Config> {
        self.storage.load()
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        self.storage.save(config)
    }

    /// Current value for `key`, or `None` if unset
    pub fn get(&self, key: ConfigKey) -> Result<Option<String>> {
        let config = self.load()?;
        Ok(key.get(&config).map(str::to_owned))
    }

    /// Validate and persist a single value
    ///
    /// Nothing is read or written when validation fails.
    pub fn set(&self, key: ConfigKey, value: &str) -> Result<()> {
        Self::validate(key, value)?;

        let mut config = self.load()?;
        key.set(&mut config, value.to_string());
        self.save(&config)?;

        debug!(key = %key, "config value updated");
        Ok(())
    }

    /// Check `value` against the rule for `key`
    pub fn validate(key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::DefaultsPriority => value.parse::<Priority>().map(drop),
            ConfigKey::DefaultsSort => value.parse::<SortOrder>().map(drop),
            ConfigKey::UserEmail if !value.is_empty() && !EMAIL_RE.is_match(value) => Err(
                TaskError::Validation(format!("Please enter a valid email address: {}", value)),
            ),
            ConfigKey::UserEmail | ConfigKey::UserName | ConfigKey::UserGithub => Ok(()),
        }
    }
}
