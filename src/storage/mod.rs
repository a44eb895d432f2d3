//! Config file persistence
//!
//! Reads and writes the Config as pretty-printed JSON at a single path,
//! creating the parent directory and default content on first use.
//! There is no locking: concurrent writers race and the last save wins.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::error::{Result, TaskError};

/// File-backed config storage
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config, creating the file with the default shape if missing
    pub fn load(&self) -> Result<Config> {
        if !self.exists() {
            return self.initialize();
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            TaskError::storage(
                format!("Failed to read config from '{}'", self.path.display()),
                e,
            )
        })?;

        let config: Config = serde_json::from_str(&content).map_err(|e| {
            TaskError::storage(
                format!("Failed to parse config at '{}'", self.path.display()),
                e,
            )
        })?;

        debug!(path = %self.path.display(), "loaded config");
        Ok(config)
    }

    /// Write the whole config, replacing any previous content
    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|e| TaskError::storage("Failed to serialize config", e))?;

        // Create parent directories if needed
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                TaskError::storage(
                    format!("Failed to create directory '{}'", parent.display()),
                    e,
                )
            })?;
        }

        fs::write(&self.path, json).map_err(|e| {
            TaskError::storage(
                format!("Failed to write config to '{}'", self.path.display()),
                e,
            )
        })?;

        debug!(path = %self.path.display(), "saved config");
        Ok(())
    }

    /// Whether the backing file is present; check failures count as absent
    pub fn exists(&self) -> bool {
        match self.path.try_exists() {
            Ok(exists) => exists,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot check config file");
                false
            }
        }
    }

    /// Persist and return the default (empty) config
    pub fn initialize(&self) -> Result<Config> {
        let config = Config::default();
        self.save(&config)?;
        debug!(path = %self.path.display(), "initialized config");
        Ok(config)
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_storage() -> (TempDir, Storage) {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join(".task/config.json"));
        (temp, storage)
    }

    #[test]
    fn test_default_path() {
        assert_eq!(Storage::default().path(), Path::new(".task/config.json"));
    }

    #[test]
    fn test_load_missing_creates_default() {
        let (_temp, storage) = temp_storage();
        assert!(!storage.exists());

        let config = storage.load().unwrap();

        assert_eq!(config, Config::default());
        assert!(storage.exists());
        let content = fs::read_to_string(storage.path()).unwrap();
        assert_eq!(content, "{\n  \"user\": {},\n  \"defaults\": {}\n}");
    }

    #[test]
    fn test_load_twice_is_stable() {
        let (_temp, storage) = temp_storage();
        let mut config = Config::default();
        config.user.name = Some("Test User".to_string());
        storage.save(&config).unwrap();

        let first = storage.load().unwrap();
        let second = storage.load().unwrap();
        assert_eq!(first, second);
        assert_eq!(first, config);
    }

    #[test]
    fn test_save_creates_directories() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join("nested/dir/config.json"));

        storage.save(&Config::default()).unwrap();

        assert!(storage.path().exists());
    }

    #[test]
    fn test_save_pretty_prints_with_two_spaces() {
        let (_temp, storage) = temp_storage();
        let mut config = Config::default();
        config.defaults.priority = Some("high".to_string());
        storage.save(&config).unwrap();

        let content = fs::read_to_string(storage.path()).unwrap();
        assert!(content.contains("\n  \"defaults\": {\n    \"priority\": \"high\"\n  }"));
    }

    #[test]
    fn test_save_replaces_content() {
        let (_temp, storage) = temp_storage();
        let mut config = Config::default();
        config.user.github = Some("octocat".to_string());
        storage.save(&config).unwrap();

        storage.save(&Config::default()).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.user.github, None);
    }

    #[test]
    fn test_load_invalid_json() {
        let (_temp, storage) = temp_storage();
        fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
        fs::write(storage.path(), "{ not json").unwrap();

        let err = storage.load().unwrap_err();
        assert_eq!(err.code(), "STORAGE_ERROR");
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_save_fails_when_parent_is_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join(".task");
        fs::write(&blocker, "not a directory").unwrap();
        let storage = Storage::new(blocker.join("config.json"));

        let err = storage.save(&Config::default()).unwrap_err();
        assert!(matches!(err, TaskError::Storage { .. }));
    }

    #[test]
    fn test_initialize_overwrites_existing() {
        let (_temp, storage) = temp_storage();
        let mut config = Config::default();
        config.user.name = Some("Someone".to_string());
        storage.save(&config).unwrap();

        let initialized = storage.initialize().unwrap();

        assert_eq!(initialized, Config::default());
        assert_eq!(storage.load().unwrap(), Config::default());
    }
}
