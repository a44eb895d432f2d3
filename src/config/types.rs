use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TaskError;

/// Task configuration as persisted in `.task/config.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// User profile
    #[serde(default)]
    pub user: UserProfile,

    /// Default task preferences
    #[serde(default)]
    pub defaults: DefaultSettings,
}

/// User profile fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// GitHub username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// Default task preferences
///
/// Stored as plain strings: values are checked when written through
/// `ConfigService::set`, never when read back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                TaskError::Validation(format!(
                    "Priority must be one of {}: {}",
                    join_names(Self::ALL.iter().map(Priority::as_str)),
                    s
                ))
            })
    }
}

/// Task list sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Created,
    Updated,
    Priority,
    Due,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Created,
        SortOrder::Updated,
        SortOrder::Priority,
        SortOrder::Due,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Created => "created",
            SortOrder::Updated => "updated",
            SortOrder::Priority => "priority",
            SortOrder::Due => "due",
        }
    }
}

impl FromStr for SortOrder {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| {
                TaskError::Validation(format!(
                    "Sort order must be one of {}: {}",
                    join_names(Self::ALL.iter().map(SortOrder::as_str)),
                    s
                ))
            })
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join("/")
}

/// Recognized dot-path config keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    UserName,
    UserEmail,
    UserGithub,
    DefaultsPriority,
    DefaultsSort,
}

impl ConfigKey {
    /// All keys, in display order
    pub const ALL: [ConfigKey; 5] = [
        ConfigKey::UserName,
        ConfigKey::UserEmail,
        ConfigKey::UserGithub,
        ConfigKey::DefaultsPriority,
        ConfigKey::DefaultsSort,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::UserName => "user.name",
            ConfigKey::UserEmail => "user.email",
            ConfigKey::UserGithub => "user.github",
            ConfigKey::DefaultsPriority => "defaults.priority",
            ConfigKey::DefaultsSort => "defaults.sort",
        }
    }

    /// Read the field this key names
    pub fn get<'a>(&self, config: &'a Config) -> Option<&'a str> {
        let field = match self {
            ConfigKey::UserName => &config.user.name,
            ConfigKey::UserEmail => &config.user.email,
            ConfigKey::UserGithub => &config.user.github,
            ConfigKey::DefaultsPriority => &config.defaults.priority,
            ConfigKey::DefaultsSort => &config.defaults.sort,
        };
        field.as_deref()
    }

    /// Assign the field this key names
    pub fn set(&self, config: &mut Config, value: String) {
        let field = match self {
            ConfigKey::UserName => &mut config.user.name,
            ConfigKey::UserEmail => &mut config.user.email,
            ConfigKey::UserGithub => &mut config.user.github,
            ConfigKey::DefaultsPriority => &mut config.defaults.priority,
            ConfigKey::DefaultsSort => &mut config.defaults.sort,
        };
        *field = Some(value);
    }
}

impl FromStr for ConfigKey {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| TaskError::Validation(format!("Invalid config key: {}", s)))
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
