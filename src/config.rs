//! Configuration file management
//!
//! Settings are stored as TOML, by default at `~/.checkstamp/config.toml`:
//!
//! ```toml
//! [stamp]
//! enabled = true
//! include_time = false
//! exclude_patterns = ["#task"]
//! date_format = "YYYY-MM-DD"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{StampSettings, parse_exclude_patterns};
use crate::paths;

/// Errors from editing configuration values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Key is not a known setting
    #[error("unknown setting: {0}. Use: enabled, include_time, exclude_patterns, date_format")]
    UnknownKey(String),

    /// Value could not be parsed for the key
    #[error("invalid value for {key}: {value}")]
    InvalidValue {
        /// Setting name
        key: String,
        /// Rejected value
        value: String,
    },
}

/// On-disk configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Stamping settings
    #[serde(default)]
    pub stamp: StampSettings,
}

impl ConfigFile {
    /// Get the default config file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or defaults if the file is missing or unreadable
    #[must_use]
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path).map(|content| toml::from_str(&content)) {
            Ok(Ok(config)) => config,
            Ok(Err(e)) => {
                log::warn!("ignoring malformed config {}: {e}", path.display());
                Self::default()
            },
            Err(e) => {
                log::warn!("cannot read config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to disk
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Set one setting from its textual form
///
/// `exclude_patterns` takes a comma- or newline-separated list.
pub fn set_value(settings: &mut StampSettings, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    };

    match key.replace('-', "_").as_str() {
        "enabled" => settings.enabled = parse_bool(value).ok_or_else(invalid)?,
        "include_time" => settings.include_time = parse_bool(value).ok_or_else(invalid)?,
        "exclude_patterns" => {
            settings.exclude_patterns = parse_exclude_patterns(&value.replace(',', "\n"));
        },
        "date_format" => {
            let format = value.trim();
            if format.is_empty() {
                return Err(invalid());
            }
            settings.date_format = format.to_string();
        },
        _ => return Err(ConfigError::UnknownKey(key.to_string())),
    }
    Ok(())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
