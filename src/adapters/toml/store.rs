//! TOML settings store
//!
//! Implements the `SettingsStore` port trait using `config.toml`.

use std::path::{Path, PathBuf};

use crate::config::ConfigFile;
use crate::core::models::StampSettings;
use crate::core::ports::SettingsStore;

/// Settings store backed by a TOML file
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    /// Create a store for the given config file
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the default location
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(ConfigFile::default_path())
    }

    /// Path of the config file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(&self) -> anyhow::Result<StampSettings> {
        Ok(ConfigFile::load(&self.path).stamp)
    }

    fn save(&self, settings: &StampSettings) -> anyhow::Result<()> {
        let mut config = ConfigFile::load(&self.path);
        config.stamp = settings.clone();
        config.save(&self.path)
    }
}
