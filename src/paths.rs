//! Centralized path definitions for checkstamp
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.checkstamp/
//! └── config.toml               # Stamping settings
//! ```
//!
//! The config location can be overridden with `CHECKSTAMP_CONFIG` or the
//! `--config` flag.

use std::path::PathBuf;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "CHECKSTAMP_CONFIG";

/// Global config directory name
const GLOBAL_DIR: &str = ".checkstamp";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global checkstamp directory.
///
/// Returns `~/.checkstamp/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `$CHECKSTAMP_CONFIG` when set, otherwise `~/.checkstamp/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .filter(|p| !p.is_empty())
        .map_or_else(|| global_config_dir().join(GLOBAL_CONFIG_FILE), PathBuf::from)
}
