//! Command implementations

mod config_cmd;
mod line;
mod stamp;
#[cfg(feature = "watch")]
mod watch;

use std::path::PathBuf;

use checkstamp::adapters::{FixedClock, SystemClock, TomlSettingsStore};
use checkstamp::core::models::StampSettings;
use checkstamp::core::ports::{Clock, SettingsStore};

pub use config_cmd::config;
pub use line::line;
pub use stamp::stamp;
#[cfg(feature = "watch")]
pub use watch::watch;

/// Settings store for an explicit config path, or the default location
pub fn settings_store(path: Option<PathBuf>) -> TomlSettingsStore {
    path.map_or_else(TomlSettingsStore::default_location, TomlSettingsStore::new)
}

/// Load settings once for a run, warning about values that are ignored
fn load_settings(store: &TomlSettingsStore) -> anyhow::Result<StampSettings> {
    let settings = store.load()?;
    if !settings.has_supported_date_format() {
        log::warn!(
            "date format {:?} is not supported, using YYYY-MM-DD",
            settings.date_format
        );
    }
    Ok(settings)
}

/// The wall clock, or a fixed moment when `--at` was given
fn clock_for(at: Option<&str>) -> anyhow::Result<Box<dyn Clock>> {
    match at {
        Some(at) => {
            let clock = FixedClock::parse(at)
                .map_err(|e| anyhow::anyhow!("invalid --at value '{at}' ({e}). Use: YYYY-MM-DD HH:MM"))?;
            Ok(Box::new(clock))
        },
        None => Ok(Box::new(SystemClock)),
    }
}
