//! Settings persistence port
//!
//! The host owns where and how settings live; the core only receives
//! the in-memory snapshot returned by [`SettingsStore::load`].

use super::super::models::StampSettings;

/// Persisted settings storage
pub trait SettingsStore {
    /// Load the current settings, falling back to defaults when none are stored
    fn load(&self) -> anyhow::Result<StampSettings>;

    /// Persist settings
    fn save(&self, settings: &StampSettings) -> anyhow::Result<()>;

    /// Load, apply a change and save in one step
    fn update(&self, change: &mut dyn FnMut(&mut StampSettings)) -> anyhow::Result<StampSettings> {
        let mut settings = self.load()?;
        change(&mut settings);
        self.save(&settings)?;
        Ok(settings)
    }
}
