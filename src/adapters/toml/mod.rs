//! TOML-backed settings storage
//!
//! Implements `SettingsStore` on top of the config file.

mod store;

pub use store::TomlSettingsStore;
