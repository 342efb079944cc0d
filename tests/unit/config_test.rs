//! Tests for settings persistence

use std::fs;

use checkstamp::adapters::TomlSettingsStore;
use checkstamp::config::{ConfigError, ConfigFile, set_value};
use checkstamp::core::models::StampSettings;
use checkstamp::core::ports::SettingsStore;
use tempfile::TempDir;

// =============================================================================
// FILE FORMAT
// =============================================================================

#[test]
fn test_config_default() {
    let config = ConfigFile::default();
    assert!(config.stamp.enabled);
    assert_eq!(config.stamp.exclude_patterns, vec!["#task"]);
}

#[test]
fn test_config_reads_stamp_table() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r##"
[stamp]
include_time = true
exclude_patterns = ["#recurring", "#someday"]
"##,
    )
    .unwrap();

    let config = ConfigFile::load(&path);
    assert!(config.stamp.include_time);
    assert!(config.stamp.enabled);
    assert_eq!(config.stamp.exclude_patterns, vec!["#recurring", "#someday"]);
    assert_eq!(config.stamp.date_format, "YYYY-MM-DD");
}

#[test]
fn test_config_written_as_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    ConfigFile::default().save(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[stamp]"));
    assert!(content.contains("include_time = false"));
}

// =============================================================================
// STORE
// =============================================================================

#[test]
fn test_store_round_trip() {
    let temp = TempDir::new().unwrap();
    let store = TomlSettingsStore::new(temp.path().join("config.toml"));

    let settings = StampSettings {
        enabled: false,
        include_time: true,
        exclude_patterns: vec![],
        date_format: "YYYY-MM-DD".to_string(),
    };
    store.save(&settings).unwrap();
    assert_eq!(store.load().unwrap(), settings);
}

#[test]
fn test_set_value_through_store() {
    let temp = TempDir::new().unwrap();
    let store = TomlSettingsStore::new(temp.path().join("config.toml"));

    let mut settings = store.load().unwrap();
    set_value(&mut settings, "exclude_patterns", "#a\n#b").unwrap();
    store.save(&settings).unwrap();

    assert_eq!(store.load().unwrap().exclude_patterns, vec!["#a", "#b"]);
}

#[test]
fn test_unknown_key_rejected() {
    let mut settings = StampSettings::default();
    let err = set_value(&mut settings, "emoji", "🎉").unwrap_err();
    assert_eq!(err, ConfigError::UnknownKey("emoji".to_string()));
    assert!(err.to_string().contains("unknown setting"));
}
