//! Config command - show and change stamping settings

use checkstamp::adapters::TomlSettingsStore;
use checkstamp::config::set_value;
use checkstamp::core::models::StampSettings;
use checkstamp::core::ports::SettingsStore;
use checkstamp::output::{ConfigResult, OperationResult, OutputMode};

use crate::cli::app::{ConfigAction, ExcludeAction};

/// Handle config subcommands
pub fn config(action: ConfigAction, store: &TomlSettingsStore, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => show(store, mode),
        ConfigAction::Set { key, value } => set(store, &key, &value, mode),
        ConfigAction::Exclude {
            action: ExcludeAction::Add { pattern },
        } => exclude_add(store, &pattern, mode),
        ConfigAction::Exclude {
            action: ExcludeAction::Remove { pattern },
        } => exclude_remove(store, &pattern, mode),
        ConfigAction::Reset => {
            store.save(&StampSettings::default())?;
            OperationResult {
                success: true,
                message: "Settings reset to defaults.".to_string(),
            }
            .render(mode);
            Ok(())
        },
    }
}

fn show(store: &TomlSettingsStore, mode: OutputMode) -> anyhow::Result<()> {
    ConfigResult {
        path: store.path().display().to_string(),
        settings: store.load()?,
    }
    .render(mode);
    Ok(())
}

fn set(store: &TomlSettingsStore, key: &str, value: &str, mode: OutputMode) -> anyhow::Result<()> {
    let mut settings = store.load()?;
    set_value(&mut settings, key, value)?;
    store.save(&settings)?;

    OperationResult {
        success: true,
        message: format!("Set {key} = {value}"),
    }
    .render(mode);
    Ok(())
}

fn exclude_add(store: &TomlSettingsStore, pattern: &str, mode: OutputMode) -> anyhow::Result<()> {
    let mut added = false;
    store.update(&mut |s| added = s.add_exclude_pattern(pattern))?;

    let message = if added {
        format!("Added exclusion pattern: {}", pattern.trim())
    } else {
        format!("Pattern not added (blank or already present): {pattern}")
    };
    OperationResult {
        success: added,
        message,
    }
    .render(mode);
    Ok(())
}

fn exclude_remove(store: &TomlSettingsStore, pattern: &str, mode: OutputMode) -> anyhow::Result<()> {
    let mut removed = false;
    store.update(&mut |s| removed = s.remove_exclude_pattern(pattern))?;

    let message = if removed {
        format!("Removed exclusion pattern: {}", pattern.trim())
    } else {
        format!("No such exclusion pattern: {pattern}")
    };
    OperationResult {
        success: removed,
        message,
    }
    .render(mode);
    Ok(())
}
