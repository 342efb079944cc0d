//! Watch command - stamp a file as it is edited
//!
//! Every modification is diffed against the last known contents and the
//! changed lines are queued as a deferred check, which runs once the burst
//! of filesystem events has been drained. The file write that follows comes
//! back as one more event and finds nothing to change.

use std::fs;
use std::path::Path;
use std::sync::mpsc;

use notify::{Event, RecursiveMode, Watcher};

use checkstamp::adapters::file::FileEditor;
use checkstamp::adapters::{SystemClock, TomlSettingsStore};
use checkstamp::core::models::StampSettings;
use checkstamp::core::ports::{Clock, SettingsStore};
use checkstamp::core::services::{ApplyReport, ChangeAdapter, ChangeEvent};
use checkstamp::output::{FileResult, OutputMode};

use super::load_settings;

/// Watch a Markdown file until interrupted
pub fn watch(path: &Path, store: &TomlSettingsStore, mode: OutputMode) -> anyhow::Result<()> {
    let file = fs::canonicalize(path)?;
    let dir = file
        .parent()
        .ok_or_else(|| anyhow::anyhow!("cannot watch {}", file.display()))?;

    let mut editor = FileEditor::open(&file)?;
    let mut adapter = ChangeAdapter::new();
    let clock = SystemClock;
    load_settings(store)?;

    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx)?;
    // Watch the directory so editors that save by rename are still seen.
    watcher.watch(dir, RecursiveMode::NonRecursive)?;

    log::info!("Watching {} (Ctrl-C to stop)", file.display());

    while let Ok(received) = rx.recv() {
        match received {
            Ok(event) if touches(&event, &file) => {},
            Ok(_) => continue,
            Err(e) => {
                log::warn!("watch error: {e}");
                continue;
            },
        }

        // Coalesce the burst; the reload below sees all of it.
        while rx.try_recv().is_ok() {}

        // Re-read each turn so config edits apply without a restart.
        let settings = store.load()?;
        match sync_once(&mut editor, &mut adapter, &settings, &clock) {
            Ok(Some((report, written))) if !report.is_empty() => {
                FileResult::from_report(file.display().to_string(), &report, written).render(mode);
            },
            Ok(_) => {},
            Err(e) => log::error!("failed to update {}: {e:#}", file.display()),
        }
    }

    Ok(())
}

/// One watch turn: pick up the edit on disk, stamp the lines it changed and
/// write the file back
///
/// Returns `None` when no line text changed, which is how our own write looks
/// when it comes back. The flag is whether the file was written; it stays
/// false when the user saved again in the meantime, and that save's event
/// starts the next turn.
fn sync_once(
    editor: &mut FileEditor,
    adapter: &mut ChangeAdapter,
    settings: &StampSettings,
    clock: &dyn Clock,
) -> anyhow::Result<Option<(ApplyReport, bool)>> {
    let changed = editor.reload()?;
    if changed.is_empty() {
        return Ok(None);
    }
    log::debug!("{} line(s) changed", changed.len());
    adapter.defer(ChangeEvent::LinesChanged(changed));

    let report = adapter.run_deferred(editor, settings, clock)?;
    let written = editor.save()?;
    Ok(Some((report, written)))
}

fn touches(event: &Event, file: &Path) -> bool {
    (event.kind.is_modify() || event.kind.is_create())
        && event.paths.iter().any(|p| p.file_name() == file.file_name())
}
