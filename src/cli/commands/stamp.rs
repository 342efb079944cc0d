//! Stamp command - apply the transform to Markdown files on disk
//!
//! `-` as the path reads one document from stdin and writes the stamped
//! document to stdout, for use as an editor filter.

use std::io::{self, Read, Write};
use std::path::Path;

use checkstamp::adapters::file::{FileEditor, markdown_files};
use checkstamp::adapters::{MemoryEditor, TomlSettingsStore};
use checkstamp::core::models::StampSettings;
use checkstamp::core::ports::{Clock, Editor};
use checkstamp::core::services::{ChangeAdapter, ChangeEvent};
use checkstamp::output::{FileResult, OutputMode, StampRunResult};

use super::{clock_for, load_settings};

/// Stamp one file, every Markdown file under a directory, or stdin
pub fn stamp(
    path: &Path,
    lines: &[usize],
    dry_run: bool,
    at: Option<&str>,
    store: &TomlSettingsStore,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if lines.contains(&0) {
        anyhow::bail!("line numbers start at 1");
    }
    let from_stdin = path.as_os_str() == "-";
    if from_stdin && (dry_run || mode == OutputMode::Json) {
        anyhow::bail!("--dry-run and --json cannot be used when reading from stdin");
    }

    let files = if from_stdin { Vec::new() } else { markdown_files(path)? };
    if !from_stdin && !lines.is_empty() && (files.len() != 1 || path.is_dir()) {
        anyhow::bail!("--line can only be used with a single file");
    }

    let settings = load_settings(store)?;
    if !settings.enabled {
        log::warn!("stamping is disabled; enable it with 'checkstamp config set enabled true'");
    }
    let clock = clock_for(at)?;

    if from_stdin {
        return stamp_stdin(lines, &settings, clock.as_ref());
    }

    let adapter = ChangeAdapter::new();
    let mut results = Vec::with_capacity(files.len());
    for file in &files {
        let mut editor = FileEditor::open(file)?;
        let event = event_for(lines, editor.line_count());

        let report = adapter.handle(&mut editor, &event, &settings, clock.as_ref())?;
        let written = if dry_run { false } else { editor.save()? };
        log::debug!("{}: {} line(s) checked", file.display(), report.lines_checked);

        results.push(FileResult::from_report(file.display().to_string(), &report, written));
    }

    StampRunResult {
        dry_run,
        files: results,
    }
    .render(mode);

    Ok(())
}

fn stamp_stdin(lines: &[usize], settings: &StampSettings, clock: &dyn Clock) -> anyhow::Result<()> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let mut editor = MemoryEditor::from_text(&input);
    let event = event_for(lines, editor.line_count());
    let report = ChangeAdapter::new().handle(&mut editor, &event, settings, clock)?;
    log::info!(
        "stdin: stamped {} item(s), cleared {} stamp(s)",
        report.appended(),
        report.removed()
    );
    log::debug!("stdin: {} line(s) rewritten", editor.writes());

    let mut stdout = io::stdout().lock();
    stdout.write_all(editor.text().as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Every line, or just the requested 1-based lines
fn event_for(lines: &[usize], line_count: usize) -> ChangeEvent {
    if lines.is_empty() {
        ChangeEvent::LineRangeChanged(0..line_count)
    } else {
        ChangeEvent::LinesChanged(lines.iter().map(|n| n - 1).collect())
    }
}
