//! Markdown file editor
//!
//! Loads a file into lines, lets the change adapter edit them in memory,
//! and writes the file back on `save`. Lines that were not edited are
//! written back exactly as read, terminators included.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::WalkDir;

use crate::adapters::lines::LineBuffer;
use crate::core::ports::{ClickTarget, Editor};

/// Editor backed by a file on disk
#[derive(Debug, Clone)]
pub struct FileEditor {
    path: PathBuf,
    buffer: LineBuffer,
    /// File contents as last read or written
    on_disk: String,
    dirty: bool,
}

impl FileEditor {
    /// Load a file
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = read(&path)?;
        Ok(Self {
            path,
            buffer: LineBuffer::parse(&content),
            on_disk: content,
            dirty: false,
        })
    }

    /// Full document text as it would be written
    #[must_use]
    pub fn contents(&self) -> String {
        self.buffer.text()
    }

    /// Write unsaved edits back to disk. Returns whether anything was written.
    ///
    /// If the file changed on disk since it was last read, nothing is written
    /// and the edits stay pending; the next [`reload`](Self::reload) drops
    /// them and reports the affected lines as changed.
    pub fn save(&mut self) -> anyhow::Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        if read(&self.path)? != self.on_disk {
            log::warn!("{} changed on disk, not overwriting", self.path.display());
            return Ok(false);
        }

        let content = self.contents();
        fs::write(&self.path, &content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        self.on_disk = content;
        self.dirty = false;
        Ok(true)
    }

    /// Re-read the file, discarding unsaved edits
    ///
    /// Returns the 0-based lines whose text differs from what was held before.
    pub fn reload(&mut self) -> anyhow::Result<Vec<usize>> {
        let content = read(&self.path)?;
        let fresh = LineBuffer::parse(&content);
        let changed = self.buffer.changed_lines(&fresh);
        self.buffer = fresh;
        self.on_disk = content;
        self.dirty = false;
        Ok(changed)
    }
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

impl Editor for FileEditor {
    fn line_count(&self) -> usize {
        self.buffer.len()
    }

    fn line_text(&self, line: usize) -> anyhow::Result<String> {
        Ok(self.buffer.get(line)?.to_string())
    }

    fn set_line_text(&mut self, line: usize, text: &str) -> anyhow::Result<()> {
        if self.buffer.set(line, text)? {
            self.dirty = true;
        }
        Ok(())
    }

    fn cursor_line(&self) -> Option<usize> {
        None
    }

    fn line_at_click(&self, target: ClickTarget) -> Option<usize> {
        self.buffer.line_at_offset(target)
    }
}

/// Whether a path looks like a Markdown file
#[must_use]
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md") || e.eq_ignore_ascii_case("markdown"))
}

/// A file itself, or every Markdown file under a directory (hidden entries skipped)
pub fn markdown_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.exists() {
        anyhow::bail!("path does not exist: {}", root.display());
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root).into_iter().filter_entry(|e| {
        e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.')
    });
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}
