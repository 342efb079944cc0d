//! In-memory editor
//!
//! Implements `Editor` over a plain line buffer with an optional cursor.
//! Counts writes so callers can tell whether a pass touched the document.

use crate::core::ports::{ClickTarget, Editor};

use super::lines::LineBuffer;

/// Editor backed by an in-memory document
#[derive(Debug, Clone, Default)]
pub struct MemoryEditor {
    buffer: LineBuffer,
    cursor: Option<usize>,
    writes: usize,
}

impl MemoryEditor {
    /// Create an editor holding `text`
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            buffer: LineBuffer::parse(text),
            cursor: None,
            writes: 0,
        }
    }

    /// Move the cursor to a line
    pub fn set_cursor(&mut self, line: usize) {
        self.cursor = Some(line);
    }

    /// Document text, terminators as given
    #[must_use]
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Number of writes that changed a line
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl Editor for MemoryEditor {
    fn line_count(&self) -> usize {
        self.buffer.len()
    }

    fn line_text(&self, line: usize) -> anyhow::Result<String> {
        Ok(self.buffer.get(line)?.to_string())
    }

    fn set_line_text(&mut self, line: usize, text: &str) -> anyhow::Result<()> {
        if self.buffer.set(line, text)? {
            self.writes += 1;
        }
        Ok(())
    }

    fn cursor_line(&self) -> Option<usize> {
        self.cursor
    }

    fn line_at_click(&self, target: ClickTarget) -> Option<usize> {
        self.buffer.line_at_offset(target)
    }
}
