//! Line buffer shared by the document adapters

use thiserror::Error;

use crate::core::ports::ClickTarget;

/// Errors raised by document adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Line index past the end of the document
    #[error("line {line} out of range (document has {len} lines)")]
    LineOutOfRange {
        /// Requested 0-based line
        line: usize,
        /// Number of lines in the document
        len: usize,
    },

    /// Replacement text would split the line
    #[error("replacement for line {0} contains a line break")]
    MultilineText(usize),
}

/// A document held as lines, each with its own terminator
///
/// Terminators (`\n`, `\r\n` or none on a final line) are kept per line, so
/// writing the buffer back reproduces untouched lines byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    endings: Vec<&'static str>,
}

impl LineBuffer {
    /// Split text into lines, remembering how each one was terminated
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut buffer = Self::default();
        for piece in text.split_inclusive('\n') {
            let (line, ending) = if let Some(line) = piece.strip_suffix("\r\n") {
                (line, "\r\n")
            } else if let Some(line) = piece.strip_suffix('\n') {
                (line, "\n")
            } else {
                (piece, "")
            };
            buffer.lines.push(line.to_string());
            buffer.endings.push(ending);
        }
        buffer
    }

    /// Number of lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether there are no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of one line, without its terminator
    pub fn get(&self, line: usize) -> Result<&str, EditorError> {
        self.lines
            .get(line)
            .map(String::as_str)
            .ok_or(EditorError::LineOutOfRange {
                line,
                len: self.lines.len(),
            })
    }

    /// Replace the text of one line, keeping its terminator.
    /// Returns whether the text actually changed.
    pub fn set(&mut self, line: usize, text: &str) -> Result<bool, EditorError> {
        if text.contains(['\n', '\r']) {
            return Err(EditorError::MultilineText(line));
        }
        let len = self.lines.len();
        let slot = self
            .lines
            .get_mut(line)
            .ok_or(EditorError::LineOutOfRange { line, len })?;
        if slot.as_str() == text {
            return Ok(false);
        }
        text.clone_into(slot);
        Ok(true)
    }

    /// The whole document, terminators included
    #[must_use]
    pub fn text(&self) -> String {
        let mut text = String::new();
        for (line, ending) in self.lines.iter().zip(&self.endings) {
            text.push_str(line);
            text.push_str(ending);
        }
        text
    }

    /// Line containing the byte offset into [`text`](Self::text)
    #[must_use]
    pub fn line_at_offset(&self, target: ClickTarget) -> Option<usize> {
        let mut start = 0;
        for (index, (line, ending)) in self.lines.iter().zip(&self.endings).enumerate() {
            let end = start + line.len();
            let next = end + ending.len();
            // The terminator belongs to its line, its final `\n` included.
            if target.offset < next.max(end + 1) {
                return Some(index);
            }
            start = next;
        }
        None
    }

    /// Indices whose text differs in `other`, plus any lines it added
    #[must_use]
    pub fn changed_lines(&self, other: &Self) -> Vec<usize> {
        (0..other.len())
            .filter(|&i| self.lines.get(i) != other.lines.get(i))
            .collect()
    }
}
