//! Editor port
//!
//! Line-level read/write access to a document owned by the host.

/// A pointer click inside the document, as a byte offset from its start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickTarget {
    /// Byte offset of the click in the document text
    pub offset: usize,
}

impl ClickTarget {
    /// Create a click target at a byte offset
    #[must_use]
    pub const fn at(offset: usize) -> Self {
        Self { offset }
    }
}

/// Document access abstraction
///
/// Line indices are 0-based. Implementations decide how a write is
/// dispatched; the core treats each call as atomic.
#[cfg_attr(test, mockall::automock)]
pub trait Editor {
    /// Number of lines in the document
    fn line_count(&self) -> usize;

    /// Text of a line, without its terminator
    fn line_text(&self, line: usize) -> anyhow::Result<String>;

    /// Replace the whole text of a line
    fn set_line_text(&mut self, line: usize, text: &str) -> anyhow::Result<()>;

    /// Line the cursor is on, if the editor has a cursor
    fn cursor_line(&self) -> Option<usize>;

    /// Resolve a click to the line it landed on
    fn line_at_click(&self, target: ClickTarget) -> Option<usize>;
}
