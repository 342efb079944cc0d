//! File-backed documents
//!
//! Implements `Editor` over a Markdown file on disk.

mod editor;

pub use editor::{FileEditor, is_markdown, markdown_files};
