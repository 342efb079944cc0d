//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `memory` - In-memory document with cursor
//! - `file/` - Markdown files on disk
//! - `toml/` - `config.toml` settings storage
//! - `clock` - System and fixed clocks

pub mod clock;
pub mod file;
pub mod lines;
pub mod memory;
pub mod toml;

pub use clock::{FixedClock, SystemClock};
pub use file::FileEditor;
pub use lines::{EditorError, LineBuffer};
pub use memory::MemoryEditor;
pub use toml::TomlSettingsStore;
