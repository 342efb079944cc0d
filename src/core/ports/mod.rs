//! Port traits (interfaces) for the hosting editor
//!
//! These traits define the boundaries between the stamping logic and the
//! environment that owns the document, the wall clock and persisted settings.
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete implementations.
//! Tests drive the change adapter through an in-memory editor and a fixed clock.

mod clock;
mod editor;
mod settings_store;

pub use clock::Clock;
#[cfg(test)]
pub use editor::MockEditor;
pub use editor::{ClickTarget, Editor};
pub use settings_store::SettingsStore;
