//! Core domain logic for checkstamp
//!
//! This module contains pure business logic with no I/O dependencies.
//! All interactions with the hosting editor are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (StampSettings, LineState, StampAction)
//! - `services/` - Classification, formatting, the stamp transform and the change adapter
//! - `ports/` - Trait definitions for the host (editor, clock, settings storage)

pub mod models;
pub mod ports;
pub mod services;
