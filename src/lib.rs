//! checkstamp - Completion stamps for Markdown checklists
//!
//! When a checklist item goes from `[ ]` to `[x]`, a checkmark and the
//! completion date are appended to its line. When it is unchecked again,
//! the stamp is removed.
//!
//! ```
//! use chrono::NaiveDate;
//! use checkstamp::core::models::{StampAction, StampSettings};
//! use checkstamp::core::services::transform;
//!
//! let now = NaiveDate::from_ymd_opt(2026, 2, 7).unwrap().and_hms_opt(14, 30, 0).unwrap();
//! let out = transform("- [x] Buy groceries", &StampSettings::default(), now);
//! assert_eq!(out.action, StampAction::Append);
//! assert_eq!(out.result, "- [x] Buy groceries ✅ 2026-02-07");
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
