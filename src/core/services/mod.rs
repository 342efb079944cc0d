//! Business logic services
//!
//! - [`classifier`] - Recognize checklist syntax and stamps
//! - [`formatter`] - Render the completion stamp
//! - [`transform`] - Decide whether a line gains or loses its stamp
//! - [`adapter`] - Apply the transform in response to host change events

pub mod adapter;
pub mod classifier;
pub mod formatter;
pub mod transform;

pub use adapter::{AppliedChange, ApplyReport, ChangeAdapter, ChangeEvent};
pub use classifier::{classify, has_stamp, is_checked_item, is_unchecked_item, matches_exclusion};
pub use formatter::format_stamp;
pub use transform::{strip_stamp, transform};
