//! Domain models for checkstamp
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`StampSettings`] - Read-only configuration snapshot passed to every call
//! - [`LineState`] - Which checklist state a line is in
//! - [`StampAction`] - What the transform decided to do with a line
//! - [`Transformed`] - The transform's decision plus the resulting text

mod line_state;
mod settings;
mod stamp;

pub use line_state::LineState;
pub use settings::{DEFAULT_DATE_FORMAT, StampSettings, parse_exclude_patterns};
pub use stamp::{STAMP_GLYPH, StampAction, Transformed};
