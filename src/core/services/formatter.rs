//! Stamp formatter - renders the completion marker

use chrono::NaiveDateTime;

use crate::core::models::{STAMP_GLYPH, StampSettings};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Render the stamp for `now`, including its leading space
///
/// Produces ` ✅ YYYY-MM-DD`, or ` ✅ YYYY-MM-DD HH:MM` when time is enabled.
/// Any `date_format` other than `YYYY-MM-DD` is accepted and ignored; see
/// [`StampSettings::has_supported_date_format`].
#[must_use]
pub fn format_stamp(now: NaiveDateTime, settings: &StampSettings) -> String {
    let date = now.format(DATE_FORMAT);
    if settings.include_time {
        format!(" {STAMP_GLYPH} {date} {}", now.format(TIME_FORMAT))
    } else {
        format!(" {STAMP_GLYPH} {date}")
    }
}
