//! Stamp transform - decides whether a line gains or loses its stamp
//!
//! The decision depends only on the line's present text, never on what the
//! line looked like before. Applying the transform to its own output is
//! always a no-op.
//!
//! Rules, first match wins:
//!
//! 1. Checked, unstamped and not excluded: append a fresh stamp.
//! 2. Unchecked and stamped: strip the stamp. Exclusion is not consulted, so
//!    stale stamps are cleaned up even on excluded lines.
//! 3. Anything else: leave the line alone.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use super::classifier::{has_stamp, is_checked_item, is_unchecked_item, matches_exclusion};
use super::formatter::format_stamp;
use crate::core::models::{StampAction, StampSettings, Transformed};

/// Leading space, glyph, space, ASCII date, optional ` HH:MM`, then a word boundary
static STAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" ✅ [0-9]{4}-[0-9]{2}-[0-9]{2}(?: [0-9]{2}:[0-9]{2})?\b")
        .expect("stamp pattern is valid")
});

/// Transform a single line
#[must_use]
pub fn transform(line: &str, settings: &StampSettings, now: NaiveDateTime) -> Transformed {
    if is_checked_item(line)
        && !has_stamp(line)
        && !matches_exclusion(line, &settings.exclude_patterns)
    {
        return Transformed {
            action: StampAction::Append,
            result: format!("{line}{}", format_stamp(now, settings)),
        };
    }

    if is_unchecked_item(line) && has_stamp(line) {
        // A bare glyph without a date is not ours to remove.
        if let Cow::Owned(stripped) = strip_stamp(line) {
            return Transformed {
                action: StampAction::Remove,
                result: stripped,
            };
        }
    }

    Transformed::unchanged(line)
}

/// Delete every well-formed stamp from a line
///
/// Repeats until nothing matches, so removal never uncovers a new stamp.
#[must_use]
pub fn strip_stamp(line: &str) -> Cow<'_, str> {
    let mut stripped = match STAMP.replace_all(line, "") {
        Cow::Borrowed(_) => return Cow::Borrowed(line),
        Cow::Owned(s) => s,
    };
    loop {
        let next = match STAMP.replace_all(&stripped, "") {
            Cow::Borrowed(_) => break,
            Cow::Owned(s) => s,
        };
        stripped = next;
    }
    Cow::Owned(stripped)
}
