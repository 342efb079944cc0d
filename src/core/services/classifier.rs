//! Line classifier - recognizes checklist syntax and stamps
//!
//! Pure predicates over a single line of text.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{LineState, STAMP_GLYPH};

/// List marker (`-`, `*`, `+`, `12.`, `7)`), one space, `[x]`/`[X]`, one space
static CHECKED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-*+]|[0-9]+[.)]) \[[xX]\] ").expect("checked item pattern is valid")
});

/// Same prefix grammar with an exact `[ ]` token
static UNCHECKED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-*+]|[0-9]+[.)]) \[ \] ").expect("unchecked item pattern is valid")
});

/// Whether the line is a checked checklist item
#[must_use]
pub fn is_checked_item(line: &str) -> bool {
    CHECKED_ITEM.is_match(line)
}

/// Whether the line is an unchecked checklist item
#[must_use]
pub fn is_unchecked_item(line: &str) -> bool {
    UNCHECKED_ITEM.is_match(line)
}

/// Whether the line carries the checkmark glyph anywhere
#[must_use]
pub fn has_stamp(line: &str) -> bool {
    line.contains(STAMP_GLYPH)
}

/// Whether the line contains any pattern as a literal, case-sensitive substring
#[must_use]
pub fn matches_exclusion<S: AsRef<str>>(line: &str, patterns: &[S]) -> bool {
    patterns.iter().any(|p| line.contains(p.as_ref()))
}

/// Classify a line into its checklist state
#[must_use]
pub fn classify(line: &str) -> LineState {
    let stamped = has_stamp(line);
    if is_checked_item(line) {
        if stamped { LineState::CheckedStamped } else { LineState::Checked }
    } else if is_unchecked_item(line) {
        if stamped { LineState::UncheckedStamped } else { LineState::Unchecked }
    } else {
        LineState::Plain
    }
}
