//! Tests for checklist line classification

use checkstamp::core::models::LineState;
use checkstamp::core::services::{classify, has_stamp, is_checked_item, is_unchecked_item, matches_exclusion};

#[test]
fn test_checked_forms() {
    for line in ["- [x] ", "* [x] ", "+ [x] ", "12. [x] ", "7) [x] "] {
        assert!(is_checked_item(line), "{line:?}");
    }
}

#[test]
fn test_uppercase_x_only_inside_brackets() {
    assert!(is_checked_item("- [X] done"));
    assert!(!is_checked_item("- (x) done"));
    assert!(!is_checked_item("- {X} done"));
}

#[test]
fn test_unchecked_requires_exact_space() {
    assert!(is_unchecked_item("- [ ] todo"));
    assert!(!is_unchecked_item("- [] todo"));
    assert!(!is_checked_item("- [] todo"));
    assert!(!is_unchecked_item("- [\t] todo"));
}

#[test]
fn test_number_marker_needs_dot_or_paren() {
    assert!(!is_checked_item("12 [x] a"));
    assert!(!is_checked_item("1: [x] a"));
    assert!(!is_checked_item("a. [x] a"));
}

#[test]
fn test_predicates_combine() {
    let line = "- [x] #task Pay rent ✅ 2026-02-01";
    assert!(is_checked_item(line));
    assert!(has_stamp(line));
    assert!(matches_exclusion(line, &["#task"]));
    assert_eq!(classify(line), LineState::CheckedStamped);
}

#[test]
fn test_state_display() {
    assert_eq!(LineState::UncheckedStamped.to_string(), "unchecked-stamped");
    assert_eq!(classify("just text").to_string(), "plain");
}
