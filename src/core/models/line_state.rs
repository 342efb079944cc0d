//! Checklist line states

use serde::Serialize;

/// The checklist state of a single line
///
/// A well-formed checklist line is unchecked-unstamped, checked-unstamped
/// or checked-stamped. Unchecked-stamped is transient: the transform strips
/// the stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineState {
    /// Not a checklist item
    Plain,
    /// `[ ]` with no stamp
    Unchecked,
    /// `[ ]` still carrying a stamp
    UncheckedStamped,
    /// `[x]` with no stamp
    Checked,
    /// `[x]` with a stamp
    CheckedStamped,
}

impl std::fmt::Display for LineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Unchecked => write!(f, "unchecked"),
            Self::UncheckedStamped => write!(f, "unchecked-stamped"),
            Self::Checked => write!(f, "checked"),
            Self::CheckedStamped => write!(f, "checked-stamped"),
        }
    }
}
