//! Stamp transform results

use serde::Serialize;

/// The checkmark glyph that marks a completed item
pub const STAMP_GLYPH: &str = "✅";

/// What the transform decided to do with a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StampAction {
    /// Stamp appended to a freshly checked item
    Append,
    /// Stale stamp stripped from an unchecked item
    Remove,
    /// Line left untouched
    #[default]
    None,
}

impl std::fmt::Display for StampAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Append => write!(f, "append"),
            Self::Remove => write!(f, "remove"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Outcome of transforming one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    /// The decision
    pub action: StampAction,
    /// The line text after the decision was applied
    pub result: String,
}

impl Transformed {
    /// A no-op outcome carrying the line unchanged
    #[must_use]
    pub fn unchanged(line: &str) -> Self {
        Self {
            action: StampAction::None,
            result: line.to_string(),
        }
    }

    /// Whether the line text must be written back
    #[must_use]
    pub fn is_change(&self) -> bool {
        self.action != StampAction::None
    }
}
