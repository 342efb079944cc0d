//! Stamping settings
//!
//! A snapshot of the user's configuration. The host owns persistence;
//! the core only ever sees a value passed in per call.

use serde::{Deserialize, Serialize};

/// The only date format the formatter renders
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";

/// Configuration for checklist completion stamping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StampSettings {
    /// Master switch; when off the change adapter never touches the document
    pub enabled: bool,
    /// Append ` HH:MM` after the date
    pub include_time: bool,
    /// Literal substrings that suppress new stamps on a line
    pub exclude_patterns: Vec<String>,
    /// Date format label (only `YYYY-MM-DD` is rendered)
    pub date_format: String,
}

impl Default for StampSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            include_time: false,
            exclude_patterns: vec!["#task".to_string()],
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl StampSettings {
    /// Whether the configured date format is one the formatter understands
    #[must_use]
    pub fn has_supported_date_format(&self) -> bool {
        self.date_format == DEFAULT_DATE_FORMAT
    }

    /// Replace the exclusion patterns, trimming each and dropping empties
    pub fn set_exclude_patterns<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_patterns = patterns
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
    }

    /// Add one exclusion pattern. Returns false if it was blank or already present.
    pub fn add_exclude_pattern(&mut self, pattern: &str) -> bool {
        let pattern = pattern.trim();
        if pattern.is_empty() || self.exclude_patterns.iter().any(|p| p == pattern) {
            return false;
        }
        self.exclude_patterns.push(pattern.to_string());
        true
    }

    /// Remove an exclusion pattern. Returns true if it was present.
    pub fn remove_exclude_pattern(&mut self, pattern: &str) -> bool {
        let pattern = pattern.trim();
        let before = self.exclude_patterns.len();
        self.exclude_patterns.retain(|p| p != pattern);
        self.exclude_patterns.len() < before
    }
}

/// Split a one-pattern-per-line text block into normalized patterns
#[must_use]
pub fn parse_exclude_patterns(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}
