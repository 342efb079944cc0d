//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{LineState, StampAction, StampSettings};
use crate::core::services::ApplyReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of transforming a single line
#[derive(Debug, Serialize)]
pub struct LineResult {
    /// The line as given
    pub input: String,
    /// Checklist state of the input
    pub state: LineState,
    /// What the transform did
    pub action: StampAction,
    /// The line after the transform
    pub result: String,
}

/// A rewritten line, 1-based for display
#[derive(Debug, Serialize)]
pub struct LineChange {
    /// 1-based line number
    pub line: usize,
    /// What was done
    pub action: StampAction,
    /// New line text
    pub text: String,
}

/// Result of stamping one file
#[derive(Debug, Serialize)]
pub struct FileResult {
    /// File path
    pub path: String,
    /// Lines inspected
    pub lines_checked: usize,
    /// Stamps appended
    pub appended: usize,
    /// Stamps removed
    pub removed: usize,
    /// Whether the file was written back
    pub written: bool,
    /// Rewritten lines
    pub changes: Vec<LineChange>,
}

impl FileResult {
    /// Build from an adapter report
    #[must_use]
    pub fn from_report(path: String, report: &ApplyReport, written: bool) -> Self {
        Self {
            path,
            lines_checked: report.lines_checked,
            appended: report.appended(),
            removed: report.removed(),
            written,
            changes: report
                .changes
                .iter()
                .map(|c| LineChange {
                    line: c.line + 1,
                    action: c.action,
                    text: c.text.clone(),
                })
                .collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        if self.changes.is_empty() {
            println!("{} {}", self.path, "(no changes)".dimmed());
            return;
        }
        println!("{}", self.path.bold());
        for c in &self.changes {
            let tag = match c.action {
                StampAction::Append => "+".green(),
                StampAction::Remove => "-".red(),
                StampAction::None => " ".normal(),
            };
            println!("  {tag} {:>4}: {}", c.line, c.text);
        }
    }
}

/// Result of a stamp run over one or more files
#[derive(Debug, Serialize)]
pub struct StampRunResult {
    /// Whether files were left untouched
    pub dry_run: bool,
    /// Per-file results
    pub files: Vec<FileResult>,
}

impl StampRunResult {
    /// Total stamps appended
    #[must_use]
    pub fn appended(&self) -> usize {
        self.files.iter().map(|f| f.appended).sum()
    }

    /// Total stamps removed
    #[must_use]
    pub fn removed(&self) -> usize {
        self.files.iter().map(|f| f.removed).sum()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.files.is_empty() {
            println!("No Markdown files found.");
            return;
        }

        for file in &self.files {
            file.render_human();
        }

        let verb = if self.dry_run { "Would stamp" } else { "Stamped" };
        println!(
            "\n{verb} {} item(s), cleared {} stamp(s) in {} file(s).",
            self.appended(),
            self.removed(),
            self.files.len()
        );
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl LineResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.result),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Current configuration and where it lives
#[derive(Debug, Serialize)]
pub struct ConfigResult {
    /// Config file path
    pub path: String,
    /// Settings in effect
    pub settings: StampSettings,
}

impl ConfigResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        let s = &self.settings;
        println!("Config: {}", self.path);
        println!("  enabled:          {}", s.enabled);
        println!("  include_time:     {}", s.include_time);
        println!("  date_format:      {}", s.date_format);
        if s.exclude_patterns.is_empty() {
            println!("  exclude_patterns: (none)");
        } else {
            println!("  exclude_patterns: {}", s.exclude_patterns.join(", "));
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
