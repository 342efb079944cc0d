//! Change adapter - bridges host change notifications to the transform
//!
//! The adapter keeps no per-line history. Every notification is resolved to
//! candidate line indices, each line is re-read, transformed, and written back
//! only when the transform changes it. Its own writes come back as further
//! notifications and are absorbed because the transform is idempotent.

use std::collections::{BTreeSet, VecDeque};
use std::ops::Range;

use serde::Serialize;

use super::transform::transform;
use crate::core::models::{StampAction, StampSettings};
use crate::core::ports::{ClickTarget, Clock, Editor};

/// A "possible checkbox changed" notification from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// Specific lines were touched
    LinesChanged(Vec<usize>),
    /// A contiguous range of lines was touched
    LineRangeChanged(Range<usize>),
    /// An edit happened at the cursor
    CursorEdit,
    /// A click landed in the document
    Click(ClickTarget),
}

/// A line the adapter rewrote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedChange {
    /// 0-based line index
    pub line: usize,
    /// What was done
    pub action: StampAction,
    /// The text written back
    pub text: String,
}

/// Summary of one adapter invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    /// Lines inspected
    pub lines_checked: usize,
    /// Lines rewritten, in line order
    pub changes: Vec<AppliedChange>,
}

impl ApplyReport {
    /// Number of stamps appended
    #[must_use]
    pub fn appended(&self) -> usize {
        self.count(StampAction::Append)
    }

    /// Number of stamps removed
    #[must_use]
    pub fn removed(&self) -> usize {
        self.count(StampAction::Remove)
    }

    /// Whether nothing was written
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    fn count(&self, action: StampAction) -> usize {
        self.changes.iter().filter(|c| c.action == action).count()
    }

    fn merge(&mut self, other: Self) {
        self.lines_checked += other.lines_checked;
        self.changes.extend(other.changes);
    }
}

/// Applies the stamp transform in response to host events
#[derive(Debug, Default)]
pub struct ChangeAdapter {
    deferred: VecDeque<ChangeEvent>,
}

impl ChangeAdapter {
    /// Create an adapter with nothing deferred
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one event now
    ///
    /// Lines outside the document are skipped. Host write failures are
    /// returned as-is; lines already written stay written.
    pub fn handle<E, C>(
        &self,
        editor: &mut E,
        event: &ChangeEvent,
        settings: &StampSettings,
        clock: &C,
    ) -> anyhow::Result<ApplyReport>
    where
        E: Editor + ?Sized,
        C: Clock + ?Sized,
    {
        let mut report = ApplyReport::default();
        if !settings.enabled {
            return Ok(report);
        }

        let lines = resolve_lines(&*editor, event);
        if lines.is_empty() {
            return Ok(report);
        }

        let now = clock.now();
        for line in lines {
            let text = editor.line_text(line)?;
            report.lines_checked += 1;

            let outcome = transform(&text, settings, now);
            if !outcome.is_change() {
                continue;
            }

            editor.set_line_text(line, &outcome.result)?;
            log::debug!("line {}: {} stamp", line + 1, outcome.action);
            report.changes.push(AppliedChange {
                line,
                action: outcome.action,
                text: outcome.result,
            });
        }

        Ok(report)
    }

    /// Handle every line of the document
    pub fn handle_all<E, C>(
        &self,
        editor: &mut E,
        settings: &StampSettings,
        clock: &C,
    ) -> anyhow::Result<ApplyReport>
    where
        E: Editor + ?Sized,
        C: Clock + ?Sized,
    {
        let event = ChangeEvent::LineRangeChanged(0..editor.line_count());
        self.handle(editor, &event, settings, clock)
    }

    /// Schedule an event to be checked on the next turn
    ///
    /// Used when the host's own toggle has not finished when it notifies us.
    pub fn defer(&mut self, event: ChangeEvent) {
        self.deferred.push_back(event);
    }

    /// Number of events waiting for the next turn
    #[must_use]
    pub fn pending(&self) -> usize {
        self.deferred.len()
    }

    /// Run the events deferred so far, once each
    ///
    /// Events deferred while this runs wait for the following turn. On a host
    /// error the remaining events of this turn are dropped.
    pub fn run_deferred<E, C>(
        &mut self,
        editor: &mut E,
        settings: &StampSettings,
        clock: &C,
    ) -> anyhow::Result<ApplyReport>
    where
        E: Editor + ?Sized,
        C: Clock + ?Sized,
    {
        let batch: Vec<ChangeEvent> = self.deferred.drain(..).collect();
        let mut report = ApplyReport::default();
        for event in &batch {
            report.merge(self.handle(editor, event, settings, clock)?);
        }
        Ok(report)
    }
}

/// Resolve an event to sorted, distinct, in-range line indices
fn resolve_lines<E: Editor + ?Sized>(editor: &E, event: &ChangeEvent) -> Vec<usize> {
    let count = editor.line_count();
    let lines: BTreeSet<usize> = match event {
        ChangeEvent::LinesChanged(lines) => lines.iter().copied().collect(),
        ChangeEvent::LineRangeChanged(range) => range.clone().collect(),
        ChangeEvent::CursorEdit => editor.cursor_line().into_iter().collect(),
        ChangeEvent::Click(target) => editor.line_at_click(*target).into_iter().collect(),
    };
    lines.into_iter().filter(|&line| line < count).collect()
}
