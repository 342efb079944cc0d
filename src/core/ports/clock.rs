//! Clock port

use chrono::NaiveDateTime;

/// Source of the current local date and time
pub trait Clock {
    /// Current local wall-clock time
    fn now(&self) -> NaiveDateTime;
}
