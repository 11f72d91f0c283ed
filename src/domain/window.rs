//! Study windows around a keynote date.
//!
//! The window reaches roughly six months back and six weeks forward. When the
//! keynote falls on a weekend both edges are pushed out so the number of
//! trading days in the window stays about the same:
//!
//! ```text
//! Mon-Fri   start = event - before       end = event + after
//! Sunday    start = event - (before + 3) end = event + (after + 1)
//! Saturday  start = event - (before + 4) end = event + (after + 2)
//! ```

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

use crate::error::AppError;

/// Base calendar-day offsets used on weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOffsets {
    pub days_before: i64,
    pub days_after: i64,
}

impl Default for WindowOffsets {
    fn default() -> Self {
        Self {
            days_before: 182,
            days_after: 42,
        }
    }
}

impl WindowOffsets {
    /// Offsets after the weekend correction for an event on `weekday`.
    ///
    /// `None` if the corrected offsets overflow `i64`.
    pub fn for_weekday(self, weekday: Weekday) -> Option<Self> {
        let (extra_before, extra_after) = match weekday {
            Weekday::Sun => (3, 1),
            Weekday::Sat => (4, 2),
            _ => (0, 0),
        };
        Some(Self {
            days_before: self.days_before.checked_add(extra_before)?,
            days_after: self.days_after.checked_add(extra_after)?,
        })
    }
}

/// Inclusive date range handed to the market-data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StudyWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StudyWindow {
    pub fn around(event: NaiveDate, offsets: WindowOffsets) -> Result<Self, AppError> {
        let adjusted = offsets
            .for_weekday(event.weekday())
            .ok_or_else(|| AppError::usage(format!("Study window offsets overflow for {event}.")))?;
        let start = Duration::try_days(adjusted.days_before)
            .and_then(|d| event.checked_sub_signed(d))
            .ok_or_else(|| AppError::usage(format!("Study window start out of range for {event}.")))?;
        let end = Duration::try_days(adjusted.days_after)
            .and_then(|d| event.checked_add_signed(d))
            .ok_or_else(|| AppError::usage(format!("Study window end out of range for {event}.")))?;
        Ok(Self { start, end })
    }

    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}
