//! Shared trip date range with a lock.
//!
//! Locking validates the pair and freezes it; the completion gate can be
//! configured to wait for a locked range before finalize is offered.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::DateRangeError;

/// A validated `start <= end` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "startDate")]
    pub start: NaiveDate,
    #[serde(rename = "endDate")]
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::Inverted);
        }
        Ok(Self { start, end })
    }

    /// Number of nights between start and end
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Date inputs plus their lock state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeLock {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    locked: bool,
}

/// Parse a `YYYY-MM-DD` input; blank means "not chosen".
pub fn parse_date_input(input: &str) -> Result<Option<NaiveDate>, DateRangeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| DateRangeError::Unparseable(trimmed.to_string()))
}

impl DateRangeLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_start(&mut self, start: Option<NaiveDate>) -> Result<(), DateRangeError> {
        self.ensure_unlocked()?;
        self.start = start;
        Ok(())
    }

    pub fn set_end(&mut self, end: Option<NaiveDate>) -> Result<(), DateRangeError> {
        self.ensure_unlocked()?;
        self.end = end;
        Ok(())
    }

    /// Both dates, when both have been chosen.
    ///
    /// This does not require the lock and does not check ordering; it is
    /// what the payload records.
    pub fn selected(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start?, self.end?))
    }

    /// Validate and freeze the range.
    pub fn lock(&mut self) -> Result<DateRange, DateRangeError> {
        let (start, end) = self.selected().ok_or(DateRangeError::Incomplete)?;
        let range = DateRange::new(start, end)?;
        self.locked = true;
        info!(start = %range.start, end = %range.end, "date range locked");
        Ok(range)
    }

    /// Make the dates editable again. Returns whether it was locked.
    pub fn unlock(&mut self) -> bool {
        let was_locked = std::mem::replace(&mut self.locked, false);
        if was_locked {
            info!("date range unlocked");
        }
        was_locked
    }

    /// The locked range, if any
    pub fn locked_range(&self) -> Option<DateRange> {
        if !self.locked {
            return None;
        }
        let (start, end) = self.selected()?;
        DateRange::new(start, end).ok()
    }

    fn ensure_unlocked(&self) -> Result<(), DateRangeError> {
        if self.locked {
            Err(DateRangeError::Locked)
        } else {
            Ok(())
        }
    }
}
