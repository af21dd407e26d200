//! Stepping through calendar dates.

use std::iter::FusedIterator;

use chrono::{Days, NaiveDate};
use extkit_foundation::{Error, Result};

/// Inclusive, lazily stepped range of dates. Created by [`date_range`].
#[derive(Clone, Debug)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
    step: u64,
}

impl DateRange {
    /// Days between consecutive dates.
    #[must_use]
    pub fn step_days(&self) -> u64 {
        self.step
    }
}

/// Yields `start`, `start + step_days`, ... up to and including `end`.
///
/// A range whose `start` is after `end` is empty.
///
/// # Errors
///
/// Returns an out of range error when `step_days` is zero.
pub fn date_range(start: NaiveDate, end: NaiveDate, step_days: u64) -> Result<DateRange> {
    if step_days == 0 {
        return Err(Error::out_of_range("step_days", 0, 1, i64::MAX).in_operation("date_range"));
    }
    tracing::trace!(%start, %end, step_days, "date range");
    Ok(DateRange {
        next: (start <= end).then_some(start),
        end,
        step: step_days,
    })
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current
            .checked_add_days(Days::new(self.step))
            .filter(|date| *date <= self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(current) => {
                let span = u64::try_from((self.end - current).num_days()).unwrap_or(0);
                let remaining = usize::try_from(span / self.step + 1).unwrap_or(usize::MAX);
                (remaining, Some(remaining))
            }
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for DateRange {}
