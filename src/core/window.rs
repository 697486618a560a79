//! Date-range windowing.
//!
//! The welfare API rejects requests spanning more than a fixed number of
//! days, so a requested range is split into contiguous inclusive windows
//! before fetching.

use chrono::{Days, NaiveDate};

use crate::error::{LotteryError, Result};

/// An inclusive `[begin, end]` date window, at most `max_days` wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub begin: NaiveDate,
    pub end: NaiveDate,
}

/// Split `[begin, end]` into ordered windows no wider than `max_days`.
///
/// Breakpoints fall at `max_days`-day strides from `begin`; every internal
/// window runs from the day after the previous window's end up to the next
/// breakpoint, and the final window always ends exactly at `end`. The
/// windows are contiguous, non-overlapping and cover the range exactly.
///
/// Fails with [`LotteryError::InvalidRange`] when `begin > end`.
/// `max_days` must be at least 1.
pub fn date_windows(begin: NaiveDate, end: NaiveDate, max_days: u64) -> Result<Vec<DateWindow>> {
    if begin > end {
        return Err(LotteryError::InvalidRange { begin, end });
    }
    assert!(max_days >= 1, "window width must be at least one day");

    let mut windows = Vec::new();
    let mut start = begin;
    let mut breakpoint = begin + Days::new(max_days);
    while breakpoint < end {
        windows.push(DateWindow {
            begin: start,
            end: breakpoint,
        });
        start = breakpoint + Days::new(1);
        breakpoint = breakpoint + Days::new(max_days);
    }
    windows.push(DateWindow { begin: start, end });
    Ok(windows)
}
