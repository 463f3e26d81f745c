//! Weekly time intervals.
//!
//! # Time Model
//! Times are minutes since midnight (0..=1440) on a given [`Weekday`].
//! Intervals are half-open `[start, end)`: an interval ending at 10:00
//! does not overlap one starting at 10:00.
//!
//! Construction enforces `start < end <= 1440`, so every `TimeInterval`
//! in the system is non-empty and within the day.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Weekday;
use crate::error::{CatalogError, Result};

/// Minutes in a day; the largest valid end minute.
pub const MINUTES_PER_DAY: u16 = 1440;

/// A validated interval on one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct TimeInterval {
    day: Weekday,
    start: u16,
    end: u16,
}

#[derive(Deserialize)]
struct RawInterval {
    day: Weekday,
    start: u16,
    end: u16,
}

impl TryFrom<RawInterval> for TimeInterval {
    type Error = CatalogError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        TimeInterval::new(raw.day, raw.start, raw.end)
    }
}

impl TimeInterval {
    /// Creates an interval from minute offsets.
    ///
    /// Fails with `InvalidTimeFormat` unless `start < end <= 1440`.
    pub fn new(day: Weekday, start: u16, end: u16) -> Result<Self> {
        if end > MINUTES_PER_DAY {
            return Err(CatalogError::invalid_time(format!(
                "end minute {end} exceeds {MINUTES_PER_DAY}"
            )));
        }
        if start >= end {
            return Err(CatalogError::invalid_time(format!(
                "start {} is not before end {}",
                format_clock(start),
                format_clock(end)
            )));
        }
        Ok(Self { day, start, end })
    }

    /// Parses `HH:MM` clock texts into an interval.
    pub fn parse(day: Weekday, start: &str, end: &str) -> Result<Self> {
        Self::new(day, parse_clock(start)?, parse_clock(end)?)
    }

    /// The weekday of this interval.
    #[inline]
    pub fn day(&self) -> Weekday {
        self.day
    }

    /// Start minute (inclusive).
    #[inline]
    pub fn start(&self) -> u16 {
        self.start
    }

    /// End minute (exclusive).
    #[inline]
    pub fn end(&self) -> u16 {
        self.end
    }

    /// Whether two intervals overlap with non-zero duration.
    ///
    /// Intervals on different days never overlap. Touching endpoints
    /// (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}-{}",
            self.day,
            format_clock(self.start),
            format_clock(self.end)
        )
    }
}

/// Parses `H:MM` or `HH:MM` into minutes since midnight.
///
/// Hours 0..=24 and minutes 0..=59; `24:00` is the only hour-24 time.
pub fn parse_clock(text: &str) -> Result<u16> {
    let text = text.trim();
    let invalid = || CatalogError::invalid_time(format!("'{text}' is not HH:MM"));

    let (hours, minutes) = text.split_once(':').ok_or_else(invalid)?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return Err(invalid());
    }
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let hours: u16 = hours.parse().map_err(|_| invalid())?;
    let minutes: u16 = minutes.parse().map_err(|_| invalid())?;
    if minutes > 59 || hours > 24 || (hours == 24 && minutes > 0) {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}

/// Formats minutes since midnight as `HH:MM`.
pub fn format_clock(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
