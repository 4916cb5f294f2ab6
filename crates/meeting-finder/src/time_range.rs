//! Minute-resolution time ranges within a single day.
//!
//! A [`TimeRange`] is the half-open interval `[start, end)` measured in minutes
//! since midnight. The day runs from [`START_OF_DAY`] to [`MINUTES_PER_DAY`];
//! [`END_OF_DAY`] is the last minute of the day and is used with
//! [`TimeRange::from_start_end`] to build ranges that are closed on the right.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{FinderError, Result};

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Last minute of the day (23:59).
pub const END_OF_DAY: u32 = MINUTES_PER_DAY - 1;

/// Convert an hour/minute pair to minutes since midnight.
pub const fn minutes(hours: u32, minutes: u32) -> u32 {
    hours * 60 + minutes
}

/// A half-open range of minutes `[start, end)` within one day.
///
/// Ordering is by `(start, end)`. Ranges are `Copy` and never mutated: any
/// trimming produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

#[derive(Serialize, Deserialize)]
struct RawRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawRange> for TimeRange {
    type Error = FinderError;

    fn try_from(raw: RawRange) -> Result<Self> {
        TimeRange::try_new(raw.start, raw.end)
    }
}

impl From<TimeRange> for RawRange {
    fn from(range: TimeRange) -> Self {
        RawRange {
            start: range.start,
            end: range.end,
        }
    }
}

impl TimeRange {
    /// The entire day, `[00:00, 24:00)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: MINUTES_PER_DAY,
    };

    /// Build a range from its bounds.
    ///
    /// When `inclusive` is true the range is closed on the right, so
    /// `from_start_end(600, END_OF_DAY, true)` ends at midnight.
    /// Callers must supply `start <= end` and an end within the day.
    pub const fn from_start_end(start: u32, end: u32, inclusive: bool) -> TimeRange {
        let end = if inclusive { end + 1 } else { end };
        debug_assert!(start <= end && end <= MINUTES_PER_DAY);
        TimeRange { start, end }
    }

    /// Build a range from a start minute and a length in minutes.
    pub const fn from_start_duration(start: u32, duration: u32) -> TimeRange {
        TimeRange::from_start_end(start, start + duration, false)
    }

    /// Checked constructor for untrusted input.
    ///
    /// # Errors
    /// Returns [`FinderError::InvalidRange`] if `start > end` or `end` lies past
    /// the end of the day.
    pub fn try_new(start: u32, end: u32) -> Result<TimeRange> {
        if start > end || end > MINUTES_PER_DAY {
            return Err(FinderError::InvalidRange {
                start: i64::from(start),
                end: i64::from(end),
            });
        }
        Ok(TimeRange { start, end })
    }

    /// Build a range from two wall-clock times.
    ///
    /// # Errors
    /// Returns [`FinderError::InvalidRange`] if `end` is before `start`.
    pub fn from_times(start: NaiveTime, end: NaiveTime) -> Result<TimeRange> {
        TimeRange::try_new(minute_of(start), minute_of(end))
    }

    pub const fn start(&self) -> u32 {
        self.start
    }

    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Length of the range in minutes.
    pub const fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `point` lies in `[start, end)`.
    pub const fn contains_point(&self, point: u32) -> bool {
        point >= self.start && point < self.end
    }

    /// Whether `other` lies entirely within this range.
    ///
    /// An empty range is contained iff its start point is.
    pub const fn contains(&self, other: &TimeRange) -> bool {
        if other.is_empty() {
            return self.contains_point(other.start);
        }
        other.start >= self.start && other.end <= self.end
    }

    /// Whether the two ranges share at least one minute.
    ///
    /// Adjacent ranges (`a.end == b.start`) do not overlap.
    pub const fn overlaps(&self, other: &TimeRange) -> bool {
        self.contains_point(other.start) || other.contains_point(self.start)
    }

    /// The overlapping part of two ranges, if any.
    pub fn intersection(&self, other: &TimeRange) -> Option<TimeRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(TimeRange { start, end })
    }

    /// Order by end, then by start.
    pub fn cmp_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        (a.end, a.start).cmp(&(b.end, b.start))
    }
}

/// Minutes since midnight of a wall-clock time (seconds are dropped).
pub fn minute_of(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Parse `HH:MM` into minutes since midnight. `24:00` denotes the end of day.
///
/// # Errors
/// Returns [`FinderError::InvalidTime`] for anything that is not a valid time.
pub fn parse_minute(s: &str) -> Result<u32> {
    let s = s.trim();
    if s == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }
    NaiveTime::parse_from_str(s, "%H:%M")
        .map(minute_of)
        .map_err(|_| FinderError::InvalidTime(s.to_string()))
}

/// Render minutes since midnight as `HH:MM`; the end of day is `24:00`.
pub fn format_minute(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_minute(self.start), format_minute(self.end))
    }
}

impl FromStr for TimeRange {
    type Err = FinderError;

    /// Parse `HH:MM-HH:MM`, the same form [`fmt::Display`] produces.
    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| FinderError::InvalidTime(s.to_string()))?;
        TimeRange::try_new(parse_minute(start)?, parse_minute(end)?)
    }
}
