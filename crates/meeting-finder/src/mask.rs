//! Bit-vector view of a day.
//!
//! The day is split into buckets of `quantum` minutes; a set bit marks a
//! bucket in which someone is busy. Combining the busy time of several people
//! is a bitwise OR, which is what makes the optional-attendee search cheap.
//!
//! A busy range marks every bucket it touches, so the mask is conservative.
//! [`effective_quantum`] picks a quantum that divides every boundary of the
//! input, in which case the mask is exact and bucket edges are the true window
//! boundaries.

use bitvec::prelude::*;

use crate::freebusy::fits;
use crate::time_range::{TimeRange, MINUTES_PER_DAY};

/// Bucket size used when the configuration does not say otherwise.
pub const DEFAULT_QUANTUM: u32 = 5;

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Largest quantum no bigger than `configured` that divides the day length and
/// every boundary of `ranges`.
///
/// Ranges aligned on the configured quantum keep it; a 09:07 start drops the
/// quantum to one minute. A zero `configured` is treated as one minute.
pub fn effective_quantum<I>(configured: u32, ranges: I) -> u32
where
    I: IntoIterator<Item = TimeRange>,
{
    let base = gcd(configured.max(1), MINUTES_PER_DAY);
    ranges
        .into_iter()
        .flat_map(|r| [r.start(), r.end()])
        .fold(base, |q, minute| if q == 1 { 1 } else { gcd(q, minute) })
}

/// Busy buckets of one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayMask {
    quantum: u32,
    busy: BitVec<u64, Lsb0>,
}

impl DayMask {
    /// A day with nothing booked.
    ///
    /// `quantum` must divide [`MINUTES_PER_DAY`].
    pub fn free(quantum: u32) -> DayMask {
        debug_assert!(quantum > 0 && MINUTES_PER_DAY % quantum == 0);
        DayMask {
            quantum,
            busy: BitVec::repeat(false, (MINUTES_PER_DAY / quantum) as usize),
        }
    }

    /// A day with `ranges` booked.
    pub fn from_busy<I>(quantum: u32, ranges: I) -> DayMask
    where
        I: IntoIterator<Item = TimeRange>,
    {
        let mut mask = DayMask::free(quantum);
        for range in ranges {
            mask.mark_busy(range);
        }
        mask
    }

    /// A day booked everywhere except in `open`.
    pub fn from_open(quantum: u32, open: &[TimeRange]) -> DayMask {
        let mut mask = DayMask {
            quantum,
            busy: BitVec::repeat(true, (MINUTES_PER_DAY / quantum) as usize),
        };
        for window in open {
            // Only whole buckets inside the window are free.
            let lo = window.start().div_ceil(quantum) as usize;
            let hi = (window.end() / quantum) as usize;
            if lo < hi {
                mask.busy[lo..hi].fill(false);
            }
        }
        mask
    }

    /// Mark every bucket `range` touches as busy.
    pub fn mark_busy(&mut self, range: TimeRange) {
        if range.is_empty() {
            return;
        }
        let lo = (range.start() / self.quantum) as usize;
        let hi = range.end().div_ceil(self.quantum) as usize;
        self.busy[lo..hi].fill(true);
    }

    /// Add the busy time of `other` to this mask.
    pub fn union_with(&mut self, other: &DayMask) {
        debug_assert_eq!(self.quantum, other.quantum);
        self.busy |= other.busy.as_bitslice();
    }

    /// Whether every bucket is busy.
    pub fn is_full(&self) -> bool {
        self.busy.all()
    }

    /// Maximal runs of free buckets, as time ranges in ascending order.
    pub fn free_runs(&self) -> Vec<TimeRange> {
        let bits = self.busy.as_bitslice();
        let len = bits.len();
        let mut runs = Vec::new();
        let mut idx = 0;

        while idx < len {
            let Some(offset) = bits[idx..].first_zero() else {
                break;
            };
            let first = idx + offset;
            let end = bits[first..].first_one().map_or(len, |o| first + o);
            runs.push(self.bucket_range(first, end));
            idx = end;
        }

        runs
    }

    /// Free runs long enough to hold `duration`.
    pub fn free_windows(&self, duration: i64) -> Vec<TimeRange> {
        self.free_runs()
            .into_iter()
            .filter(|w| fits(w.duration(), duration))
            .collect()
    }

    /// Whether at least one free run can hold `duration`.
    pub fn has_window(&self, duration: i64) -> bool {
        self.free_runs().iter().any(|w| fits(w.duration(), duration))
    }

    fn bucket_range(&self, first: usize, end: usize) -> TimeRange {
        // `end` is at most the bucket count, so the range never passes 24:00.
        TimeRange::from_start_end(first as u32 * self.quantum, end as u32 * self.quantum, false)
    }
}
