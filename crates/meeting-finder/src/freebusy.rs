//! Free/busy computation over a single day.
//!
//! Two views of the same data live here. [`open_windows`] folds the events of
//! the required attendees over the whole day, carving each event out of the
//! windows it overlaps. [`merge_busy_periods`] and [`free_gaps`] work the other
//! way round: merge busy time first, then take the complement.

use std::collections::BTreeSet;

use crate::event::Event;
use crate::time_range::{TimeRange, END_OF_DAY, MINUTES_PER_DAY};

/// Whether a window of `length` minutes can hold a meeting of `duration`.
pub(crate) fn fits(length: u32, duration: i64) -> bool {
    i64::from(length) >= duration
}

/// Merge overlapping or adjacent ranges.
///
/// Returns a sorted, non-overlapping list. Empty ranges are dropped.
pub fn merge_busy_periods<I>(ranges: I) -> Vec<TimeRange>
where
    I: IntoIterator<Item = TimeRange>,
{
    let mut ranges: Vec<TimeRange> = ranges.into_iter().filter(|r| !r.is_empty()).collect();
    ranges.sort();

    let mut merged: Vec<TimeRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        if let Some(last) = merged.last_mut() {
            if range.start() <= last.end() {
                // Overlapping or adjacent: extend the current period.
                *last = TimeRange::from_start_end(last.start(), last.end().max(range.end()), false);
                continue;
            }
        }
        merged.push(range);
    }

    merged
}

/// Complement of sorted, merged `busy` periods within `window`.
pub fn free_gaps(busy: &[TimeRange], window: TimeRange) -> Vec<TimeRange> {
    let mut gaps = Vec::new();
    let mut cursor = window.start();

    for period in busy.iter().filter_map(|b| b.intersection(&window)) {
        if cursor < period.start() {
            gaps.push(TimeRange::from_start_end(cursor, period.start(), false));
        }
        cursor = cursor.max(period.end());
    }

    // Trailing gap after the last busy period.
    if cursor < window.end() {
        gaps.push(TimeRange::from_start_end(cursor, window.end(), false));
    }

    gaps
}

/// Merged busy time of everyone in `people`.
pub fn busy_for(events: &[Event], people: &BTreeSet<String>) -> Vec<TimeRange> {
    merge_busy_periods(
        events
            .iter()
            .filter(|e| e.involves_any(people))
            .map(|e| e.when),
    )
}

/// Remove `busy` from a single open window.
///
/// Yields the part before and the part after the busy range, each kept only
/// when it can still hold `duration`. A window the busy range does not touch
/// is returned unchanged.
fn carve(window: TimeRange, busy: TimeRange, duration: i64) -> Vec<TimeRange> {
    if window.intersection(&busy).is_none() {
        return vec![window];
    }

    let mut pieces = Vec::with_capacity(2);
    if window.contains_point(busy.start()) && fits(busy.start() - window.start(), duration) {
        pieces.push(TimeRange::from_start_end(window.start(), busy.start(), false));
    }
    if busy.end() < window.end() && fits(window.end() - busy.end(), duration) {
        let after = if window.end() == MINUTES_PER_DAY {
            TimeRange::from_start_end(busy.end(), END_OF_DAY, true)
        } else {
            TimeRange::from_start_end(busy.end(), window.end(), false)
        };
        pieces.push(after);
    }
    pieces
}

/// Windows of the day in which every attendee in `required` is free.
///
/// Only events involving at least one required attendee constrain the result.
/// Each event replaces the windows it overlaps by their leftover pieces, so
/// the output stays sorted and non-overlapping.
pub fn open_windows(events: &[Event], required: &BTreeSet<String>, duration: i64) -> Vec<TimeRange> {
    events
        .iter()
        .filter(|e| e.involves_any(required))
        .fold(vec![TimeRange::WHOLE_DAY], |windows, event| {
            windows
                .into_iter()
                .flat_map(|w| carve(w, event.when, duration))
                .collect()
        })
}
