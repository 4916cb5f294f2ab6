//! Detect which events clash with a proposed meeting window.
//!
//! Adjacent events (where one ends exactly when the window starts, or starts
//! exactly when it ends) are NOT conflicts.

use std::collections::BTreeSet;

use crate::event::Event;
use crate::time_range::TimeRange;

/// An event that overlaps the proposed window.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict<'a> {
    pub event: &'a Event,
    /// Attendees of the event who were asked to the meeting.
    pub attendees: BTreeSet<String>,
    pub overlap_minutes: u32,
}

/// Find every event involving one of `people` that overlaps `window`.
///
/// Conflicts are ordered by event start, then end.
pub fn find_conflicts<'a>(
    events: &'a [Event],
    window: TimeRange,
    people: &BTreeSet<String>,
) -> Vec<Conflict<'a>> {
    let mut conflicts: Vec<Conflict<'a>> = events
        .iter()
        .filter_map(|event| {
            let overlap = event.when.intersection(&window)?;
            let attendees: BTreeSet<String> =
                event.attendees.intersection(people).cloned().collect();
            if attendees.is_empty() {
                return None;
            }
            Some(Conflict {
                event,
                attendees,
                overlap_minutes: overlap.duration(),
            })
        })
        .collect();

    conflicts.sort_by_key(|c| c.event.when);
    conflicts
}

/// Attendees among `people` who are busy at some point during `window`.
pub fn unavailable_attendees(
    events: &[Event],
    window: TimeRange,
    people: &BTreeSet<String>,
) -> BTreeSet<String> {
    find_conflicts(events, window, people)
        .into_iter()
        .flat_map(|c| c.attendees)
        .collect()
}
