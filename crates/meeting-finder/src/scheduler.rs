//! The meeting query: which windows of the day can host the meeting.
//!
//! The pipeline is:
//!
//! 1. Short-circuit the degenerate requests (no attendees, impossible
//!    duration, empty calendar).
//! 2. Fold the required attendees' events over the day to get their open
//!    windows.
//! 3. Search for the largest group of optional attendees that still leaves a
//!    window long enough, using per-attendee [`DayMask`]s.
//! 4. Emit the windows of the winning group, or fall back to the
//!    required-only windows when no optional attendee fits.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SchedulerConfig;
use crate::event::Event;
use crate::freebusy::{fits, open_windows};
use crate::mask::{effective_quantum, DayMask};
use crate::request::MeetingRequest;
use crate::search::best_optional_subset;
use crate::time_range::TimeRange;

/// Result of a query, with the optional attendees the windows accommodate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotSearch {
    /// Non-overlapping windows sorted by start, each at least the requested
    /// duration long.
    pub windows: Vec<TimeRange>,
    /// Optional attendees free in every returned window, ascending.
    pub optional_included: Vec<String>,
}

impl SlotSearch {
    fn required_only(windows: Vec<TimeRange>) -> SlotSearch {
        SlotSearch {
            windows,
            optional_included: Vec::new(),
        }
    }
}

/// Find the windows of the day in which the meeting can take place, with the
/// default configuration.
///
/// Deterministic and total: malformed input yields an empty or whole-day answer
/// rather than an error.
pub fn find_slots(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    find_slots_with(events, request, &SchedulerConfig::default())
}

/// [`find_slots`] with explicit configuration.
pub fn find_slots_with(
    events: &[Event],
    request: &MeetingRequest,
    config: &SchedulerConfig,
) -> Vec<TimeRange> {
    search_slots(events, request, config).windows
}

/// Run the full query and report which optional attendees were accommodated.
pub fn search_slots(
    events: &[Event],
    request: &MeetingRequest,
    config: &SchedulerConfig,
) -> SlotSearch {
    if let Some(windows) = check_edge_cases(events, request) {
        debug!(windows = windows.len(), "answered by edge case");
        return SlotSearch::required_only(windows);
    }

    let duration = request.duration;
    let required_open = open_windows(events, &request.required, duration);

    let quantum = effective_quantum(
        config.quantum_minutes,
        events
            .iter()
            .filter(|e| e.involves_any(&request.required) || e.involves_any(&request.optional))
            .map(|e| e.when),
    );
    debug!(
        events = events.len(),
        required = request.required.len(),
        optional = request.optional.len(),
        open = required_open.len(),
        quantum,
        "searching for meeting slots"
    );

    let required_mask = DayMask::from_open(quantum, &required_open);
    let optional_masks: Vec<(String, DayMask)> = request
        .optional
        .iter()
        .map(|id| {
            let busy = events.iter().filter(|e| e.involves(id)).map(|e| e.when);
            (id.clone(), DayMask::from_busy(quantum, busy))
        })
        .collect();

    match best_optional_subset(
        &required_mask,
        &optional_masks,
        duration,
        config.max_optional_attendees,
    ) {
        Some(choice) => SlotSearch {
            windows: choice.mask.free_windows(duration),
            optional_included: choice.attendees,
        },
        None if request.required.is_empty() => {
            SlotSearch::required_only(vec![TimeRange::WHOLE_DAY])
        }
        None => SlotSearch::required_only(
            required_open
                .into_iter()
                .filter(|w| fits(w.duration(), duration))
                .collect(),
        ),
    }
}

/// Answers that need no calendar work, checked in order.
fn check_edge_cases(events: &[Event], request: &MeetingRequest) -> Option<Vec<TimeRange>> {
    if request.has_no_attendees() {
        return Some(vec![TimeRange::WHOLE_DAY]);
    }
    if !request.fits_in_a_day() {
        return Some(Vec::new());
    }
    if events.is_empty() {
        return Some(vec![TimeRange::WHOLE_DAY]);
    }
    None
}
