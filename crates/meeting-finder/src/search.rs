//! Search for the largest group of optional attendees that can still meet.
//!
//! Every optional attendee contributes a [`DayMask`] of busy buckets. A subset
//! is feasible when the required attendees' mask OR'ed with the subset's masks
//! still leaves a free run of at least the meeting duration.
//!
//! Subsets are tried from the largest size down, and within one size in
//! lexicographic order of attendee ids, so the first feasible subset is the
//! answer: maximum coverage, ties broken by the smallest id sequence.

use itertools::Itertools;
use tracing::{debug, trace, warn};

use crate::mask::DayMask;

/// The winning optional subset and the combined busy mask it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalChoice {
    /// Chosen attendee ids, ascending.
    pub attendees: Vec<String>,
    pub mask: DayMask,
}

/// Find the best non-empty feasible subset of `optional`.
///
/// `optional` must be sorted by attendee id. Returns `None` when not even a
/// single optional attendee fits next to the required ones. When more than
/// `max_exhaustive` attendees survive pruning, a greedy pass in id order is
/// used instead of the exhaustive search.
pub fn best_optional_subset(
    required: &DayMask,
    optional: &[(String, DayMask)],
    duration: i64,
    max_exhaustive: usize,
) -> Option<OptionalChoice> {
    // An attendee who cannot fit alone cannot fit in any larger group.
    let candidates: Vec<&(String, DayMask)> = optional
        .iter()
        .filter(|(_, mask)| {
            let mut combined = required.clone();
            combined.union_with(mask);
            combined.has_window(duration)
        })
        .collect();

    debug!(
        optional = optional.len(),
        candidates = candidates.len(),
        "pruned optional attendees"
    );

    if candidates.is_empty() {
        return None;
    }

    if candidates.len() > max_exhaustive {
        warn!(
            candidates = candidates.len(),
            limit = max_exhaustive,
            "too many optional attendees for exhaustive search, using greedy selection"
        );
        return Some(greedy(required, &candidates, duration));
    }

    for size in (1..=candidates.len()).rev() {
        for subset in candidates.iter().combinations(size) {
            let mut combined = required.clone();
            for (_, mask) in &subset {
                combined.union_with(mask);
            }
            if combined.has_window(duration) {
                let attendees: Vec<String> = subset.iter().map(|(id, _)| id.clone()).collect();
                trace!(?attendees, "feasible optional subset");
                return Some(OptionalChoice {
                    attendees,
                    mask: combined,
                });
            }
        }
    }

    // Every candidate is feasible on its own, so size 1 always succeeds.
    None
}

/// Add candidates one by one in id order while a window remains.
fn greedy(required: &DayMask, candidates: &[&(String, DayMask)], duration: i64) -> OptionalChoice {
    let mut combined = required.clone();
    let mut attendees = Vec::new();

    for (id, mask) in candidates {
        let mut trial = combined.clone();
        trial.union_with(mask);
        if trial.has_window(duration) {
            combined = trial;
            attendees.push(id.clone());
        }
    }

    OptionalChoice {
        attendees,
        mask: combined,
    }
}
