//! Meeting requests.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{FinderError, Result};
use crate::time_range::MINUTES_PER_DAY;

/// What the caller wants to schedule.
///
/// `required` and `optional` are expected to be disjoint; nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Meeting length in minutes.
    pub duration: i64,
    #[serde(default)]
    pub required: BTreeSet<String>,
    #[serde(default)]
    pub optional: BTreeSet<String>,
}

impl MeetingRequest {
    pub fn new<I, S>(duration: i64, required: I) -> MeetingRequest
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MeetingRequest {
            duration,
            required: required.into_iter().map(Into::into).collect(),
            optional: BTreeSet::new(),
        }
    }

    /// Add optional attendees.
    pub fn with_optional<I, S>(mut self, optional: I) -> MeetingRequest
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional.extend(optional.into_iter().map(Into::into));
        self
    }

    /// Whether neither required nor optional attendees were named.
    pub fn has_no_attendees(&self) -> bool {
        self.required.is_empty() && self.optional.is_empty()
    }

    /// Reject durations that are not positive.
    ///
    /// The scheduler tolerates them (it returns no windows); this is for
    /// callers that want to report bad input instead. A duration longer than
    /// a day is well-formed and simply never fits.
    pub fn validate(&self) -> Result<()> {
        if self.duration <= 0 {
            return Err(FinderError::InvalidDuration(self.duration));
        }
        Ok(())
    }

    /// Whether the meeting could fit in a day at all.
    pub fn fits_in_a_day(&self) -> bool {
        (0..=i64::from(MINUTES_PER_DAY)).contains(&self.duration)
    }
}
