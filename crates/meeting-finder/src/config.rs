//! Scheduler configuration.

use serde::{Deserialize, Serialize};

use crate::error::{FinderError, Result};
use crate::mask::DEFAULT_QUANTUM;
use crate::time_range::MINUTES_PER_DAY;

/// Default cap on optional attendees searched exhaustively (2^16 subsets).
pub const DEFAULT_MAX_OPTIONAL_ATTENDEES: usize = 16;

/// Tuning knobs for [`crate::find_slots_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Bucket size in minutes for the optional-attendee search. Lowered
    /// automatically when event boundaries are not aligned on it.
    pub quantum_minutes: u32,
    /// Above this many optional attendees the subset search turns greedy.
    pub max_optional_attendees: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            quantum_minutes: DEFAULT_QUANTUM,
            max_optional_attendees: DEFAULT_MAX_OPTIONAL_ATTENDEES,
        }
    }
}

impl SchedulerConfig {
    /// Check the quantum is positive and divides the day.
    pub fn validate(&self) -> Result<()> {
        if self.quantum_minutes == 0 || MINUTES_PER_DAY % self.quantum_minutes != 0 {
            return Err(FinderError::InvalidConfig(format!(
                "quantum of {} minutes does not divide a day",
                self.quantum_minutes
            )));
        }
        Ok(())
    }
}
