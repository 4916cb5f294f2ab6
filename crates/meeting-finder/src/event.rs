//! Calendar events: who is busy, and when.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{FinderError, Result};
use crate::time_range::TimeRange;

/// An existing calendar event on the day being scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Free-form label, only used in diagnostics.
    #[serde(default)]
    pub title: String,
    pub attendees: BTreeSet<String>,
    pub when: TimeRange,
}

impl Event {
    /// Build an event without validation.
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Event
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Event {
            title: title.into(),
            attendees: attendees.into_iter().map(Into::into).collect(),
            when,
        }
    }

    /// Build an event, rejecting one with no attendees.
    ///
    /// # Errors
    /// Returns [`FinderError::EmptyAttendees`] if `attendees` is empty.
    pub fn try_new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Result<Event>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let event = Event::new(title, when, attendees);
        event.validate()?;
        Ok(event)
    }

    /// Check the attendee set is non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.attendees.is_empty() {
            return Err(FinderError::EmptyAttendees(self.title.clone()));
        }
        Ok(())
    }

    /// Whether any of `people` attends this event.
    pub fn involves_any(&self, people: &BTreeSet<String>) -> bool {
        // Iterate the smaller set.
        if self.attendees.len() <= people.len() {
            self.attendees.iter().any(|a| people.contains(a))
        } else {
            people.iter().any(|p| self.attendees.contains(p))
        }
    }

    pub fn involves(&self, person: &str) -> bool {
        self.attendees.contains(person)
    }
}
