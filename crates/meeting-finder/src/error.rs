//! Error types for meeting-finder input validation.
//!
//! The scheduler itself never fails; these errors come from the checked
//! constructors callers use to reject malformed input before a query.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FinderError {
    #[error("Invalid time range: {start}..{end}")]
    InvalidRange { start: i64, end: i64 },

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Event has no attendees: {0}")]
    EmptyAttendees(String),

    #[error("Invalid meeting duration: {0} minutes")]
    InvalidDuration(i64),

    #[error("Invalid scheduler config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, FinderError>;
