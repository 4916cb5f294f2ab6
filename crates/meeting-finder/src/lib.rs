//! # meeting-finder
//!
//! Find the windows of a day in which a meeting can take place.
//!
//! Given the day's calendar events and a [`MeetingRequest`] (duration,
//! required attendees, optional attendees), [`find_slots`] returns the
//! disjoint windows in which every required attendee is free for at least the
//! requested duration, and as many optional attendees as possible are too.
//!
//! The computation is pure: no I/O, no shared state, same input same output.
//!
//! ## Modules
//!
//! - [`time_range`] — minute ranges within a day
//! - [`event`] — calendar events
//! - [`request`] — meeting requests
//! - [`freebusy`] — open windows and busy-period merging
//! - [`mask`] — bit-vector view of a day
//! - [`search`] — optional-attendee subset search
//! - [`scheduler`] — the query itself
//! - [`conflict`] — who clashes with a proposed window
//! - [`config`] — scheduler tuning
//! - [`error`] — error types

pub mod config;
pub mod conflict;
pub mod error;
pub mod event;
pub mod freebusy;
pub mod mask;
pub mod request;
pub mod scheduler;
pub mod search;
pub mod time_range;

pub use config::SchedulerConfig;
pub use conflict::{find_conflicts, unavailable_attendees, Conflict};
pub use error::FinderError;
pub use event::Event;
pub use request::MeetingRequest;
pub use scheduler::{find_slots, find_slots_with, search_slots, SlotSearch};
pub use time_range::TimeRange;
