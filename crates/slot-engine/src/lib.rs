//! # slot-engine
//!
//! Availability aggregation and optimal-slot computation for a
//! meeting-scheduling backend.
//!
//! Given a meeting's organizer and attendees — each with a weekly recurring
//! free-time template and a set of already-scheduled meetings — the engine
//! computes, per weekday, the time windows during which everyone is
//! simultaneously free. It is a pure library: data arrives through the
//! [`ScheduleStore`] collaborator trait, the result is a derived ephemeral
//! value, and nothing is cached or persisted here.
//!
//! ## Modules
//!
//! - [`algebra`] — clock-time ranges and the intersect/subtract set operations
//! - [`week`] — weekday labels and recurring free-time templates
//! - [`projector`] — dated meetings → per-weekday busy ranges
//! - [`aggregator`] — the `compute_optimal_availability` entry point
//! - [`error`] — error types

pub mod aggregator;
pub mod algebra;
pub mod error;
pub mod projector;
pub mod week;

pub use aggregator::{
    compute_optimal_availability, MeetingRecord, OptimalAvailability, ScheduleStore,
};
pub use algebra::{intersect_all, subtract_all, ClockTime, TimeRange};
pub use error::EngineError;
pub use projector::{project_busy, ParticipantRef, ScheduledMeeting};
pub use week::{Weekday, WeeklyAvailability};
