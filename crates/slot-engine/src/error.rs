//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Meeting not found: {0}")]
    MeetingNotFound(String),

    #[error("Participant not found: {0}")]
    ParticipantNotFound(String),

    #[error("Invalid clock time: {0}")]
    InvalidClockTime(String),

    #[error("Invalid time range: {start} must be before {end}")]
    InvalidTimeRange { start: String, end: String },

    #[error("Zero-duration meeting: {0}")]
    InvalidDuration(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
