//! Busy-slot projection — dated meetings onto weekday clock ranges.
//!
//! Converts the universe of scheduled meetings touching a participant set
//! into per-weekday busy ranges for the subtraction algebra. A meeting's
//! absolute start instant determines its weekday and clock-time start; its
//! clock-time end is start plus duration.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::algebra::{ClockTime, TimeRange};
use crate::error::{EngineError, Result};
use crate::week::Weekday;

/// A participant identity.
///
/// The upstream data references organizers by internal user id and attendees
/// by contact address — two identity domains that never compare equal, even
/// for the same underlying person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantRef {
    User(String),
    Contact(String),
}

impl fmt::Display for ParticipantRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantRef::User(id) => write!(f, "user:{id}"),
            ParticipantRef::Contact(addr) => write!(f, "contact:{addr}"),
        }
    }
}

/// An already-scheduled meeting, used only as a busy-interval source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMeeting {
    pub meeting_id: String,
    pub start: DateTime<Utc>,
    pub duration_minutes: u32,
    pub organizer_id: String,
    pub attendee_contacts: Vec<String>,
}

impl ScheduledMeeting {
    /// Whether any participant in the set is this meeting's organizer or one
    /// of its attendees. Both identity domains are checked.
    fn involves_any(&self, participants: &[ParticipantRef]) -> bool {
        participants.iter().any(|p| match p {
            ParticipantRef::User(id) => *id == self.organizer_id,
            ParticipantRef::Contact(addr) => {
                self.attendee_contacts.iter().any(|a| a == addr)
            }
        })
    }
}

/// Project the meetings relevant to `participants` onto per-weekday busy
/// ranges.
///
/// Meetings touching none of the given participants are skipped, and the
/// same meeting observed through several participants counts once (dedup by
/// meeting id before projection). A meeting whose duration runs past
/// midnight is clipped at 24:00; the spill into the next day is discarded.
///
/// The output lists are unsorted and may overlap — the subtraction algebra
/// tolerates both.
///
/// # Errors
/// Returns `EngineError::InvalidDuration` for a relevant zero-minute
/// meeting: a meeting occupying no time signals corrupt upstream data and is
/// reported rather than silently dropped.
pub fn project_busy(
    meetings: &[ScheduledMeeting],
    participants: &[ParticipantRef],
) -> Result<BTreeMap<Weekday, Vec<TimeRange>>> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut busy: BTreeMap<Weekday, Vec<TimeRange>> = BTreeMap::new();

    for meeting in meetings {
        if !meeting.involves_any(participants) {
            continue;
        }
        if !seen.insert(meeting.meeting_id.as_str()) {
            continue;
        }
        if meeting.duration_minutes == 0 {
            return Err(EngineError::InvalidDuration(meeting.meeting_id.clone()));
        }

        let day = Weekday::from(meeting.start.weekday());
        let start_minutes = (meeting.start.hour() * 60 + meeting.start.minute()) as u16;
        // Clip at the day boundary; the cross-midnight spill is discarded.
        let end_minutes = (u32::from(start_minutes) + meeting.duration_minutes)
            .min(u32::from(ClockTime::END_OF_DAY.minutes())) as u16;

        let start = ClockTime::from_minutes(start_minutes)?;
        let end = ClockTime::from_minutes(end_minutes)?;
        if let Some(range) = TimeRange::positive(start, end) {
            busy.entry(day).or_default().push(range);
        }
    }

    Ok(busy)
}
