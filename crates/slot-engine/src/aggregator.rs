//! Availability aggregation — the engine's orchestration entry point.
//!
//! Loads a meeting's participant set and free-time templates through the
//! [`ScheduleStore`] collaborator, projects their scheduled meetings onto
//! busy ranges, and computes per-weekday windows where everyone is free.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::algebra::{intersect_all, subtract_all, TimeRange};
use crate::error::Result;
use crate::projector::{project_busy, ParticipantRef, ScheduledMeeting};
use crate::week::{Weekday, WeeklyAvailability};

/// The meeting being scheduled: who must attend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub organizer_id: String,
    pub attendee_contacts: Vec<String>,
}

/// Data-access boundary to the surrounding backend.
///
/// The engine performs no I/O of its own; implementations load from whatever
/// persistence the backend uses. All three calls read a snapshot — the
/// engine never writes back, caches nothing, and stays consistent with the
/// latest data on every call.
pub trait ScheduleStore {
    /// The meeting being scheduled.
    ///
    /// # Errors
    /// `EngineError::MeetingNotFound` when the id is unknown.
    fn meeting(&self, meeting_id: &str) -> Result<MeetingRecord>;

    /// A participant's recurring free-time template.
    ///
    /// Implementations must return the stored template when one exists (an
    /// empty template means "never available") and
    /// [`WeeklyAvailability::business_hours`] when the participant never
    /// configured free time. The two states are distinct.
    ///
    /// # Errors
    /// `EngineError::ParticipantNotFound` when the reference itself cannot
    /// be resolved to a known record.
    fn weekly_availability(&self, participant: &ParticipantRef) -> Result<WeeklyAvailability>;

    /// Every meeting where any given participant appears as organizer or
    /// attendee. Ordering is not guaranteed and duplicates are tolerated —
    /// the projector dedupes by meeting id.
    fn relevant_meetings(&self, participants: &[ParticipantRef]) -> Result<Vec<ScheduledMeeting>>;
}

/// Per-weekday windows where every participant is simultaneously free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalAvailability {
    pub meeting_id: String,
    /// Organizer first, then attendees in their recorded order.
    pub participants: Vec<ParticipantRef>,
    /// All seven weekday keys are present. An empty list is the valid,
    /// meaningful answer "no common slot that day", not an error.
    pub per_weekday: BTreeMap<Weekday, Vec<TimeRange>>,
}

/// Compute, per weekday, the windows during which every participant of
/// `meeting_id` is simultaneously free and has no conflicting meeting.
///
/// Each weekday is computed independently: intersect all participants'
/// weekly free templates for that day, then subtract every busy range
/// projected from their scheduled meetings.
///
/// # Errors
/// - `EngineError::MeetingNotFound` when the meeting id is unknown.
/// - `EngineError::ParticipantNotFound` when an organizer or attendee
///   reference cannot be resolved, naming the failed reference. An
///   unresolvable participant is never silently skipped — that would widen
///   the common-free result and recommend slots that are not actually free.
/// - `EngineError::InvalidDuration` when a relevant scheduled meeting
///   carries a zero duration.
pub fn compute_optimal_availability<S: ScheduleStore>(
    store: &S,
    meeting_id: &str,
) -> Result<OptimalAvailability> {
    let record = store.meeting(meeting_id)?;

    let mut participants = Vec::with_capacity(1 + record.attendee_contacts.len());
    participants.push(ParticipantRef::User(record.organizer_id.clone()));
    participants.extend(
        record
            .attendee_contacts
            .iter()
            .cloned()
            .map(ParticipantRef::Contact),
    );

    let mut templates = Vec::with_capacity(participants.len());
    for participant in &participants {
        templates.push(store.weekly_availability(participant)?);
    }

    let meetings = store.relevant_meetings(&participants)?;
    let busy = project_busy(&meetings, &participants)?;

    let mut per_weekday = BTreeMap::new();
    for day in Weekday::ALL {
        let per_participant: Vec<Vec<TimeRange>> = templates
            .iter()
            .map(|template| template.for_day(day).to_vec())
            .collect();

        let common = intersect_all(&per_participant);
        let day_busy = busy.get(&day).map(Vec::as_slice).unwrap_or(&[]);
        per_weekday.insert(day, subtract_all(&common, day_busy));
    }

    Ok(OptimalAvailability {
        meeting_id: meeting_id.to_string(),
        participants,
        per_weekday,
    })
}
