//! Interval algebra over clock-time ranges within a single day.
//!
//! Pure set operations for one weekday at a time: intersect N participants'
//! free ranges, subtract busy ranges from free ranges. All ranges are
//! half-open `[start, end)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A clock time within a single day, stored as minutes since midnight.
///
/// Parses from and displays as `"HH:MM"`; the numeric form orders identically
/// to the zero-padded string form. `24:00` (1440 minutes) is admitted so it
/// can serve as the exclusive end of a range touching the day boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);
    pub const END_OF_DAY: ClockTime = ClockTime(MINUTES_PER_DAY);

    /// Build from an hour/minute pair. Hour 24 is only valid as `24:00`.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidClockTime` when the pair does not name a
    /// time of day.
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self> {
        if minute > 59 || hour > 24 || (hour == 24 && minute != 0) {
            return Err(EngineError::InvalidClockTime(format!(
                "{hour:02}:{minute:02}"
            )));
        }
        Ok(ClockTime(hour * 60 + minute))
    }

    /// Build from minutes since midnight (`0..=1440`).
    ///
    /// # Errors
    /// Returns `EngineError::InvalidClockTime` when past the day boundary.
    pub fn from_minutes(minutes: u16) -> Result<Self> {
        if minutes > MINUTES_PER_DAY {
            return Err(EngineError::InvalidClockTime(format!("{minutes} minutes")));
        }
        Ok(ClockTime(minutes))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for ClockTime {
    type Err = EngineError;

    /// Expects the fixed-width `"HH:MM"` wire format.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || EngineError::InvalidClockTime(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(invalid());
        }
        let hour: u16 = hour.parse().map_err(|_| invalid())?;
        let minute: u16 = minute.parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = EngineError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

/// A half-open `[start, end)` range of clock time within a single day.
///
/// The `start < end` invariant is enforced at construction; an empty or
/// inverted range cannot exist. Zero-width candidates produced inside the
/// algebra are dropped, never built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr", into = "RangeRepr")]
pub struct TimeRange {
    start: ClockTime,
    end: ClockTime,
}

/// Wire shape for [`TimeRange`]: `{"start": "HH:MM", "end": "HH:MM"}`.
/// Deserialization re-checks the `start < end` invariant.
#[derive(Serialize, Deserialize)]
struct RangeRepr {
    start: ClockTime,
    end: ClockTime,
}

impl From<TimeRange> for RangeRepr {
    fn from(range: TimeRange) -> Self {
        RangeRepr {
            start: range.start,
            end: range.end,
        }
    }
}

impl TryFrom<RangeRepr> for TimeRange {
    type Error = EngineError;

    fn try_from(repr: RangeRepr) -> Result<Self> {
        TimeRange::new(repr.start, repr.end)
    }
}

impl TimeRange {
    /// Build a range, rejecting `start >= end`.
    ///
    /// Malformed ranges arriving from an upstream data source are a contract
    /// violation and fail fast here rather than being silently repaired.
    pub fn new(start: ClockTime, end: ClockTime) -> Result<Self> {
        if start >= end {
            return Err(EngineError::InvalidTimeRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(TimeRange { start, end })
    }

    /// Parse a range from two `"HH:MM"` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(start.parse()?, end.parse()?)
    }

    pub fn start(&self) -> ClockTime {
        self.start
    }

    pub fn end(&self) -> ClockTime {
        self.end
    }

    /// Construct only when the candidate has positive width.
    pub(crate) fn positive(start: ClockTime, end: ClockTime) -> Option<Self> {
        (start < end).then_some(TimeRange { start, end })
    }

    /// Crate-internal constructor for literals known to satisfy the invariant.
    pub(crate) const fn from_minutes_unchecked(start: u16, end: u16) -> Self {
        TimeRange {
            start: ClockTime(start),
            end: ClockTime(end),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Intersect every participant's range set, reduced across all participants.
///
/// Pairwise intersection of two ranges keeps `[max(starts), min(ends))` when
/// it has positive width. The reduction is associative — participant order
/// never changes the result set — and the output is canonicalized by sorting
/// on `(start, end)`.
///
/// A participant with an empty set empties the result for everyone. Zero
/// participants also yields an empty result: no availability can be asserted
/// for nobody.
pub fn intersect_all(per_participant: &[Vec<TimeRange>]) -> Vec<TimeRange> {
    let Some((first, rest)) = per_participant.split_first() else {
        return Vec::new();
    };

    let mut common = first.clone();
    for ranges in rest {
        common = intersect_pair(&common, ranges);
        if common.is_empty() {
            break;
        }
    }

    common.sort();
    common
}

fn intersect_pair(a: &[TimeRange], b: &[TimeRange]) -> Vec<TimeRange> {
    let mut out = Vec::new();
    for x in a {
        for y in b {
            let start = x.start().max(y.start());
            let end = x.end().min(y.end());
            if let Some(range) = TimeRange::positive(start, end) {
                out.push(range);
            }
        }
    }
    out
}

/// Remove every busy range from every free range.
///
/// A free range straddling a busy range splits into the pieces before and
/// after it; pieces with no width are dropped. Busy ranges may overlap each
/// other — removal of already-removed time is a no-op, so no pre-merge is
/// needed. The output is sorted on `(start, end)`.
pub fn subtract_all(free: &[TimeRange], busy: &[TimeRange]) -> Vec<TimeRange> {
    let mut remaining: Vec<TimeRange> = free.to_vec();
    for b in busy {
        remaining = remaining
            .iter()
            .flat_map(|f| subtract_one(*f, *b))
            .collect();
    }
    remaining.sort();
    remaining
}

fn subtract_one(free: TimeRange, busy: TimeRange) -> Vec<TimeRange> {
    // Disjoint (or merely touching) — the free range survives untouched.
    if busy.end() <= free.start() || busy.start() >= free.end() {
        return vec![free];
    }

    let mut pieces = Vec::new();
    if let Some(before) = TimeRange::positive(free.start(), busy.start()) {
        pieces.push(before);
    }
    if let Some(after) = TimeRange::positive(busy.end(), free.end()) {
        pieces.push(after);
    }
    pieces
}
