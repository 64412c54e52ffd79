//! Weekday labels and recurring free-time templates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::algebra::TimeRange;

/// Day-of-week partition key for all recurring data.
///
/// A purely repeating label — there is no notion of a concrete date. `Ord`
/// follows Monday-first calendar order so weekday-keyed maps iterate
/// deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

/// One participant's standing recurring free time.
///
/// An absent weekday key means no free time that day. Whether an entirely
/// unconfigured participant falls back to [`WeeklyAvailability::business_hours`]
/// is the store's contract: a stored template — even an empty one, meaning
/// "never available" — is returned verbatim, while "never configured"
/// resolves to the default. The two states are distinct and must stay so.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    pub ranges: BTreeMap<Weekday, Vec<TimeRange>>,
}

impl WeeklyAvailability {
    /// The fixed fallback template for participants who never configured
    /// free time: 09:00-17:00 Monday through Friday, nothing on weekends.
    pub fn business_hours() -> Self {
        let nine_to_five = TimeRange::from_minutes_unchecked(9 * 60, 17 * 60);
        let ranges = [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
        ]
        .into_iter()
        .map(|day| (day, vec![nine_to_five]))
        .collect();
        WeeklyAvailability { ranges }
    }

    /// Build a template from weekday/ranges pairs.
    pub fn from_ranges<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Weekday, Vec<TimeRange>)>,
    {
        WeeklyAvailability {
            ranges: entries.into_iter().collect(),
        }
    }

    /// Free ranges for one weekday; an absent key reads as empty.
    pub fn for_day(&self, day: Weekday) -> &[TimeRange] {
        self.ranges.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }
}
