//! Calendar-day keys and ISO week arithmetic.
//!
//! Every comparison in the streak engine happens on [`DayKey`] values, never
//! on timestamps. A key is a plain calendar date in the caller's local
//! calendar, so time zones and daylight-saving shifts cannot move a record
//! from one day to another once it has been keyed.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// A calendar day, rendered as `YYYY-MM-DD`.
///
/// Ordering matches the lexicographic ordering of the canonical string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a key from year/month/day, or `None` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The calendar day of `instant` in its own time zone.
    pub fn from_instant<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self(instant.date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Shift by a signed number of days, saturating at the calendar limits.
    pub fn add_days(self, days: i64) -> Self {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        match shifted {
            Some(date) => Self(date),
            None if days >= 0 => Self(NaiveDate::MAX),
            None => Self(NaiveDate::MIN),
        }
    }

    /// The Monday on or before this day.
    ///
    /// Sunday belongs to the week that started six days earlier.
    pub fn week_start(self) -> Self {
        let offset = self.0.weekday().num_days_from_monday();
        self.add_days(-i64::from(offset))
    }

    /// Seven days earlier. Intended for week-start keys.
    pub fn prev_week_start(self) -> Self {
        self.add_days(-7)
    }

    /// First day of this day's month.
    pub fn month_start(self) -> Self {
        Self(self.0.with_day(1).unwrap_or(self.0))
    }

    /// Signed whole-day distance `self - other`.
    pub fn days_since(self, other: DayKey) -> i64 {
        self.0.signed_duration_since(other.0).num_days()
    }

    /// Ascending, inclusive walk from `self` to `end`. Empty if `end < self`.
    pub fn days_through(self, end: DayKey) -> impl Iterator<Item = DayKey> {
        let first = (self <= end).then_some(self);
        std::iter::successors(first, move |day: &DayKey| {
            let next = day.add_days(1);
            (next <= end && next != *day).then_some(next)
        })
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DAY_KEY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDayKey {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for DayKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> Self {
        key.to_string()
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// Format a point in time as the calendar day it falls on.
pub fn day_key<Tz: TimeZone>(instant: &DateTime<Tz>) -> DayKey {
    DayKey::from_instant(instant)
}

/// The Monday on or before `day`.
pub fn week_start(day: DayKey) -> DayKey {
    day.week_start()
}

/// The week start seven days before `week_start`.
pub fn prev_week_start(week_start: DayKey) -> DayKey {
    week_start.prev_week_start()
}

/// Signed day count `a - b`.
pub fn days_between(a: DayKey, b: DayKey) -> i64 {
    a.days_since(b)
}

/// Number of calendar days covered by the closed range between `a` and `b`.
pub fn inclusive_day_count(a: DayKey, b: DayKey) -> i64 {
    days_between(a, b).abs() + 1
}
