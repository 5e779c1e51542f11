//! Habit definitions, cadence policies and completion records.
//!
//! Records stored by older clients carry the cadence as a bare string or as
//! a loosely shaped object. [`StoredHabit`] accepts that shape and
//! [`StoredHabit::into_habit`] normalizes it into the tagged
//! [`CadencePolicy`] the streak engine works with.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::calendar::DayKey;
use crate::error::ValidationError;

/// Opaque habit identifier assigned by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(String);

impl HabitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HabitId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for HabitId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Weekly completion target, always within `1..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TimesPerWeek(u8);

impl TimesPerWeek {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    /// Target used when a stored weekly habit omits `timesPerWeek`.
    pub const DEFAULT: TimesPerWeek = TimesPerWeek(3);

    /// Rejects targets outside `1..=7`.
    pub fn new(times: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&times) {
            Ok(Self(times))
        } else {
            Err(ValidationError::InvalidConfiguration {
                field: "timesPerWeek".to_string(),
                message: format!(
                    "must be between {} and {}, got {times}",
                    Self::MIN,
                    Self::MAX
                ),
            })
        }
    }

    /// Clamps any integer into `1..=7`.
    pub fn clamped(times: i64) -> Self {
        Self(times.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for TimesPerWeek {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for TimesPerWeek {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TimesPerWeek> for u8 {
    fn from(times: TimesPerWeek) -> Self {
        times.0
    }
}

/// What counts as "satisfied" for a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CadencePolicy {
    /// Satisfied by any completion on a calendar day.
    #[default]
    Daily,
    /// Satisfied for an ISO week with at least `times_per_week` completions.
    Weekly {
        #[serde(rename = "timesPerWeek")]
        times_per_week: TimesPerWeek,
    },
}

impl CadencePolicy {
    pub fn weekly(times_per_week: u8) -> Result<Self, ValidationError> {
        Ok(CadencePolicy::Weekly {
            times_per_week: TimesPerWeek::new(times_per_week)?,
        })
    }

    /// Normalize a stored `frequency` field.
    ///
    /// Missing values, bare strings and unrecognized shapes all become
    /// [`CadencePolicy::Daily`]. A weekly object without `timesPerWeek` uses
    /// `default_times`; an out-of-range target is clamped.
    pub fn from_legacy(value: Option<&Value>, default_times: TimesPerWeek) -> Self {
        match value {
            None | Some(Value::Null) => CadencePolicy::Daily,
            Some(Value::String(name)) => {
                if name != "daily" {
                    tracing::warn!(cadence = %name, "unrecognized cadence name, using daily");
                }
                CadencePolicy::Daily
            }
            Some(Value::Object(fields)) => match fields.get("type").and_then(Value::as_str) {
                Some("weekly") => {
                    let times_per_week = fields
                        .get("timesPerWeek")
                        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f.round() as i64)))
                        .map(TimesPerWeek::clamped)
                        .unwrap_or(default_times);
                    CadencePolicy::Weekly { times_per_week }
                }
                Some("daily") => CadencePolicy::Daily,
                other => {
                    tracing::warn!(cadence_type = ?other, "unrecognized cadence type, using daily");
                    CadencePolicy::Daily
                }
            },
            Some(other) => {
                tracing::warn!(cadence = %other, "malformed cadence value, using daily");
                CadencePolicy::Daily
            }
        }
    }
}

impl fmt::Display for CadencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CadencePolicy::Daily => f.write_str("daily"),
            CadencePolicy::Weekly { times_per_week } => {
                write!(f, "weekly({}x)", times_per_week.get())
            }
        }
    }
}

/// A normalized habit definition.
///
/// Deserializes through [`StoredHabit`], so stored `_id`/`frequency` fields
/// and legacy cadence shapes are accepted and normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredHabit")]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    pub cadence: CadencePolicy,
    pub is_active: bool,
}

impl Habit {
    pub fn new(id: impl Into<HabitId>, cadence: CadencePolicy) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            cadence,
            is_active: true,
        }
    }

    pub fn daily(id: impl Into<HabitId>) -> Self {
        Self::new(id, CadencePolicy::Daily)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// A habit as the storage layer hands it over, before normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredHabit {
    #[serde(alias = "_id")]
    pub id: HabitId,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "cadence")]
    pub frequency: Option<Value>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl StoredHabit {
    pub fn into_habit(self, default_times: TimesPerWeek) -> Habit {
        let cadence = CadencePolicy::from_legacy(self.frequency.as_ref(), default_times);
        Habit {
            id: self.id,
            name: self.name,
            cadence,
            is_active: self.is_active,
        }
    }
}

impl From<StoredHabit> for Habit {
    fn from(stored: StoredHabit) -> Self {
        stored.into_habit(TimesPerWeek::DEFAULT)
    }
}

/// One check-in for one habit on one calendar day.
///
/// Only `completed == true` records count toward streaks. At most one record
/// is expected per `(habit_id, date)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub habit_id: HabitId,
    pub date: DayKey,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CompletionRecord {
    pub fn new(habit_id: impl Into<HabitId>, date: DayKey, completed: bool) -> Self {
        Self {
            habit_id: habit_id.into(),
            date,
            completed,
            value: None,
            note: None,
        }
    }

    pub fn done(habit_id: impl Into<HabitId>, date: DayKey) -> Self {
        Self::new(habit_id, date, true)
    }

    pub fn missed(habit_id: impl Into<HabitId>, date: DayKey) -> Self {
        Self::new(habit_id, date, false)
    }
}

fn default_true() -> bool {
    true
}
