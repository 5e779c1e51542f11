//! JSON export of habits and check-ins, as handed over by the storage layer.
//!
//! ```json
//! {
//!   "habits": [{ "_id": "h1", "name": "Read", "frequency": "daily", "isActive": true }],
//!   "checkIns": [{ "habitId": "h1", "date": "2024-06-01", "completed": true }]
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::error::{CoreError, Result};
use crate::model::{CompletionRecord, Habit, HabitId, StoredHabit, TimesPerWeek};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    #[serde(default)]
    habits: Vec<StoredHabit>,
    #[serde(default, alias = "records")]
    check_ins: Vec<CompletionRecord>,
}

/// Habits with normalized cadence plus their completion records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySnapshot {
    pub habits: Vec<Habit>,
    pub check_ins: Vec<CompletionRecord>,
}

impl HistorySnapshot {
    /// Parse a snapshot, normalizing each habit's stored cadence.
    pub fn from_json_str(json: &str, default_times: TimesPerWeek) -> Result<Self> {
        let raw: RawSnapshot = serde_json::from_str(json)?;
        let habits = raw
            .habits
            .into_iter()
            .map(|stored| stored.into_habit(default_times))
            .collect();
        Ok(Self {
            habits,
            check_ins: raw.check_ins,
        })
    }

    pub fn from_path(path: &Path, default_times: TimesPerWeek) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Custom(format!("cannot read history {}: {e}", path.display()))
        })?;
        let snapshot = Self::from_json_str(&content, default_times)?;
        tracing::debug!(
            path = %path.display(),
            habits = snapshot.habits.len(),
            check_ins = snapshot.check_ins.len(),
            "loaded history snapshot"
        );
        Ok(snapshot)
    }

    pub fn habit(&self, id: &HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| &h.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CadencePolicy;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "habits": [
            { "_id": "read", "name": "Read", "frequency": "daily" },
            { "_id": "gym", "name": "Gym", "frequency": { "type": "weekly" } },
            { "_id": "old", "name": "Old", "isActive": false }
        ],
        "checkIns": [
            { "habitId": "read", "date": "2024-06-01", "completed": true, "value": 30 },
            { "habitId": "gym", "date": "2024-06-02", "completed": false, "note": "sick" }
        ]
    }"#;

    #[test]
    fn parses_and_normalizes_habits() {
        let snapshot = HistorySnapshot::from_json_str(SAMPLE, TimesPerWeek::DEFAULT).unwrap();
        assert_eq!(snapshot.habits.len(), 3);
        assert_eq!(snapshot.check_ins.len(), 2);
        let gym = snapshot.habit(&HabitId::from("gym")).unwrap();
        assert_eq!(gym.cadence, CadencePolicy::weekly(3).unwrap());
        assert!(!snapshot.habit(&HabitId::from("old")).unwrap().is_active);
        assert_eq!(snapshot.check_ins[0].value, Some(30.0));
    }

    #[test]
    fn configured_default_target_applies() {
        let five = TimesPerWeek::new(5).unwrap();
        let snapshot = HistorySnapshot::from_json_str(SAMPLE, five).unwrap();
        let gym = snapshot.habit(&HabitId::from("gym")).unwrap();
        assert_eq!(gym.cadence, CadencePolicy::weekly(5).unwrap());
    }

    #[test]
    fn missing_sections_are_empty() {
        let snapshot = HistorySnapshot::from_json_str("{}", TimesPerWeek::DEFAULT).unwrap();
        assert_eq!(snapshot, HistorySnapshot::default());
    }

    #[test]
    fn bad_day_key_is_rejected() {
        let json =
            r#"{ "checkIns": [{ "habitId": "a", "date": "06/01/2024", "completed": true }] }"#;
        assert!(HistorySnapshot::from_json_str(json, TimesPerWeek::DEFAULT).is_err());
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let snapshot = HistorySnapshot::from_path(file.path(), TimesPerWeek::DEFAULT).unwrap();
        assert_eq!(snapshot.habits[0].name, "Read");
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = HistorySnapshot::from_path(
            Path::new("/nonexistent/history.json"),
            TimesPerWeek::DEFAULT,
        );
        assert!(matches!(result, Err(CoreError::Custom(_))));
    }
}
