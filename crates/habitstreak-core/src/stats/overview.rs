//! Stats overview for a time range
//!
//! The overview combines three kinds of figures:
//! - **Rates**: completed check-ins against the check-ins the range allows
//! - **Streaks**: the all-habits streak and each habit's own streak, always
//!   computed over the full history regardless of range
//! - **Week strip**: per-day completion counts for the current ISO week

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::calendar::{inclusive_day_count, DayKey};
use crate::error::ValidationError;
use crate::model::{CompletionRecord, Habit, HabitId};
use crate::streak::{compute_aggregate_streak, compute_habit_streak};

/// Time range the rate figures are computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsRange {
    /// Monday of the current week through today
    #[default]
    Week,
    /// First of the current month through today
    Month,
    /// Entire history
    All,
}

impl StatsRange {
    /// First day of the range, or `None` for an unbounded range.
    pub fn start(self, today: DayKey) -> Option<DayKey> {
        match self {
            StatsRange::Week => Some(today.week_start()),
            StatsRange::Month => Some(today.month_start()),
            StatsRange::All => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatsRange::Week => "week",
            StatsRange::Month => "month",
            StatsRange::All => "all",
        }
    }
}

impl fmt::Display for StatsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatsRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(StatsRange::Week),
            "month" => Ok(StatsRange::Month),
            "all" => Ok(StatsRange::All),
            other => Err(ValidationError::InvalidValue {
                field: "range".to_string(),
                message: format!("expected week, month or all, got '{other}'"),
            }),
        }
    }
}

/// Figures for one active habit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStats {
    pub habit_id: HabitId,
    pub name: String,
    /// Current streak over the full history
    pub current_streak: u32,
    /// Longest streak over the full history
    pub longest_streak: u32,
    /// Completed check-ins inside the range
    pub total_completions: u32,
    /// Completion percentage inside the range (0 to 100)
    pub rate: u32,
}

/// One day of the current-week strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayProgress {
    pub date: DayKey,
    /// Completed check-ins on this day
    pub count: u32,
    /// Percentage of active habits completed on this day
    pub rate: u32,
    pub is_today: bool,
}

/// Complete stats overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOverview {
    pub range: StatsRange,
    /// Completed check-ins inside the range
    pub total_completions: u32,
    /// All-habits streak (full history)
    pub current_streak: u32,
    /// Longest all-habits streak (full history)
    pub longest_streak: u32,
    /// Overall completion percentage inside the range
    pub check_in_rate: u32,
    pub habits: Vec<HabitStats>,
    pub week: Vec<DayProgress>,
}

/// Build the overview for the active habits in `habits`.
pub fn build_overview(
    habits: &[Habit],
    records: &[CompletionRecord],
    range: StatsRange,
    today: DayKey,
) -> StatsOverview {
    let active: Vec<&Habit> = habits.iter().filter(|h| h.is_active).collect();
    let active_ids: HashSet<HabitId> = active.iter().map(|h| h.id.clone()).collect();
    let active_records: Vec<&CompletionRecord> = records
        .iter()
        .filter(|r| active_ids.contains(&r.habit_id))
        .collect();

    let start = range.start(today);
    let in_range = |date: DayKey| match start {
        Some(start) => start <= date && date <= today,
        None => true,
    };
    let range_days = start.map(|start| inclusive_day_count(start, today) as u64);

    let mut tallies: HashMap<&HabitId, HabitTally> = HashMap::new();
    let mut total_completions = 0u64;
    for record in active_records.iter().filter(|r| in_range(r.date)) {
        tallies
            .entry(&record.habit_id)
            .or_insert_with(HabitTally::new)
            .record(record.completed);
        if record.completed {
            total_completions += 1;
        }
    }

    let habit_count = active.len() as u64;
    let check_in_rate = match range_days {
        Some(days) => percent(total_completions, habit_count * days),
        None => {
            let distinct_dates: HashSet<DayKey> = active_records.iter().map(|r| r.date).collect();
            percent(total_completions, habit_count * distinct_dates.len() as u64)
        }
    };

    let streak = compute_aggregate_streak(&active_ids, records, today);

    let habit_stats: Vec<HabitStats> = active
        .iter()
        .map(|habit| {
            let tally = tallies.get(&habit.id).copied().unwrap_or_default();
            let full = compute_habit_streak(habit, records, today);
            tally.build(habit, full.current_streak, full.longest_streak, range_days)
        })
        .collect();

    let week = week_strip(&active_records, habit_count, today);

    StatsOverview {
        range,
        total_completions: saturate(total_completions),
        current_streak: streak.current_streak,
        longest_streak: streak.longest_streak,
        check_in_rate,
        habits: habit_stats,
        week,
    }
}

fn week_strip(records: &[&CompletionRecord], habit_count: u64, today: DayKey) -> Vec<DayProgress> {
    let monday = today.week_start();
    let mut per_day: HashMap<DayKey, u64> = HashMap::new();
    for record in records.iter().filter(|r| r.completed) {
        *per_day.entry(record.date).or_default() += 1;
    }

    monday
        .days_through(monday.add_days(6))
        .map(|date| {
            let count = per_day.get(&date).copied().unwrap_or(0);
            DayProgress {
                date,
                count: saturate(count),
                rate: percent(count, habit_count),
                is_today: date == today,
            }
        })
        .collect()
}

/// Rounded percentage; zero when there is nothing to divide by.
fn percent(numerator: u64, denominator: u64) -> u32 {
    if denominator == 0 {
        return 0;
    }
    (numerator as f64 / denominator as f64 * 100.0).round() as u32
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Helper struct for counting one habit's records inside the range
#[derive(Debug, Clone, Copy, Default)]
struct HabitTally {
    records: u64,
    completed: u64,
}

impl HabitTally {
    fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, completed: bool) {
        self.records += 1;
        if completed {
            self.completed += 1;
        }
    }

    fn build(
        self,
        habit: &Habit,
        current_streak: u32,
        longest_streak: u32,
        range_days: Option<u64>,
    ) -> HabitStats {
        let rate = match range_days {
            Some(days) => percent(self.completed, days),
            None => percent(self.completed, self.records),
        };

        HabitStats {
            habit_id: habit.id.clone(),
            name: habit.name.clone(),
            current_streak,
            longest_streak,
            total_completions: saturate(self.completed),
            rate: rate.min(100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    fn done(id: &str, date: &str) -> CompletionRecord {
        CompletionRecord::done(id, key(date))
    }

    #[test]
    fn range_parsing() {
        assert_eq!("week".parse::<StatsRange>().unwrap(), StatsRange::Week);
        assert_eq!("month".parse::<StatsRange>().unwrap(), StatsRange::Month);
        assert_eq!("all".parse::<StatsRange>().unwrap(), StatsRange::All);
        assert!("year".parse::<StatsRange>().is_err());
    }

    #[test]
    fn range_start() {
        let today = key("2024-06-05");
        assert_eq!(StatsRange::Week.start(today), Some(key("2024-06-03")));
        assert_eq!(StatsRange::Month.start(today), Some(key("2024-06-01")));
        assert_eq!(StatsRange::All.start(today), None);
    }

    #[test]
    fn percent_rounds_and_handles_zero() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 2), 50);
    }

    #[test]
    fn empty_habits_yield_zero_overview_with_week_strip() {
        let overview = build_overview(&[], &[], StatsRange::Week, key("2024-06-05"));
        assert_eq!(overview.total_completions, 0);
        assert_eq!(overview.check_in_rate, 0);
        assert!(overview.habits.is_empty());
        assert_eq!(overview.week.len(), 7);
        assert!(overview.week.iter().all(|d| d.count == 0 && d.rate == 0));
    }

    #[test]
    fn week_rate_counts_days_so_far() {
        // Monday 06-03 through Wednesday 06-05: 3 days, 2 habits, 6 possible
        let habits = vec![Habit::daily("a"), Habit::daily("b")];
        let records = vec![
            done("a", "2024-06-03"),
            done("b", "2024-06-03"),
            done("a", "2024-06-04"),
            done("a", "2024-05-31"),
        ];
        let overview = build_overview(&habits, &records, StatsRange::Week, key("2024-06-05"));
        assert_eq!(overview.total_completions, 3);
        assert_eq!(overview.check_in_rate, 50);
        assert_eq!(overview.habits[0].total_completions, 2);
        assert_eq!(overview.habits[0].rate, 67);
        assert_eq!(overview.habits[1].rate, 33);
    }

    #[test]
    fn all_range_uses_distinct_record_dates() {
        let habits = vec![Habit::daily("a"), Habit::daily("b")];
        let records = vec![
            done("a", "2024-06-01"),
            CompletionRecord::missed("b", key("2024-06-01")),
            done("a", "2024-06-02"),
            done("b", "2024-06-02"),
        ];
        let overview = build_overview(&habits, &records, StatsRange::All, key("2024-06-02"));
        // 3 completed of 2 habits x 2 dates
        assert_eq!(overview.check_in_rate, 75);
        assert_eq!(overview.habits[1].rate, 50);
        assert_eq!(overview.current_streak, 1);
    }

    #[test]
    fn inactive_habits_are_left_out() {
        let habits = vec![Habit::daily("a"), Habit::daily("b").inactive()];
        let records = vec![done("a", "2024-06-05"), done("b", "2024-06-05")];
        let overview = build_overview(&habits, &records, StatsRange::Week, key("2024-06-05"));
        assert_eq!(overview.habits.len(), 1);
        assert_eq!(overview.total_completions, 1);
        assert_eq!(overview.current_streak, 1);
    }

    #[test]
    fn week_strip_marks_today() {
        let habits = vec![Habit::daily("a"), Habit::daily("b")];
        let records = vec![done("a", "2024-06-04"), done("b", "2024-06-04")];
        let overview = build_overview(&habits, &records, StatsRange::Week, key("2024-06-04"));
        assert_eq!(overview.week[0].date, key("2024-06-03"));
        assert_eq!(overview.week[6].date, key("2024-06-09"));
        let tuesday = &overview.week[1];
        assert!(tuesday.is_today);
        assert_eq!(tuesday.count, 2);
        assert_eq!(tuesday.rate, 100);
        assert_eq!(overview.week.iter().filter(|d| d.is_today).count(), 1);
    }

    #[test]
    fn habit_streaks_ignore_range() {
        let habits = vec![Habit::daily("a")];
        let records = vec![
            done("a", "2024-05-30"),
            done("a", "2024-05-31"),
            done("a", "2024-06-01"),
        ];
        let overview = build_overview(&habits, &records, StatsRange::Month, key("2024-06-01"));
        assert_eq!(overview.habits[0].total_completions, 1);
        assert_eq!(overview.habits[0].current_streak, 3);
        assert_eq!(overview.habits[0].rate, 100);
    }

    #[test]
    fn serializes_camel_case() {
        let habits = vec![Habit::daily("a").with_name("Read")];
        let overview = build_overview(&habits, &[], StatsRange::Week, key("2024-06-05"));
        let json = serde_json::to_value(&overview).unwrap();
        assert_eq!(json["range"], "week");
        assert!(json.get("checkInRate").is_some());
        assert_eq!(json["habits"][0]["habitId"], "a");
        assert_eq!(json["week"][2]["isToday"], true);
    }
}
