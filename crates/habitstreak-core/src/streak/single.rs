//! Per-habit streaks under daily and weekly cadence.

use std::collections::BTreeMap;

use super::run::{daily_runs, weekly_runs};
use super::{HabitStreak, StreakResult};
use crate::calendar::DayKey;
use crate::model::{CadencePolicy, CompletionRecord, Habit, TimesPerWeek};

/// Streak figures for one habit's records.
///
/// `records` should already be limited to one habit; records with
/// `completed == false` are skipped. Order does not matter.
pub fn compute_streak(
    policy: CadencePolicy,
    records: &[CompletionRecord],
    today: DayKey,
) -> HabitStreak {
    let dates = records.iter().filter(|r| r.completed).map(|r| r.date);
    streak_for_dates(policy, dates, today)
}

/// Like [`compute_streak`], picking `habit`'s records out of a mixed history.
pub fn compute_habit_streak(
    habit: &Habit,
    records: &[CompletionRecord],
    today: DayKey,
) -> HabitStreak {
    let dates = records
        .iter()
        .filter(|r| r.completed && r.habit_id == habit.id)
        .map(|r| r.date);
    let streak = streak_for_dates(habit.cadence, dates, today);
    tracing::debug!(
        habit_id = %habit.id,
        cadence = %habit.cadence,
        current = streak.current_streak,
        longest = streak.longest_streak,
        total = streak.total_completions,
        "computed habit streak"
    );
    streak
}

fn streak_for_dates<I>(policy: CadencePolicy, dates: I, today: DayKey) -> HabitStreak
where
    I: Iterator<Item = DayKey>,
{
    let dates: Vec<DayKey> = dates.collect();
    let total_completions = u32::try_from(dates.len()).unwrap_or(u32::MAX);
    if dates.is_empty() {
        return HabitStreak::default();
    }

    let streak = match policy {
        CadencePolicy::Daily => daily_streak(dates, today),
        CadencePolicy::Weekly { times_per_week } => weekly_streak(&dates, times_per_week, today),
    };

    HabitStreak {
        current_streak: streak.current_streak,
        longest_streak: streak.longest_streak,
        total_completions,
    }
}

fn daily_streak(mut days: Vec<DayKey>, today: DayKey) -> StreakResult {
    days.sort_unstable_by(|a, b| b.cmp(a));
    // a duplicate check-in on the same day is not a gap
    days.dedup();
    daily_runs(&days, today)
}

fn weekly_streak(dates: &[DayKey], times_per_week: TimesPerWeek, today: DayKey) -> StreakResult {
    let mut per_week: BTreeMap<DayKey, u32> = BTreeMap::new();
    for date in dates {
        *per_week.entry(date.week_start()).or_default() += 1;
    }

    let target = u32::from(times_per_week.get());
    let satisfied: Vec<DayKey> = per_week
        .into_iter()
        .rev()
        .filter(|(_, count)| *count >= target)
        .map(|(week, _)| week)
        .collect();

    weekly_runs(&satisfied, today)
}
