//! "All habits done" streak across the active habit set.

use std::collections::{BTreeMap, HashSet};

use super::run::daily_runs;
use super::StreakResult;
use crate::calendar::DayKey;
use crate::model::{CompletionRecord, Habit, HabitId};

/// Days on which every habit in `active` has a completed record, most
/// recent first. Records of habits outside `active` are ignored.
pub fn complete_days(active: &HashSet<HabitId>, records: &[CompletionRecord]) -> Vec<DayKey> {
    if active.is_empty() {
        return Vec::new();
    }

    let mut done_by_day: BTreeMap<DayKey, HashSet<&HabitId>> = BTreeMap::new();
    for record in records
        .iter()
        .filter(|r| r.completed && active.contains(&r.habit_id))
    {
        done_by_day
            .entry(record.date)
            .or_default()
            .insert(&record.habit_id);
    }

    done_by_day
        .into_iter()
        .rev()
        .filter(|(_, done)| done.len() >= active.len())
        .map(|(day, _)| day)
        .collect()
}

/// Streak of days on which every active habit was completed.
pub fn compute_aggregate_streak(
    active_habits: &HashSet<HabitId>,
    records: &[CompletionRecord],
    today: DayKey,
) -> StreakResult {
    let days = complete_days(active_habits, records);
    let streak = daily_runs(&days, today);
    tracing::debug!(
        active_habits = active_habits.len(),
        complete_days = days.len(),
        current = streak.current_streak,
        longest = streak.longest_streak,
        "computed aggregate streak"
    );
    streak
}

/// [`compute_aggregate_streak`] over the habits marked active.
pub fn compute_aggregate_streak_for(
    habits: &[Habit],
    records: &[CompletionRecord],
    today: DayKey,
) -> StreakResult {
    let active: HashSet<HabitId> = habits
        .iter()
        .filter(|h| h.is_active)
        .map(|h| h.id.clone())
        .collect();
    compute_aggregate_streak(&active, records, today)
}
