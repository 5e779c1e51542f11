//! Calculators bound to an injectable clock.

use super::{
    compute_aggregate_streak, compute_aggregate_streak_for, compute_habit_streak, compute_streak,
    HabitStreak, StreakResult,
};
use crate::calendar::DayKey;
use crate::clock::{Clock, SystemClock};
use crate::model::{CadencePolicy, CompletionRecord, Habit, HabitId};
use crate::stats::{build_overview, StatsOverview, StatsRange};
use std::collections::HashSet;

/// Streak calculators bound to a clock.
///
/// Each method reads the clock once and hands the same day to every
/// calculator it runs, so a call spanning midnight stays consistent.
#[derive(Debug, Clone, Default)]
pub struct StreakEngine<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> StreakEngine<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn today(&self) -> DayKey {
        self.clock.today()
    }

    pub fn streak(&self, policy: CadencePolicy, records: &[CompletionRecord]) -> HabitStreak {
        compute_streak(policy, records, self.today())
    }

    pub fn habit_streak(&self, habit: &Habit, records: &[CompletionRecord]) -> HabitStreak {
        compute_habit_streak(habit, records, self.today())
    }

    pub fn aggregate_streak(
        &self,
        active_habits: &HashSet<HabitId>,
        records: &[CompletionRecord],
    ) -> StreakResult {
        compute_aggregate_streak(active_habits, records, self.today())
    }

    pub fn aggregate_streak_for(
        &self,
        habits: &[Habit],
        records: &[CompletionRecord],
    ) -> StreakResult {
        compute_aggregate_streak_for(habits, records, self.today())
    }

    pub fn overview(
        &self,
        habits: &[Habit],
        records: &[CompletionRecord],
        range: StatsRange,
    ) -> StatsOverview {
        build_overview(habits, records, range, self.today())
    }
}
