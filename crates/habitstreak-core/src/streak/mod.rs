//! Streak computation engine.
//!
//! Streaks are never stored. Every call recomputes the figures from the full
//! completion history, so editing or backfilling a past record is reflected
//! on the next call without any incremental state to patch.
//!
//! - [`compute_streak`] / [`compute_habit_streak`]: one habit, daily or
//!   weekly cadence.
//! - [`compute_aggregate_streak`]: days on which every active habit was done.
//! - [`StreakEngine`]: the same calculators bound to a [`Clock`](crate::Clock).

mod aggregate;
mod engine;
mod run;
mod single;

use serde::{Deserialize, Serialize};

pub use aggregate::{complete_days, compute_aggregate_streak, compute_aggregate_streak_for};
pub use engine::StreakEngine;
pub use single::{compute_habit_streak, compute_streak};

/// Current and best run lengths, in days or weeks depending on cadence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakResult {
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Streak figures for a single habit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStreak {
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Number of `completed == true` records supplied.
    pub total_completions: u32,
}

impl HabitStreak {
    pub fn streak(&self) -> StreakResult {
        StreakResult {
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
        }
    }
}
