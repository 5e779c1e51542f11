//! # habitstreak Core Library
//!
//! This library turns a habit tracker's completion history into streak
//! figures. It is a pure computation layer: storage, sync and rendering live
//! in the surrounding application, which hands over habit definitions and
//! check-in records and displays the numbers that come back.
//!
//! ## Architecture
//!
//! - **Calendar**: `YYYY-MM-DD` day keys and ISO week arithmetic; nothing in
//!   the engine compares timestamps
//! - **Model**: habits, cadence policies (daily or N times per week) and
//!   completion records, with normalization of legacy stored cadence values
//! - **Streak**: per-habit and all-habits streaks, recomputed from scratch on
//!   every call
//! - **Stats**: range-based completion rates and the weekly progress strip
//! - **Storage**: TOML configuration and JSON history snapshots for the CLI
//!
//! ## Key Components
//!
//! - [`compute_streak`]: single-habit streak under a [`CadencePolicy`]
//! - [`compute_aggregate_streak`]: streak of days with every active habit done
//! - [`StreakEngine`]: the calculators bound to an injectable [`Clock`]
//! - [`Config`]: application configuration management

pub mod calendar;
pub mod clock;
pub mod error;
pub mod model;
pub mod stats;
pub mod storage;
pub mod streak;

pub use calendar::{day_key, days_between, prev_week_start, week_start, DayKey};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, CoreError, ValidationError};
pub use model::{CadencePolicy, CompletionRecord, Habit, HabitId, StoredHabit, TimesPerWeek};
pub use stats::{build_overview, StatsOverview, StatsRange};
pub use storage::{Config, HistorySnapshot};
pub use streak::{
    compute_aggregate_streak, compute_aggregate_streak_for, compute_habit_streak, compute_streak,
    HabitStreak, StreakEngine, StreakResult,
};
