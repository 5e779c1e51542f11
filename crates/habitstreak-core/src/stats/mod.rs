//! Statistics module for habitstreak
//!
//! This module turns habit definitions and completion history into the
//! figures shown on a stats screen: check-in rate over a range, the
//! all-habits streak, per-habit streaks and a Monday-to-Sunday progress strip.

mod overview;

pub use overview::{build_overview, DayProgress, HabitStats, StatsOverview, StatsRange};
