//! Streak commands for CLI.

use clap::Subcommand;
use habitstreak_core::{CadencePolicy, Config, HabitId, HabitStreak};
use serde::Serialize;

use super::HistoryArgs;

#[derive(Subcommand)]
pub enum StreakAction {
    /// Current and longest streak of one habit
    Habit {
        /// Habit ID
        id: String,
        #[command(flatten)]
        history: HistoryArgs,
    },
    /// Streak of days on which every active habit was done
    All {
        #[command(flatten)]
        history: HistoryArgs,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HabitStreakReport<'a> {
    habit_id: &'a HabitId,
    name: &'a str,
    cadence: CadencePolicy,
    #[serde(flatten)]
    streak: HabitStreak,
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        StreakAction::Habit { id, history } => {
            let snapshot = history.load(&config)?;
            let id = HabitId::from(id);
            let habit = snapshot
                .habit(&id)
                .ok_or_else(|| format!("unknown habit: {id}"))?;
            let streak = history.engine().habit_streak(habit, &snapshot.check_ins);
            let report = HabitStreakReport {
                habit_id: &habit.id,
                name: &habit.name,
                cadence: habit.cadence,
                streak,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        StreakAction::All { history } => {
            let snapshot = history.load(&config)?;
            let streak = history
                .engine()
                .aggregate_streak_for(&snapshot.habits, &snapshot.check_ins);
            println!("{}", serde_json::to_string_pretty(&streak)?);
        }
    }
    Ok(())
}
