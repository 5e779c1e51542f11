pub mod config;
pub mod stats;
pub mod streak;

use std::path::PathBuf;

use clap::Args;
use habitstreak_core::{
    Clock, Config, DayKey, FixedClock, HistorySnapshot, StreakEngine, SystemClock,
};

/// Where the history comes from and which day counts as today.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// History snapshot (JSON). Defaults to the `history.path` config value
    #[arg(long)]
    pub history: Option<PathBuf>,
    /// Evaluate as of this day (YYYY-MM-DD) instead of the local date
    #[arg(long)]
    pub today: Option<DayKey>,
}

impl HistoryArgs {
    pub fn load(&self, config: &Config) -> Result<HistorySnapshot, Box<dyn std::error::Error>> {
        let path = self
            .history
            .clone()
            .or_else(|| config.history_path())
            .ok_or("no history snapshot: pass --history or set history.path")?;
        tracing::debug!(path = %path.display(), "reading history");
        Ok(HistorySnapshot::from_path(&path, config.default_times_per_week())?)
    }

    /// Engine pinned to a single day for the whole command.
    pub fn engine(&self) -> StreakEngine<FixedClock> {
        let today = self.today.unwrap_or_else(|| SystemClock.today());
        tracing::debug!(%today, "evaluating streaks");
        StreakEngine::new(FixedClock(today))
    }
}
