use clap::Subcommand;
use habitstreak_core::{Config, StatsRange};

use super::HistoryArgs;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Rates, streaks and this week's progress for all active habits
    Overview {
        /// week, month or all (default: stats.default_range)
        #[arg(long)]
        range: Option<StatsRange>,
        #[command(flatten)]
        history: HistoryArgs,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        StatsAction::Overview { range, history } => {
            let snapshot = history.load(&config)?;
            let range = range.unwrap_or(config.stats.default_range);
            let overview = history
                .engine()
                .overview(&snapshot.habits, &snapshot.check_ins, range);
            println!("{}", serde_json::to_string_pretty(&overview)?);
        }
    }
    Ok(())
}
