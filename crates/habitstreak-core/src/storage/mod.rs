mod config;
pub mod snapshot;

pub use config::{CadenceConfig, Config, HistoryConfig, StatsConfig};
pub use snapshot::HistorySnapshot;

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/habitstreak[-dev]/` based on HABITSTREAK_ENV.
///
/// Set HABITSTREAK_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HABITSTREAK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("habitstreak-dev")
    } else {
        base_dir.join("habitstreak")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
