mod config;
mod log;

pub use config::Config;
pub use log::{day_start, week_start, SessionLog, Stats, StatsScope};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/tomate/`, creating it if needed.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("tomate");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
