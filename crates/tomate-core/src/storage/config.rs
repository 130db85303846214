//! TOML-based application configuration.
//!
//! Stores the two interval lengths and the stats scope preference.
//! Configuration is stored at `~/.config/tomate/config.toml` (or under the
//! directory passed to `load_from`).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{data_dir, StatsScope};
use crate::error::{ConfigError, Result};
use crate::session::{BREAK_SECS, WORK_SECS};

/// Interval lengths in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalConfig {
    #[serde(default = "default_work_secs")]
    pub work_secs: u64,
    #[serde(default = "default_break_secs")]
    pub break_secs: u64,
}

/// Statistics preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Count break sessions in the stats display as well as work sessions.
    #[serde(default)]
    pub include_breaks: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data dir>/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub intervals: IntervalConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

// Default functions
fn default_work_secs() -> u64 {
    WORK_SECS
}
fn default_break_secs() -> u64 {
    BREAK_SECS
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            work_secs: default_work_secs(),
            break_secs: default_break_secs(),
        }
    }
}

impl Config {
    fn path_in(dir: &Path) -> PathBuf {
        dir.join("config.toml")
    }

    /// Load from `dir/config.toml`, writing the defaults there if the file
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// if the default config cannot be written to disk.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = Self::path_in(dir);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path,
                    message: e.to_string(),
                })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(dir)?;
                Ok(cfg)
            }
        }
    }

    /// Load from the default data directory.
    pub fn load() -> Result<Self> {
        Self::load_from(&data_dir()?)
    }

    /// Persist to `dir/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        let path = Self::path_in(dir);
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// The stats scope implied by this configuration.
    pub fn stats_scope(&self) -> StatsScope {
        if self.stats.include_breaks {
            StatsScope::All
        } else {
            StatsScope::WorkOnly
        }
    }
}
