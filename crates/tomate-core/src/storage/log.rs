//! Flat append-only session storage and statistics.
//!
//! Completed sessions are stored one JSON object per line in
//! `sessions.jsonl`. The file is only ever appended to; existing records are
//! never rewritten. Statistics are recomputed from the full record collection
//! on each request.
//!
//! "This week" means the ISO calendar week: Monday 00:00 local time, not a
//! rolling 7-day window.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Duration, Local, Utc};
use serde::Serialize;

use crate::error::StoreError;
use crate::session::{IntervalKind, SessionRecord};

use super::data_dir;

/// Which record kinds participate in statistics.
///
/// Work-only by default: breaks are bookkeeping, not productivity. The
/// `stats.include_breaks` config key switches to `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsScope {
    WorkOnly,
    All,
}

impl StatsScope {
    fn includes(self, kind: IntervalKind) -> bool {
        match self {
            StatsScope::All => true,
            StatsScope::WorkOnly => kind == IntervalKind::Work,
        }
    }
}

/// Aggregate session statistics for the stats display.
#[derive(Debug, Clone, Serialize, Default)]
pub struct Stats {
    pub today_sessions: u64,
    pub today_minutes: u64,
    pub week_sessions: u64,
    pub week_minutes: u64,
}

/// Append-only JSON Lines log of completed sessions.
pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    /// Open the log at `~/.config/tomate/sessions.jsonl`.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, crate::error::CoreError> {
        Ok(Self::open_at(data_dir()?.join("sessions.jsonl")))
    }

    /// Open the log at an explicit path (`--data-dir`, tests).
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record to the log.
    ///
    /// # Errors
    /// Returns an error if the record cannot be encoded or the file cannot
    /// be opened or written. Previously stored records are untouched either
    /// way.
    pub fn append(&self, record: &SessionRecord) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StoreError::OpenFailed {
                path: self.path.clone(),
                source,
            })?;
        file.write_all(line.as_bytes())
            .map_err(|source| StoreError::AppendFailed {
                path: self.path.clone(),
                source,
            })?;
        Ok(())
    }

    /// Load every record in the log, oldest first.
    ///
    /// A missing file is the bootstrap case and yields an empty collection.
    ///
    /// # Errors
    /// Returns `StoreError::Corrupt` if any line fails to parse -- a broken
    /// log is reported, never silently skipped.
    pub fn load(&self) -> Result<Vec<SessionRecord>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::OpenFailed {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let mut records = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(line).map_err(|e| StoreError::Corrupt {
                path: self.path.clone(),
                line: index + 1,
                message: e.to_string(),
            })?;
            records.push(record);
        }
        Ok(records)
    }

    /// Count records completed on or after `cutoff`.
    pub fn count_since(
        &self,
        cutoff: DateTime<Utc>,
        scope: StatsScope,
    ) -> Result<u64, StoreError> {
        Ok(self
            .load()?
            .iter()
            .filter(|r| scope.includes(r.kind) && r.completed_at >= cutoff)
            .count() as u64)
    }

    /// Count records completed since the start of the local day.
    pub fn count_today(&self, scope: StatsScope) -> Result<u64, StoreError> {
        self.count_since(day_start(Local::now()), scope)
    }

    /// Count records completed since Monday 00:00 local time.
    pub fn count_this_week(&self, scope: StatsScope) -> Result<u64, StoreError> {
        self.count_since(week_start(Local::now()), scope)
    }

    /// Today/this-week counts and minutes in one pass over the log.
    pub fn stats(&self, scope: StatsScope) -> Result<Stats, StoreError> {
        let now = Local::now();
        let today = day_start(now);
        let week = week_start(now);

        let mut stats = Stats::default();
        for record in self.load()? {
            if !scope.includes(record.kind) {
                continue;
            }
            let minutes = record.duration_secs / 60;
            if record.completed_at >= week {
                stats.week_sessions += 1;
                stats.week_minutes += minutes;
            }
            if record.completed_at >= today {
                stats.today_sessions += 1;
                stats.today_minutes += minutes;
            }
        }
        Ok(stats)
    }
}

/// Start of the local day containing `at`, in UTC.
pub fn day_start(at: DateTime<Local>) -> DateTime<Utc> {
    at.date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.and_local_timezone(Local).earliest())
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| at.with_timezone(&Utc))
}

/// Start of the ISO week containing `at` (Monday 00:00 local), in UTC.
pub fn week_start(at: DateTime<Local>) -> DateTime<Utc> {
    let monday = at - Duration::days(i64::from(at.weekday().num_days_from_monday()));
    day_start(monday)
}
