//! Session records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::CountdownOutcome;

/// Default work interval length in seconds (25 minutes).
pub const WORK_SECS: u64 = 1500;
/// Default break interval length in seconds (5 minutes).
pub const BREAK_SECS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalKind {
    Work,
    Break,
}

impl IntervalKind {
    /// Default countdown length for this kind.
    pub fn default_duration_secs(self) -> u64 {
        match self {
            IntervalKind::Work => WORK_SECS,
            IntervalKind::Break => BREAK_SECS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IntervalKind::Work => "Work",
            IntervalKind::Break => "Break",
        }
    }
}

/// One fully completed work or break interval.
///
/// A record only exists once its countdown has elapsed -- interrupted runs
/// never produce one -- and it is never mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub kind: IntervalKind,
    pub completed_at: DateTime<Utc>,
    pub duration_secs: u64,
}

impl SessionRecord {
    /// Build a record for a countdown of `kind` that just elapsed.
    pub fn completed_now(kind: IntervalKind, duration_secs: u64) -> Self {
        Self {
            kind,
            completed_at: Utc::now(),
            duration_secs,
        }
    }

    /// The record a finished countdown produces: exactly one for a completed
    /// run, none for an interrupted one.
    pub fn from_outcome(
        outcome: CountdownOutcome,
        kind: IntervalKind,
        duration_secs: u64,
    ) -> Option<Self> {
        match outcome {
            CountdownOutcome::Completed => Some(Self::completed_now(kind, duration_secs)),
            CountdownOutcome::Interrupted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_durations() {
        assert_eq!(IntervalKind::Work.default_duration_secs(), 1500);
        assert_eq!(IntervalKind::Break.default_duration_secs(), 300);
    }

    #[test]
    fn completed_now_carries_kind_and_duration() {
        let record = SessionRecord::completed_now(IntervalKind::Work, WORK_SECS);
        assert_eq!(record.kind, IntervalKind::Work);
        assert_eq!(record.duration_secs, 1500);
    }

    #[test]
    fn completed_outcome_yields_exactly_one_record() {
        let record =
            SessionRecord::from_outcome(CountdownOutcome::Completed, IntervalKind::Work, WORK_SECS)
                .unwrap();
        assert_eq!(record.kind, IntervalKind::Work);
        assert_eq!(record.duration_secs, WORK_SECS);
    }

    #[test]
    fn interrupted_outcome_yields_no_record() {
        let record = SessionRecord::from_outcome(
            CountdownOutcome::Interrupted,
            IntervalKind::Work,
            WORK_SECS,
        );
        assert!(record.is_none());
    }

    #[test]
    fn kind_serializes_lowercase() {
        let record = SessionRecord::completed_now(IntervalKind::Break, BREAK_SECS);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"kind\":\"break\""));
        let parsed: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
