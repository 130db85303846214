//! Session log integration tests.
//!
//! Exercises the append-only log end to end against a temporary directory:
//! bootstrap, round-trips, cutoff windows, and the count monotonicity
//! property.

use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;
use tempfile::TempDir;
use tomate_core::{
    CountdownOutcome, IntervalKind, SessionLog, SessionRecord, StatsScope, BREAK_SECS, WORK_SECS,
};

fn log_in(dir: &TempDir) -> SessionLog {
    SessionLog::open_at(dir.path().join("sessions.jsonl"))
}

fn work_record(completed_at: DateTime<Utc>) -> SessionRecord {
    SessionRecord {
        kind: IntervalKind::Work,
        completed_at,
        duration_secs: IntervalKind::Work.default_duration_secs(),
    }
}

#[test]
fn empty_store_counts_zero() {
    let dir = TempDir::new().unwrap();
    let log = log_in(&dir);
    assert_eq!(log.count_today(StatsScope::WorkOnly).unwrap(), 0);
    assert_eq!(log.count_this_week(StatsScope::WorkOnly).unwrap(), 0);
}

#[test]
fn one_record_today_counts_one() {
    let dir = TempDir::new().unwrap();
    let log = log_in(&dir);
    log.append(&work_record(Utc::now())).unwrap();
    assert_eq!(log.count_today(StatsScope::WorkOnly).unwrap(), 1);
    assert_eq!(log.count_this_week(StatsScope::WorkOnly).unwrap(), 1);
}

#[test]
fn record_ten_days_ago_is_outside_both_windows() {
    let dir = TempDir::new().unwrap();
    let log = log_in(&dir);
    log.append(&work_record(Utc::now() - Duration::days(10)))
        .unwrap();
    // Ten days back always predates Monday of the current ISO week.
    assert_eq!(log.count_today(StatsScope::WorkOnly).unwrap(), 0);
    assert_eq!(log.count_this_week(StatsScope::WorkOnly).unwrap(), 0);
}

#[test]
fn count_today_is_idempotent_between_appends() {
    let dir = TempDir::new().unwrap();
    let log = log_in(&dir);
    log.append(&work_record(Utc::now())).unwrap();
    let first = log.count_today(StatsScope::WorkOnly).unwrap();
    let second = log.count_today(StatsScope::WorkOnly).unwrap();
    assert_eq!(first, second);
}

#[test]
fn appending_n_records_reloads_n_identical_records() {
    let dir = TempDir::new().unwrap();
    let log = log_in(&dir);
    let base = Utc::now();
    let records: Vec<_> = (0..25)
        .map(|i| work_record(base - Duration::minutes(i * 30)))
        .collect();
    for r in &records {
        log.append(r).unwrap();
    }
    assert_eq!(log.load().unwrap(), records);
}

#[test]
fn work_then_break_round_trip_preserves_order_and_kinds() {
    let dir = TempDir::new().unwrap();
    let log = log_in(&dir);
    let now = Utc::now();
    log.append(&SessionRecord {
        kind: IntervalKind::Work,
        completed_at: now,
        duration_secs: 1500,
    })
    .unwrap();
    log.append(&SessionRecord {
        kind: IntervalKind::Break,
        completed_at: now,
        duration_secs: 300,
    })
    .unwrap();

    let loaded = log.load().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].kind, IntervalKind::Work);
    assert_eq!(loaded[0].duration_secs, 1500);
    assert_eq!(loaded[1].kind, IntervalKind::Break);
    assert_eq!(loaded[1].duration_secs, 300);
}

/// A full Pomodoro is a work countdown then a break countdown; run to
/// completion, each leg appends its own record.
#[test]
fn full_pomodoro_to_completion_appends_work_then_break() {
    let dir = TempDir::new().unwrap();
    let log = log_in(&dir);

    for (kind, duration) in [
        (IntervalKind::Work, WORK_SECS),
        (IntervalKind::Break, BREAK_SECS),
    ] {
        if let Some(record) = SessionRecord::from_outcome(CountdownOutcome::Completed, kind, duration)
        {
            log.append(&record).unwrap();
        }
    }

    let loaded = log.load().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].kind, IntervalKind::Work);
    assert_eq!(loaded[0].duration_secs, WORK_SECS);
    assert_eq!(loaded[1].kind, IntervalKind::Break);
    assert_eq!(loaded[1].duration_secs, BREAK_SECS);
}

#[test]
fn interrupted_countdown_appends_nothing() {
    let dir = TempDir::new().unwrap();
    let log = log_in(&dir);

    if let Some(record) =
        SessionRecord::from_outcome(CountdownOutcome::Interrupted, IntervalKind::Work, WORK_SECS)
    {
        log.append(&record).unwrap();
    }

    assert!(log.load().unwrap().is_empty());
    assert_eq!(log.count_today(StatsScope::All).unwrap(), 0);
}

proptest! {
    /// Moving the cutoff forward can only shrink the count.
    #[test]
    fn count_since_is_monotone_in_the_cutoff(
        offsets_min in prop::collection::vec(0i64..40_000, 0..40),
        cutoff_a_min in 0i64..40_000,
        cutoff_b_min in 0i64..40_000,
    ) {
        let dir = TempDir::new().unwrap();
        let log = log_in(&dir);
        let base = Utc::now();
        for m in &offsets_min {
            log.append(&work_record(base - Duration::minutes(*m))).unwrap();
        }

        let (early, late) = if cutoff_a_min >= cutoff_b_min {
            (cutoff_a_min, cutoff_b_min)
        } else {
            (cutoff_b_min, cutoff_a_min)
        };
        let early_cutoff = base - Duration::minutes(early);
        let late_cutoff = base - Duration::minutes(late);

        let at_early = log.count_since(early_cutoff, StatsScope::All).unwrap();
        let at_late = log.count_since(late_cutoff, StatsScope::All).unwrap();
        prop_assert!(at_early >= at_late);
    }
}
