//! Interactive menu loop.
//!
//! The loop owns the session log and configuration for its whole lifetime
//! and is the only writer: countdown runs hand their outcome back here, and
//! this is the single place records are constructed and appended. A store
//! failure loses at most the just-completed session; the loop itself stays
//! alive.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tomate_core::error::Result;
use tomate_core::{
    Config, CountdownOutcome, IntervalKind, MenuAction, SessionLog, SessionRecord, Stats,
};

use crate::countdown;

pub fn run(data_dir: Option<PathBuf>) -> Result<()> {
    let (config, log) = match data_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let log = SessionLog::open_at(dir.join("sessions.jsonl"));
            (Config::load_from(&dir), log)
        }
        None => (Config::load(), SessionLog::open()?),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: {e}; using default configuration");
            Config::default()
        }
    };

    println!("========================================");
    println!("  TOMATE");
    println!("========================================");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print_menu(&config)?;
        let Some(line) = read_line(&mut input)? else {
            // stdin closed; nothing more to dispatch.
            break;
        };
        let Some(action) = MenuAction::parse(&line) else {
            println!("Invalid choice. Try again.");
            continue;
        };
        match action {
            MenuAction::FullPomodoro => run_full_pomodoro(&config, &log, &mut input)?,
            MenuAction::WorkOnly => {
                run_interval(&config, &log, IntervalKind::Work)?;
                show_stats(&config, &log);
            }
            MenuAction::BreakOnly => {
                run_interval(&config, &log, IntervalKind::Break)?;
            }
            MenuAction::Stats => show_stats(&config, &log),
            MenuAction::Quit => {
                println!("\nGoodbye! Keep being productive.");
                break;
            }
        }
    }
    Ok(())
}

/// Work countdown, then -- only if the work interval completed -- a break
/// countdown. Each completed interval appends its own record.
fn run_full_pomodoro(
    config: &Config,
    log: &SessionLog,
    input: &mut impl BufRead,
) -> Result<()> {
    let outcome = run_interval(config, log, IntervalKind::Work)?;
    if outcome == CountdownOutcome::Completed {
        println!("\nWork session complete! Time for a break.");
        print!("Press Enter to start the break... ");
        io::stdout().flush()?;
        let mut pause = String::new();
        input.read_line(&mut pause)?;

        let break_outcome = run_interval(config, log, IntervalKind::Break)?;
        if break_outcome == CountdownOutcome::Completed {
            println!("\nBreak over! Ready for another round?");
        }
    }
    show_stats(config, log);
    Ok(())
}

/// Run one countdown and append a record if (and only if) it completed.
fn run_interval(
    config: &Config,
    log: &SessionLog,
    kind: IntervalKind,
) -> Result<CountdownOutcome> {
    let duration_secs = match kind {
        IntervalKind::Work => config.intervals.work_secs,
        IntervalKind::Break => config.intervals.break_secs,
    };
    let outcome = countdown::run(duration_secs, kind.label())?;
    if let Some(record) = SessionRecord::from_outcome(outcome, kind, duration_secs) {
        if let Err(e) = log.append(&record) {
            // The session is lost; the menu keeps running.
            eprintln!("error: {e}");
        }
    }
    Ok(outcome)
}

fn show_stats(config: &Config, log: &SessionLog) {
    match log.stats(config.stats_scope()) {
        Ok(stats) => print_stats(&stats),
        Err(e) => eprintln!("error: {e}"),
    }
}

fn print_stats(stats: &Stats) {
    println!("\nYour Pomodoro stats");
    println!("------------------------------");
    println!(
        "Today:     {} sessions ({} min)",
        stats.today_sessions, stats.today_minutes
    );
    println!(
        "This week: {} sessions ({} min)",
        stats.week_sessions, stats.week_minutes
    );
    println!("------------------------------");
}

fn print_menu(config: &Config) -> Result<()> {
    let work_min = config.intervals.work_secs / 60;
    let break_min = config.intervals.break_secs / 60;
    println!("\nOptions:");
    println!("  [s] Start Pomodoro ({work_min} min work + {break_min} min break)");
    println!("  [w] Work session only ({work_min} min)");
    println!("  [b] Break only ({break_min} min)");
    println!("  [t] View stats");
    println!("  [q] Quit");
    print!("\nChoice: ");
    io::stdout().flush()?;
    Ok(())
}

/// Read one line of menu input; `None` on end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}
