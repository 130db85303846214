//! Blocking countdown with live progress rendering.
//!
//! Drives a `CountdownEngine` in a sleep-and-poll cycle: each pass ticks the
//! engine, redraws the progress line in place, and polls the keyboard for an
//! interrupt (Esc, `q`, or Ctrl+C). The terminal is in raw mode only while
//! the countdown runs; the guard's `Drop` restores it on every exit path,
//! including errors.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use tomate_core::error::Result;
use tomate_core::{CountdownEngine, CountdownOutcome};

/// Keyboard poll interval; also paces the render loop.
const POLL_INTERVAL: Duration = Duration::from_millis(100);
const BAR_WIDTH: usize = 30;

struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        disable_raw_mode().ok();
    }
}

/// Run a countdown of `duration_secs`, rendering progress until it either
/// elapses or the user cancels.
///
/// # Errors
/// Returns an error only on terminal I/O failure; interruption is an
/// ordinary outcome.
pub fn run(duration_secs: u64, label: &str) -> Result<CountdownOutcome> {
    println!("\n{label} session -- {} minutes", duration_secs / 60);
    println!("Press Esc or q to stop\n");

    let mut engine = CountdownEngine::new(duration_secs);
    engine.start();
    let outcome = drive(&mut engine)?;

    clear_line(&mut io::stdout())?;
    match outcome {
        CountdownOutcome::Completed => println!("{} - Complete!", format_clock(0)),
        CountdownOutcome::Interrupted => println!("Session stopped early"),
    }
    Ok(outcome)
}

/// The poll loop proper; raw mode is held exactly as long as this runs.
fn drive(engine: &mut CountdownEngine) -> Result<CountdownOutcome> {
    let _guard = RawModeGuard::acquire()?;
    let mut out = io::stdout();
    loop {
        if let Some(outcome) = engine.tick() {
            return Ok(outcome);
        }
        render(&mut out, engine)?;
        if interrupt_requested()? {
            engine.interrupt();
        }
    }
}

/// Block up to `POLL_INTERVAL` for a key; true if it was a cancel key.
fn interrupt_requested() -> Result<bool> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(false);
    }
    if let Event::Key(key) = event::read()? {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }
        let ctrl_c =
            key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if ctrl_c || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            return Ok(true);
        }
    }
    Ok(false)
}

fn render(out: &mut impl Write, engine: &CountdownEngine) -> Result<()> {
    let progress = engine.progress();
    let filled = ((BAR_WIDTH as f64 * progress) as usize).min(BAR_WIDTH);
    let bar = "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled);
    write!(
        out,
        "\r{} [{}] {:3}%",
        format_clock(engine.remaining_secs()),
        bar,
        (progress * 100.0) as u32
    )?;
    out.flush()?;
    Ok(())
}

fn clear_line(out: &mut impl Write) -> Result<()> {
    write!(out, "\r{}\r", " ".repeat(60))?;
    out.flush()?;
    Ok(())
}

/// Format seconds as MM:SS.
fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
