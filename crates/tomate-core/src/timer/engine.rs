//! Countdown engine implementation.
//!
//! The engine is a wall-clock-based state machine. It does not use internal
//! threads -- the caller is responsible for calling `tick()` periodically and
//! for rendering progress between ticks.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> (Completed | Interrupted)
//! ```
//!
//! Both terminal states are ordinary outcomes: interruption is how a user
//! cancels a run, not an error.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Idle,
    Running,
    Completed,
    Interrupted,
}

/// Terminal outcome of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    Completed,
    Interrupted,
}

/// Core countdown engine.
///
/// Operates on wall-clock deltas -- no internal thread. Elapsed time is
/// measured between `tick()` calls, so a slow poll cycle cannot make the
/// countdown run long.
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    total_ms: u64,
    /// Remaining time in milliseconds.
    remaining_ms: u64,
    state: CountdownState,
    /// Timestamp (ms since epoch) of the last start/tick.
    last_tick_epoch_ms: Option<u64>,
}

impl CountdownEngine {
    /// Create an engine for a countdown of `duration_secs`, in `Idle`.
    pub fn new(duration_secs: u64) -> Self {
        let total_ms = duration_secs.saturating_mul(1000);
        Self {
            total_ms,
            remaining_ms: total_ms,
            state: CountdownState::Idle,
            last_tick_epoch_ms: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> CountdownState {
        self.state
    }

    /// Remaining whole seconds, rounded up so the display only reaches
    /// 00:00 at actual completion.
    pub fn remaining_secs(&self) -> u64 {
        self.remaining_ms.div_ceil(1000)
    }

    /// 0.0 .. 1.0 progress through the countdown.
    pub fn progress(&self) -> f64 {
        if self.total_ms == 0 {
            return 1.0;
        }
        1.0 - (self.remaining_ms as f64 / self.total_ms as f64)
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) {
        if self.state == CountdownState::Idle {
            self.state = CountdownState::Running;
            self.last_tick_epoch_ms = Some(now_ms());
        }
    }

    /// Call periodically while running. Returns the outcome once the
    /// countdown has reached a terminal state.
    pub fn tick(&mut self) -> Option<CountdownOutcome> {
        match self.state {
            CountdownState::Running => {
                self.flush_elapsed();
                if self.remaining_ms == 0 {
                    self.state = CountdownState::Completed;
                    return Some(CountdownOutcome::Completed);
                }
                None
            }
            CountdownState::Completed => Some(CountdownOutcome::Completed),
            CountdownState::Interrupted => Some(CountdownOutcome::Interrupted),
            CountdownState::Idle => None,
        }
    }

    /// Cancel a running countdown. The caller never records an interrupted
    /// run.
    pub fn interrupt(&mut self) {
        if self.state == CountdownState::Running {
            self.flush_elapsed();
            self.state = CountdownState::Interrupted;
            self.last_tick_epoch_ms = None;
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn flush_elapsed(&mut self) {
        if let Some(last) = self.last_tick_epoch_ms {
            let now = now_ms();
            let elapsed = now.saturating_sub(last);
            self.remaining_ms = self.remaining_ms.saturating_sub(elapsed);
            self.last_tick_epoch_ms = Some(now);
        }
    }

    #[cfg(test)]
    fn force_elapse(&mut self, ms: u64) {
        self.remaining_ms = self.remaining_ms.saturating_sub(ms);
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
