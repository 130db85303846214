//! Countdown timer engine.

mod engine;

pub use engine::{CountdownEngine, CountdownOutcome, CountdownState};
