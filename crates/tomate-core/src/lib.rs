//! # Tomate Core Library
//!
//! Core logic for the Tomate command-line Pomodoro timer. The interactive
//! binary in `tomate-cli` is a thin rendering and input layer over this crate.
//!
//! ## Key Components
//!
//! - [`CountdownEngine`]: a wall-clock-based countdown state machine; the
//!   caller invokes `tick()` periodically and renders progress between ticks
//! - [`SessionLog`]: flat append-only JSON Lines storage for completed
//!   sessions, plus today/this-week statistics
//! - [`Config`]: TOML-based interval lengths and stats preferences
//! - [`MenuAction`]: the finite mapping from menu keys to dispatchable actions

pub mod error;
pub mod menu;
pub mod session;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, StoreError};
pub use menu::MenuAction;
pub use session::{IntervalKind, SessionRecord, BREAK_SECS, WORK_SECS};
pub use storage::{Config, SessionLog, Stats, StatsScope};
pub use timer::{CountdownEngine, CountdownOutcome, CountdownState};
