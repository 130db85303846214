//! Menu input mapping.
//!
//! Each menu key maps to a tagged action variant so the dispatch loop can
//! match exhaustively, with unrecognized input falling through to a
//! re-prompt.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// `s` -- work countdown followed by a break countdown.
    FullPomodoro,
    /// `w` -- work countdown only.
    WorkOnly,
    /// `b` -- break countdown only.
    BreakOnly,
    /// `t` -- today/this-week session stats.
    Stats,
    /// `q` -- leave the menu loop.
    Quit,
}

impl MenuAction {
    /// Map one line of menu input to an action. `None` means re-prompt.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "s" => Some(Self::FullPomodoro),
            "w" => Some(Self::WorkOnly),
            "b" => Some(Self::BreakOnly),
            "t" => Some(Self::Stats),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}
