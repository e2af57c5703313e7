//! Session configuration

use std::time::Duration;

/// Turns allowed per session
pub const DEFAULT_MAX_TURNS: usize = 12;

/// Pause after each automated turn in the interactive shell
pub const DEFAULT_SOLVER_DELAY: Duration = Duration::from_millis(1000);

/// Configuration shared by both session variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Maximum number of scored turns before the session is exhausted
    pub max_turns: usize,
    /// Pause after each automated guess, for human-observable pacing
    pub solver_delay: Duration,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_turns: usize) -> Self {
        Self {
            max_turns,
            solver_delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn with_solver_delay(mut self, delay: Duration) -> Self {
        self.solver_delay = delay;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TURNS)
    }
}
