//! Game sessions
//!
//! Two step-wise state machines over a fixed secret:
//! - `CodebreakerGame`: a human supplies guesses against a computer secret
//! - `SolverGame`: the solver guesses a human secret
//!
//! Both move `InProgress -> Won | Exhausted`; the solver can also end in `Failed`
//! if its candidate space empties.

use super::config::GameConfig;
use super::error::SessionError;
use crate::core::{Code, Feedback};
use crate::solver::{CandidateSpace, Solver, Strategy};
use log::{info, warn};
use rand::Rng;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Won,
    Exhausted,
    Failed,
}

/// One scored turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// 1-based turn number
    pub number: usize,
    pub guess: Code,
    pub feedback: Feedback,
    /// Candidates left after filtering (solver sessions only)
    pub remaining: Option<usize>,
}

/// Terminal result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { code: Code, turns: usize },
    Exhausted { secret: Code },
    Failed { secret: Code, turns: usize },
}

impl Outcome {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

/// A session with no turns to play is over before it starts
const fn initial_state(max_turns: usize) -> SessionState {
    if max_turns == 0 {
        SessionState::Exhausted
    } else {
        SessionState::InProgress
    }
}

fn outcome_for(state: SessionState, secret: Code, history: &[Turn]) -> Option<Outcome> {
    match state {
        SessionState::InProgress => None,
        SessionState::Won => Some(Outcome::Won {
            code: secret,
            turns: history.len(),
        }),
        SessionState::Exhausted => Some(Outcome::Exhausted { secret }),
        SessionState::Failed => Some(Outcome::Failed {
            secret,
            turns: history.len(),
        }),
    }
}

/// Human guesses a computer-generated secret
#[derive(Debug, Clone)]
pub struct CodebreakerGame {
    secret: Code,
    max_turns: usize,
    history: Vec<Turn>,
    state: SessionState,
}

impl CodebreakerGame {
    #[must_use]
    pub const fn new(secret: Code, config: GameConfig) -> Self {
        Self {
            secret,
            max_turns: config.max_turns,
            history: Vec::new(),
            state: initial_state(config.max_turns),
        }
    }

    /// Start a session against a freshly drawn random secret
    pub fn random<R: Rng>(rng: &mut R, config: GameConfig) -> Self {
        let game = Self::new(Code::random(rng), config);
        info!("Computer generated a secret code");
        game
    }

    /// Submit a raw guess
    ///
    /// An invalid guess is rejected without consuming a turn.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidCode` if `raw` is not a valid code, or
    /// `SessionError::GameOver` if the session already ended.
    pub fn guess(&mut self, raw: &[u8]) -> Result<Turn, SessionError> {
        if self.state != SessionState::InProgress {
            return Err(SessionError::GameOver);
        }

        let guess = Code::new(raw)?;
        let feedback = Feedback::calculate(&guess, &self.secret);
        let turn = Turn {
            number: self.history.len() + 1,
            guess,
            feedback,
            remaining: None,
        };
        self.history.push(turn);

        if feedback.is_perfect() {
            self.state = SessionState::Won;
            info!("Secret found on turn {}", turn.number);
        } else if self.history.len() >= self.max_turns {
            self.state = SessionState::Exhausted;
            info!("All {} turns used", self.max_turns);
        }

        Ok(turn)
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Terminal result, or `None` while the session is in progress
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        outcome_for(self.state, self.secret, &self.history)
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub fn turns_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn turns_left(&self) -> usize {
        self.max_turns.saturating_sub(self.history.len())
    }

    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }
}

/// Solver guesses a human-supplied secret
pub struct SolverGame<S: Strategy> {
    secret: Code,
    solver: Solver<S>,
    max_turns: usize,
    history: Vec<Turn>,
    state: SessionState,
}

impl<S: Strategy> SolverGame<S> {
    #[must_use]
    pub fn new(secret: Code, strategy: S, config: GameConfig) -> Self {
        Self::with_space(secret, strategy, CandidateSpace::full(), config)
    }

    /// Start from an explicit candidate space instead of all 1296 codes
    #[must_use]
    pub const fn with_space(
        secret: Code,
        strategy: S,
        space: CandidateSpace,
        config: GameConfig,
    ) -> Self {
        Self {
            secret,
            solver: Solver::with_space(strategy, space),
            max_turns: config.max_turns,
            history: Vec::new(),
            state: initial_state(config.max_turns),
        }
    }

    /// Play one automated turn
    ///
    /// If filtering empties the candidate space the turn is still returned, and
    /// the session moves to `Failed`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::GameOver` if the session already ended, or
    /// `SessionError::CandidateSpaceExhausted` if there is nothing left to guess.
    pub fn step(&mut self) -> Result<Turn, SessionError> {
        if self.state != SessionState::InProgress {
            return Err(SessionError::GameOver);
        }

        let Some(guess) = self.solver.next_guess() else {
            self.state = SessionState::Failed;
            return Err(SessionError::CandidateSpaceExhausted {
                turns: self.history.len(),
            });
        };

        let feedback = Feedback::calculate(&guess, &self.secret);
        let remaining = if feedback.is_perfect() {
            self.solver.count_candidates()
        } else {
            self.solver.observe(&guess, feedback)
        };

        let turn = Turn {
            number: self.history.len() + 1,
            guess,
            feedback,
            remaining: Some(remaining),
        };
        self.history.push(turn);

        if feedback.is_perfect() {
            self.state = SessionState::Won;
            info!("Solver found the secret on turn {}", turn.number);
        } else if remaining == 0 {
            self.state = SessionState::Failed;
            warn!("Candidate space emptied on turn {}", turn.number);
        } else if self.history.len() >= self.max_turns {
            self.state = SessionState::Exhausted;
            info!("Solver used all {} turns", self.max_turns);
        }

        Ok(turn)
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Terminal result, or `None` while the session is in progress
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        outcome_for(self.state, self.secret, &self.history)
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub fn count_candidates(&self) -> usize {
        self.solver.count_candidates()
    }
}
