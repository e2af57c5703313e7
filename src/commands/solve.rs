//! Code solving command
//!
//! Runs the solver against a known secret and returns every turn it played.

use super::simple::parse_digits;
use crate::core::Code;
use crate::game::{GameConfig, Outcome, SessionError, SilentObserver, SolverGame, Turn, play_solver};
use crate::solver::RandomStrategy;

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub seed: Option<u64>,
    pub game: GameConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            seed: None,
            game: GameConfig::default(),
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub secret: Code,
    pub turns: Vec<Turn>,
    pub outcome: Outcome,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.is_win()
    }
}

/// Solve a specific secret with the random-candidate solver
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid code
/// - The solver's candidate space empties before it wins
pub fn solve_code(config: SolveConfig) -> Result<SolveResult, SessionError> {
    let secret = Code::new(&parse_digits(&config.secret))?;
    let strategy = RandomStrategy::from_seed(config.seed);
    let mut game = SolverGame::new(secret, strategy, config.game);

    let outcome = play_solver(&mut game, &mut SilentObserver, config.game.solver_delay)?;

    Ok(SolveResult {
        secret,
        turns: game.history().to_vec(),
        outcome,
    })
}
