//! Game sessions for both roles
//!
//! Sessions own their secret, history and (for the solver) candidate space.
//! Nothing is shared between sessions.

pub mod config;
mod error;
pub mod io;
pub mod runner;
mod session;

pub use config::{DEFAULT_MAX_TURNS, GameConfig};
pub use error::SessionError;
pub use io::{CodeSource, ScriptedSource, SessionObserver, SilentObserver};
pub use runner::{
    establish_secret, play_codebreaker, play_solver, run_computer_guesser, run_human_guesser,
};
pub use session::{CodebreakerGame, Outcome, SessionState, SolverGame, Turn};
