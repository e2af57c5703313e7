//! Session error types

use crate::core::CodeError;
use thiserror::Error;

/// Errors a game session can produce
///
/// A guess that does not win is not an error; it is an ordinary turn.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A proposed guess or secret failed validation. Recovered by re-prompting.
    #[error("invalid code: {0}")]
    InvalidCode(#[from] CodeError),

    /// The solver ran out of consistent candidates before winning.
    #[error("no candidate codes remain after {turns} turn(s); the feedback was inconsistent")]
    CandidateSpaceExhausted { turns: usize },

    /// The input collaborator closed before the session reached a terminal state.
    #[error("input closed before the session finished")]
    InputClosed,

    /// A guess was submitted after the session ended.
    #[error("the session is already over")]
    GameOver,

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
