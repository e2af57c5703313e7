//! Collaborator seams between a session and whatever drives it
//!
//! The core never parses or prints text. A `CodeSource` hands it raw symbols,
//! a `SessionObserver` receives each scored turn and the terminal result.

use super::error::SessionError;
use super::session::{Outcome, Turn};
use crate::core::CodeError;
use std::collections::VecDeque;

/// Supplies raw guesses and secrets, already parsed into symbols
pub trait CodeSource {
    /// Raw guess for the given 1-based turn, or `None` if input is closed
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input fails to read.
    fn next_guess(&mut self, turn: usize) -> Result<Option<Vec<u8>>, SessionError>;

    /// Raw secret for a solver session, or `None` if input is closed
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input fails to read.
    fn next_secret(&mut self) -> Result<Option<Vec<u8>>, SessionError>;
}

/// Receives session events
pub trait SessionObserver {
    fn on_turn(&mut self, turn: &Turn);

    fn on_finish(&mut self, outcome: &Outcome);

    /// A proposed guess or secret was rejected; the same turn will be retried
    fn on_invalid(&mut self, _error: &CodeError) {}

    /// A human secret passed validation
    fn on_secret_accepted(&mut self) {}
}

/// A `CodeSource` that replays a fixed script
///
/// Guesses and secrets are drawn from the same queue, in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    inputs: VecDeque<Vec<u8>>,
}

impl ScriptedSource {
    #[must_use]
    pub fn new<I, C>(inputs: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Vec<u8>>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl CodeSource for ScriptedSource {
    fn next_guess(&mut self, _turn: usize) -> Result<Option<Vec<u8>>, SessionError> {
        Ok(self.inputs.pop_front())
    }

    fn next_secret(&mut self) -> Result<Option<Vec<u8>>, SessionError> {
        Ok(self.inputs.pop_front())
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl SessionObserver for SilentObserver {
    fn on_turn(&mut self, _turn: &Turn) {}

    fn on_finish(&mut self, _outcome: &Outcome) {}
}
