//! Drive sessions to completion against collaborators
//!
//! All prompting is done with explicit loops; a persistently invalid input only
//! repeats the prompt, and a closed input ends the session with `InputClosed`.

use super::config::GameConfig;
use super::error::SessionError;
use super::io::{CodeSource, SessionObserver};
use super::session::{CodebreakerGame, Outcome, SessionState, SolverGame};
use crate::core::Code;
use crate::solver::Strategy;
use log::{debug, info};
use rand::Rng;
use std::thread;

/// Ask for a secret until a valid one arrives
///
/// # Errors
///
/// Returns `SessionError::InputClosed` if the source runs dry first, or the
/// source's own error if reading fails.
pub fn establish_secret<C, O>(input: &mut C, observer: &mut O) -> Result<Code, SessionError>
where
    C: CodeSource + ?Sized,
    O: SessionObserver + ?Sized,
{
    loop {
        let raw = input.next_secret()?.ok_or(SessionError::InputClosed)?;
        match Code::new(&raw) {
            Ok(secret) => {
                info!("Secret code accepted");
                observer.on_secret_accepted();
                return Ok(secret);
            }
            Err(e) => {
                debug!("Rejected secret {raw:?}: {e}");
                observer.on_invalid(&e);
            }
        }
    }
}

/// Play a human-guesser session until it ends
///
/// # Errors
///
/// Returns `SessionError::InputClosed` if the source runs dry mid-session, or
/// the source's own error if reading fails.
pub fn play_codebreaker<C, O>(
    game: &mut CodebreakerGame,
    input: &mut C,
    observer: &mut O,
) -> Result<Outcome, SessionError>
where
    C: CodeSource + ?Sized,
    O: SessionObserver + ?Sized,
{
    loop {
        if let Some(outcome) = game.outcome() {
            observer.on_finish(&outcome);
            return Ok(outcome);
        }

        let raw = input
            .next_guess(game.turns_used() + 1)?
            .ok_or(SessionError::InputClosed)?;

        match game.guess(&raw) {
            Ok(turn) => observer.on_turn(&turn),
            Err(SessionError::InvalidCode(e)) => {
                debug!("Rejected guess {raw:?}: {e}");
                observer.on_invalid(&e);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Play a solver session until it ends
///
/// Sleeps for `delay` after every turn that does not end the session.
///
/// # Errors
///
/// Returns `SessionError::CandidateSpaceExhausted` if the solver runs out of
/// consistent candidates. The observer still receives the `Failed` outcome first.
pub fn play_solver<S, O>(
    game: &mut SolverGame<S>,
    observer: &mut O,
    delay: std::time::Duration,
) -> Result<Outcome, SessionError>
where
    S: Strategy,
    O: SessionObserver + ?Sized,
{
    loop {
        if let Some(outcome) = game.outcome() {
            observer.on_finish(&outcome);
            return match outcome {
                Outcome::Failed { turns, .. } => {
                    Err(SessionError::CandidateSpaceExhausted { turns })
                }
                _ => Ok(outcome),
            };
        }

        match game.step() {
            Ok(turn) => observer.on_turn(&turn),
            // Nothing left to draw: the session is now `Failed`, reported above
            Err(SessionError::CandidateSpaceExhausted { .. }) => continue,
            Err(e) => return Err(e),
        }

        if game.state() == SessionState::InProgress && !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

/// Human guesses a random computer secret
///
/// # Errors
///
/// See [`play_codebreaker`].
pub fn run_human_guesser<R, C, O>(
    rng: &mut R,
    config: GameConfig,
    input: &mut C,
    observer: &mut O,
) -> Result<Outcome, SessionError>
where
    R: Rng,
    C: CodeSource + ?Sized,
    O: SessionObserver + ?Sized,
{
    let mut game = CodebreakerGame::random(rng, config);
    play_codebreaker(&mut game, input, observer)
}

/// Solver guesses a secret supplied by the human
///
/// # Errors
///
/// See [`establish_secret`] and [`play_solver`].
pub fn run_computer_guesser<S, C, O>(
    strategy: S,
    config: GameConfig,
    input: &mut C,
    observer: &mut O,
) -> Result<Outcome, SessionError>
where
    S: Strategy,
    C: CodeSource + ?Sized,
    O: SessionObserver + ?Sized,
{
    let secret = establish_secret(input, observer)?;
    let mut game = SolverGame::new(secret, strategy, config);
    play_solver(&mut game, observer, config.solver_delay)
}
