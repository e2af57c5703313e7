//! Main Mastermind solver interface

use super::candidates::CandidateSpace;
use super::strategy::Strategy;
use crate::core::{Code, Feedback};
use log::debug;

/// Automated code breaker
///
/// Owns the candidate space for one session and a strategy to draw guesses from it.
pub struct Solver<S: Strategy> {
    strategy: S,
    space: CandidateSpace,
}

impl<S: Strategy> Solver<S> {
    /// Create a solver over the full code space
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self::with_space(strategy, CandidateSpace::full())
    }

    /// Create a solver over an explicit candidate space
    #[must_use]
    pub const fn with_space(strategy: S, space: CandidateSpace) -> Self {
        Self { strategy, space }
    }

    /// Draw the next guess from the remaining candidates
    ///
    /// Returns `None` if no candidates remain.
    pub fn next_guess(&mut self) -> Option<Code> {
        self.strategy.select_guess(self.space.codes()).copied()
    }

    /// Apply feedback observed for `guess`, returning the number of candidates left
    pub fn observe(&mut self, guess: &Code, feedback: Feedback) -> usize {
        let before = self.space.len();
        let removed = self.space.retain_consistent(guess, feedback);
        debug!(
            "Guess {guess} scored ({}, {}): {before} -> {} candidates ({removed} removed)",
            feedback.exact(),
            feedback.color_only(),
            self.space.len()
        );
        self.space.len()
    }

    /// Count how many candidates remain
    #[must_use]
    pub fn count_candidates(&self) -> usize {
        self.space.len()
    }

    /// Get the current candidates
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSpace {
        &self.space
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CODE_SPACE_SIZE;
    use crate::solver::strategy::RandomStrategy;

    fn code(symbols: [u8; 4]) -> Code {
        Code::new(&symbols).unwrap()
    }

    /// Always plays the first remaining candidate
    struct FirstCandidate;

    impl Strategy for FirstCandidate {
        fn select_guess<'a>(&mut self, candidates: &'a [Code]) -> Option<&'a Code> {
            candidates.first()
        }
    }

    #[test]
    fn new_solver_starts_with_full_space() {
        let solver = Solver::new(FirstCandidate);
        assert_eq!(solver.count_candidates(), CODE_SPACE_SIZE);
    }

    #[test]
    fn next_guess_comes_from_candidates() {
        let mut solver = Solver::new(RandomStrategy::seeded(11));
        let guess = solver.next_guess().unwrap();
        assert!(solver.candidates().contains(&guess));
    }

    #[test]
    fn observe_shrinks_and_keeps_secret() {
        let secret = code([4, 2, 6, 2]);
        let mut solver = Solver::new(FirstCandidate);

        let guess = solver.next_guess().unwrap();
        let feedback = Feedback::calculate(&guess, &secret);
        let remaining = solver.observe(&guess, feedback);

        assert!(remaining < CODE_SPACE_SIZE);
        assert!(solver.candidates().contains(&secret));
        assert!(!solver.candidates().contains(&guess));
    }

    #[test]
    fn next_guess_returns_none_when_no_candidates() {
        let mut solver = Solver::with_space(
            FirstCandidate,
            CandidateSpace::from_codes(vec![code([1, 1, 1, 1])]),
        );

        // Claim 1111 has no shared colours with itself: impossible feedback
        let guess = code([1, 1, 1, 1]);
        let remaining = solver.observe(&guess, Feedback::new(0, 0).unwrap());

        assert_eq!(remaining, 0);
        assert!(solver.next_guess().is_none());
    }

    #[test]
    fn first_candidate_solver_finds_secret() {
        let secret = code([6, 6, 5, 1]);
        let mut solver = Solver::new(FirstCandidate);

        for _ in 0..12 {
            let guess = solver.next_guess().unwrap();
            let feedback = Feedback::calculate(&guess, &secret);
            if feedback.is_perfect() {
                assert_eq!(guess, secret);
                return;
            }
            solver.observe(&guess, feedback);
        }
        panic!("consistent-candidate play should solve within 12 turns");
    }
}
