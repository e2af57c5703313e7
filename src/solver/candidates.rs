//! Candidate space: every code still consistent with the feedback seen so far

use crate::core::{Code, Feedback};

/// Set of codes consistent with all observed feedback in one solver session
///
/// Starts with all 1296 codes and only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSpace {
    codes: Vec<Code>,
}

impl CandidateSpace {
    /// The full space of 6^4 codes, in lexicographic order
    #[must_use]
    pub fn full() -> Self {
        Self { codes: Code::all() }
    }

    /// Build a space from an explicit list of codes
    #[must_use]
    pub const fn from_codes(codes: Vec<Code>) -> Self {
        Self { codes }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.contains(code)
    }

    /// Current candidates as a slice
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Return the subspace consistent with `observed` feedback for `guess`
    #[must_use]
    pub fn filter(&self, guess: &Code, observed: Feedback) -> Self {
        Self {
            codes: filter_candidates(&self.codes, guess, observed),
        }
    }

    /// Shrink this space in place; returns how many candidates were removed
    pub fn retain_consistent(&mut self, guess: &Code, observed: Feedback) -> usize {
        let before = self.codes.len();
        self.codes
            .retain(|candidate| Feedback::calculate(guess, candidate) == observed);
        before - self.codes.len()
    }
}

impl Default for CandidateSpace {
    fn default() -> Self {
        Self::full()
    }
}

/// Keep exactly the candidates that would have produced `observed` for `guess`
///
/// If `observed` was computed against the true secret, the secret is always kept:
/// `calculate(guess, secret) == observed` by definition.
#[must_use]
pub fn filter_candidates(candidates: &[Code], guess: &Code, observed: Feedback) -> Vec<Code> {
    candidates
        .iter()
        .filter(|&candidate| Feedback::calculate(guess, candidate) == observed)
        .copied()
        .collect()
}
