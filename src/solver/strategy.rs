//! Guess selection strategies
//!
//! Defines the Strategy trait and the uniform random policy the solver plays with.

use crate::core::Code;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// A strategy for picking the next guess from the current candidates
pub trait Strategy {
    /// Select a guess from `candidates`
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'a>(&mut self, candidates: &'a [Code]) -> Option<&'a Code>;
}

impl<S: Strategy + ?Sized> Strategy for &mut S {
    fn select_guess<'a>(&mut self, candidates: &'a [Code]) -> Option<&'a Code> {
        (**self).select_guess(candidates)
    }
}

/// Random strategy
///
/// Draws uniformly from whatever candidates remain, fresh every turn. No attempt
/// is made to pick an information-optimal guess.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    #[must_use]
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomStrategy<StdRng> {
    /// Reproducible strategy for a given seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is given, otherwise seeded from the OS
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(|| Self::with_rng(StdRng::from_os_rng()), Self::seeded)
    }
}

impl Default for RandomStrategy<StdRng> {
    fn default() -> Self {
        Self::from_seed(None)
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn select_guess<'a>(&mut self, candidates: &'a [Code]) -> Option<&'a Code> {
        candidates.choose(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(symbols: [u8; 4]) -> Code {
        Code::new(&symbols).unwrap()
    }

    #[test]
    fn random_strategy_selects_from_candidates() {
        let candidates = vec![code([1, 2, 3, 4]), code([2, 2, 2, 2]), code([6, 5, 4, 3])];
        let mut strategy = RandomStrategy::seeded(1);

        for _ in 0..50 {
            let guess = strategy.select_guess(&candidates).unwrap();
            assert!(candidates.contains(guess));
        }
    }

    #[test]
    fn random_strategy_single_candidate() {
        let candidates = vec![code([5, 5, 1, 1])];
        let mut strategy = RandomStrategy::seeded(99);
        assert_eq!(strategy.select_guess(&candidates), Some(&candidates[0]));
    }

    #[test]
    fn random_strategy_empty_candidates() {
        let mut strategy = RandomStrategy::seeded(3);
        assert!(strategy.select_guess(&[]).is_none());
    }

    #[test]
    fn seeded_strategies_are_reproducible() {
        let candidates = Code::all();
        let mut a = RandomStrategy::seeded(42);
        let mut b = RandomStrategy::seeded(42);

        for _ in 0..20 {
            assert_eq!(
                a.select_guess(&candidates),
                b.select_guess(&candidates)
            );
        }
    }

    #[test]
    fn random_strategy_covers_the_space() {
        // Not a statistical test: just checks the draw is not stuck on one index
        let candidates = vec![code([1, 1, 1, 1]), code([2, 2, 2, 2]), code([3, 3, 3, 3])];
        let mut strategy = RandomStrategy::seeded(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(*strategy.select_guess(&candidates).unwrap());
        }
        assert_eq!(seen.len(), candidates.len());
    }
}
