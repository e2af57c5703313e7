//! Mastermind feedback calculation and representation
//!
//! Feedback for a guess is a pair of counts:
//! - exact: positions where guess and secret hold the same colour
//! - color only: shared colours (bounded by multiset occurrence) not already counted as exact

use super::Code;
use super::code::{CODE_LENGTH, COLORS};
use std::fmt;

/// Feedback for a Mastermind guess
///
/// Invariant: `exact + color_only <= 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact: u8,
    color_only: u8,
}

impl Feedback {
    /// All four pegs in the right place
    pub const PERFECT: Self = Self {
        exact: CODE_LENGTH as u8,
        color_only: 0,
    };

    /// Create feedback from raw counts
    ///
    /// Returns `None` if the counts cannot describe a 4-symbol comparison.
    #[must_use]
    pub const fn new(exact: u8, color_only: u8) -> Option<Self> {
        if exact as usize + color_only as usize > CODE_LENGTH {
            return None;
        }
        Some(Self { exact, color_only })
    }

    /// Number of exact-position matches (0-4)
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of colour-only matches (0-4)
    #[inline]
    #[must_use]
    pub const fn color_only(self) -> u8 {
        self.color_only
    }

    /// Check if this is a perfect match (guess equals secret)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. Count positions with equal symbols (exact)
    /// 2. Sum, over every colour, the minimum occurrence count in either code.
    ///    This is the multiset intersection; a plain set intersection would
    ///    over- or under-count repeated colours.
    /// 3. Colour-only = intersection - exact
    ///
    /// The result is symmetric in its two arguments.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback};
    ///
    /// let secret = Code::new(&[2, 4, 4, 6]).unwrap();
    /// let guess = Code::new(&[4, 4, 2, 2]).unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.exact(), 1);
    /// assert_eq!(feedback.color_only(), 2);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        let exact = guess
            .symbols()
            .iter()
            .zip(secret.symbols())
            .filter(|(g, s)| g == s)
            .count() as u8;

        let guess_counts = guess.color_counts();
        let secret_counts = secret.color_counts();
        let shared: u8 = (1..=COLORS as usize)
            .map(|color| guess_counts[color].min(secret_counts[color]))
            .sum();

        Self {
            exact,
            color_only: shared - exact,
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} correct position(s), {} correct color(s)",
            self.exact, self.color_only
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(symbols: [u8; 4]) -> Code {
        Code::new(&symbols).unwrap()
    }

    #[test]
    fn feedback_perfect_constant() {
        assert_eq!(Feedback::PERFECT.exact(), 4);
        assert_eq!(Feedback::PERFECT.color_only(), 0);
        assert!(Feedback::PERFECT.is_perfect());
    }

    #[test]
    fn feedback_new_rejects_impossible_counts() {
        assert!(Feedback::new(4, 0).is_some());
        assert!(Feedback::new(2, 2).is_some());
        assert!(Feedback::new(0, 0).is_some());
        assert!(Feedback::new(3, 2).is_none());
        assert!(Feedback::new(5, 0).is_none());
    }

    #[test]
    fn feedback_no_shared_colors() {
        let feedback = Feedback::calculate(&code([1, 1, 2, 2]), &code([3, 4, 5, 6]));
        assert_eq!(feedback, Feedback::new(0, 0).unwrap());
    }

    #[test]
    fn feedback_identical_codes() {
        let c = code([3, 1, 4, 1]);
        assert_eq!(Feedback::calculate(&c, &c), Feedback::PERFECT);
    }

    #[test]
    fn feedback_all_colors_misplaced() {
        let feedback = Feedback::calculate(&code([1, 2, 3, 4]), &code([4, 3, 2, 1]));
        assert_eq!(feedback.exact(), 0);
        assert_eq!(feedback.color_only(), 4);
    }

    #[test]
    fn feedback_repeated_guess_color_bounded_by_secret() {
        // Secret 1123, guess 1222
        // Position 0 (1) and position 2 (2) are exact
        // Shared multiset: one 1, one 2 = 2, so nothing left for colour-only
        let feedback = Feedback::calculate(&code([1, 2, 2, 2]), &code([1, 1, 2, 3]));
        assert_eq!(feedback.exact(), 2);
        assert_eq!(feedback.color_only(), 0);
    }

    #[test]
    fn feedback_repeated_colors_both_sides() {
        // Secret 2446, guess 4422
        // Position 1 (4) is exact
        // Shared multiset: two 4s, one 2 = 3, minus 1 exact = 2 colour-only
        let feedback = Feedback::calculate(&code([4, 4, 2, 2]), &code([2, 4, 4, 6]));
        assert_eq!(feedback.exact(), 1);
        assert_eq!(feedback.color_only(), 2);
    }

    #[test]
    fn feedback_naive_set_intersection_would_differ() {
        // Set intersection of {1} and {1} is 1, but multiset intersection is 2
        let feedback = Feedback::calculate(&code([1, 1, 5, 5]), &code([6, 6, 1, 1]));
        assert_eq!(feedback.exact(), 0);
        assert_eq!(feedback.color_only(), 2);
    }

    #[test]
    fn feedback_is_symmetric() {
        let pairs = [
            ([1, 1, 2, 3], [1, 2, 2, 2]),
            ([2, 4, 4, 6], [4, 4, 2, 2]),
            ([6, 5, 4, 3], [3, 3, 3, 3]),
        ];
        for (a, b) in pairs {
            assert_eq!(
                Feedback::calculate(&code(a), &code(b)),
                Feedback::calculate(&code(b), &code(a))
            );
        }
    }

    #[test]
    fn feedback_display() {
        let feedback = Feedback::new(1, 2).unwrap();
        assert_eq!(
            feedback.to_string(),
            "1 correct position(s), 2 correct color(s)"
        );
    }
}
