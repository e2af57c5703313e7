//! Property tests for feedback scoring and candidate filtering

use mastermind::core::{Code, Feedback};
use mastermind::solver::{CandidateSpace, RandomStrategy, Solver, filter_candidates};
use proptest::prelude::*;

fn code() -> impl Strategy<Value = Code> {
    prop::array::uniform4(1u8..=6).prop_map(|symbols| Code::new(&symbols).unwrap())
}

proptest! {
    #[test]
    fn feedback_is_bounded(guess in code(), secret in code()) {
        let feedback = Feedback::calculate(&guess, &secret);
        prop_assert!(feedback.exact() <= 4);
        prop_assert!(feedback.color_only() <= 4);
        prop_assert!(feedback.exact() + feedback.color_only() <= 4);
    }

    #[test]
    fn code_scored_against_itself_is_perfect(secret in code()) {
        prop_assert_eq!(Feedback::calculate(&secret, &secret), Feedback::PERFECT);
    }

    #[test]
    fn feedback_is_symmetric(a in code(), b in code()) {
        prop_assert_eq!(Feedback::calculate(&a, &b), Feedback::calculate(&b, &a));
    }

    #[test]
    fn perfect_only_for_identical_codes(a in code(), b in code()) {
        prop_assert_eq!(Feedback::calculate(&a, &b).is_perfect(), a == b);
    }

    #[test]
    fn secret_survives_filtering(secret in code(), guess in code()) {
        let observed = Feedback::calculate(&guess, &secret);
        let space = CandidateSpace::full().filter(&guess, observed);
        prop_assert!(space.contains(&secret));
    }

    #[test]
    fn filtering_never_grows(secret in code(), guesses in prop::collection::vec(code(), 1..6)) {
        let mut candidates = Code::all();
        for guess in &guesses {
            let before = candidates.len();
            candidates = filter_candidates(&candidates, guess, Feedback::calculate(guess, &secret));
            prop_assert!(candidates.len() <= before);
            prop_assert!(candidates.contains(&secret));
        }
    }

    #[test]
    fn non_winning_draw_strictly_shrinks(secret in code(), seed in any::<u64>()) {
        let mut solver = Solver::new(RandomStrategy::seeded(seed));
        for _ in 0..12 {
            let before = solver.count_candidates();
            let Some(guess) = solver.next_guess() else { break };
            let feedback = Feedback::calculate(&guess, &secret);
            if feedback.is_perfect() {
                break;
            }
            let after = solver.observe(&guess, feedback);
            // The guess itself can never be consistent with non-perfect feedback
            prop_assert!(after < before);
            prop_assert!(solver.candidates().contains(&secret));
        }
    }
}

#[test]
fn pinned_cases() {
    let score = |g: [u8; 4], s: [u8; 4]| {
        let f = Feedback::calculate(&Code::new(&g).unwrap(), &Code::new(&s).unwrap());
        (f.exact(), f.color_only())
    };

    assert_eq!(score([1, 2, 2, 2], [1, 1, 2, 3]), (2, 0));
    assert_eq!(score([4, 4, 2, 2], [2, 4, 4, 6]), (1, 2));
}

#[test]
fn every_feedback_partition_contains_the_secret() {
    let secret = Code::new(&[3, 5, 5, 1]).unwrap();
    for guess in Code::all() {
        let observed = Feedback::calculate(&guess, &secret);
        assert!(filter_candidates(&Code::all(), &guess, observed).contains(&secret));
    }
}
