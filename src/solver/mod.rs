//! Mastermind solving
//!
//! The solver keeps a candidate space, draws a guess from it through a strategy,
//! and filters the space with every piece of feedback.

pub mod candidates;
mod engine;
pub mod strategy;

pub use candidates::{CandidateSpace, filter_candidates};
pub use engine::Solver;
pub use strategy::{RandomStrategy, Strategy};
