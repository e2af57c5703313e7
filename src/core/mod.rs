//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types: codes, their validation, and
//! the feedback scorer. Everything here is pure and deterministic apart from
//! `Code::random`, which takes the RNG as a parameter.

pub mod code;
mod feedback;

pub use code::{CODE_LENGTH, CODE_SPACE_SIZE, COLORS, Code, CodeError};
pub use feedback::Feedback;
