//! Mastermind
//!
//! Code-breaking game with a human codebreaker, a random-candidate solver, and
//! TUI and CLI front ends.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind::core::{Code, Feedback};
//!
//! let guess = Code::new(&[1, 2, 2, 2]).unwrap();
//! let secret = Code::new(&[1, 1, 2, 3]).unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &secret);
//! println!("{feedback}");
//! ```

// Core domain types
pub mod core;

// Candidate space and solver
pub mod solver;

// Session state machines and their collaborators
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
