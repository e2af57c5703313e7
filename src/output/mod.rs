//! Terminal output formatting
//!
//! Console observer for the text shell and pretty-printing of command results.

pub mod display;
pub mod formatters;

pub use display::{ConsoleObserver, print_benchmark_result, print_solve_result};
