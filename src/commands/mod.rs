//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, benchmark_secrets, run_benchmark};
pub use simple::{Role, Shell, parse_digits, run_simple};
pub use solve::{SolveConfig, SolveResult, solve_code};
