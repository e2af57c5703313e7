//! Benchmark command
//!
//! Plays the solver against many secrets in parallel and summarises turn counts.
//! Every session owns its candidate space and an RNG derived from the seed, so
//! results are reproducible for a given seed regardless of scheduling.

use crate::core::Code;
use crate::game::{GameConfig, Outcome, SilentObserver, SolverGame, play_solver};
use crate::solver::RandomStrategy;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub wins: usize,
    pub exhausted: usize,
    pub failed: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    /// Turns to win -> number of games
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64
        }
    }
}

/// Secrets to benchmark against
///
/// With no count, every one of the 1296 codes; otherwise `count` random codes.
#[must_use]
pub fn benchmark_secrets(count: Option<usize>, seed: u64) -> Vec<Code> {
    match count {
        None => Code::all(),
        Some(n) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..n).map(|_| Code::random(&mut rng)).collect()
        }
    }
}

/// Mix the run seed with the game index so each session draws independently
fn session_seed(seed: u64, index: usize) -> u64 {
    seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Run the solver against each secret
pub fn run_benchmark(
    secrets: &[Code],
    config: GameConfig,
    seed: u64,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    // Delay is for humans watching a single game; never pause here
    let config = config.with_solver_delay(Duration::ZERO);

    let outcomes: Vec<Option<Outcome>> = secrets
        .par_iter()
        .enumerate()
        .map(|(index, &secret)| {
            let strategy = RandomStrategy::seeded(session_seed(seed, index));
            let mut game = SolverGame::new(secret, strategy, config);
            let outcome = match play_solver(&mut game, &mut SilentObserver, config.solver_delay) {
                Ok(outcome) => Some(outcome),
                Err(e) => {
                    warn!("Session for {secret} failed: {e}");
                    game.outcome()
                }
            };
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("done");

    let mut wins = 0;
    let mut exhausted = 0;
    let mut failed = 0;
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for outcome in outcomes {
        match outcome {
            Some(Outcome::Won { turns, .. }) => {
                wins += 1;
                total_turns += turns;
                min_turns = min_turns.min(turns);
                max_turns = max_turns.max(turns);
                *distribution.entry(turns).or_insert(0) += 1;
            }
            Some(Outcome::Exhausted { .. }) => exhausted += 1,
            Some(Outcome::Failed { .. }) | None => failed += 1,
        }
    }

    let duration = start.elapsed();
    let total_games = secrets.len();
    info!("Benchmarked {total_games} games in {:.2}s", duration.as_secs_f64());

    BenchmarkResult {
        total_games,
        wins,
        exhausted,
        failed,
        average_turns: if wins == 0 {
            0.0
        } else {
            total_turns as f64 / wins as f64
        },
        min_turns: if wins == 0 { 0 } else { min_turns },
        max_turns,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
