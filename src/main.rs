//! Mastermind - CLI
//!
//! Play against the computer in a TUI or plain shell, or watch the solver work.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use mastermind::{
    commands::{SolveConfig, benchmark_secrets, run_benchmark, run_simple, solve_code},
    game::{DEFAULT_MAX_TURNS, GameConfig},
    logging,
    output::{ConsoleObserver, print_benchmark_result, print_solve_result},
};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game with a candidate-elimination solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Turns allowed per game
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// Seed for secrets and solver picks (random when omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Pause after each solver guess in simple mode, in milliseconds
    #[arg(short, long, global = true, default_value = "1000")]
    delay_ms: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - you guess the computer's code)
    Play,

    /// Simple CLI mode (menu-driven, either role, without TUI)
    Simple,

    /// Watch the solver crack a specific code
    Solve {
        /// The secret code, e.g. 1123 or "1 1 2 3"
        secret: String,

        /// Show feedback text and candidate counts per turn
        #[arg(long)]
        detail: bool,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random secrets to test (all 1296 codes when omitted)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.max_turns == 0 {
        anyhow::bail!("--max-turns must be at least 1");
    }
    let config = GameConfig::new(cli.max_turns);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, cli.seed),
        Commands::Simple => {
            let config = config.with_solver_delay(Duration::from_millis(cli.delay_ms));
            run_simple(std::io::stdin().lock(), config, cli.seed, &mut ConsoleObserver)?;
            Ok(())
        }
        Commands::Solve { secret, detail } => run_solve_command(secret, detail, config, cli.seed),
        Commands::Benchmark { count } => {
            run_benchmark_command(count, config, cli.seed);
            Ok(())
        }
    }
}

fn run_solve_command(
    secret: String,
    detail: bool,
    game: GameConfig,
    seed: Option<u64>,
) -> Result<()> {
    let config = SolveConfig { secret, seed, game };
    let result = solve_code(config)?;

    print_solve_result(&result, detail);
    Ok(())
}

fn run_benchmark_command(count: Option<usize>, config: GameConfig, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(rand::random);
    let secrets = benchmark_secrets(count, seed);

    match count {
        Some(n) => println!("Running benchmark on {n} random secrets..."),
        None => println!("Running benchmark on all {} codes...", secrets.len()),
    }
    info!("Benchmark seed: {seed}");

    let result = run_benchmark(&secrets, config, seed, true);
    print_benchmark_result(&result);
}

fn run_play_command(config: GameConfig, seed: Option<u64>) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(config, seed);
    run_tui(app)
}
