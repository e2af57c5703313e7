//! Display functions for session events and command results

use super::formatters::{create_progress_bar, feedback_pegs, spaced_code};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::CodeError;
use crate::game::{Outcome, SessionObserver, Turn};
use colored::Colorize;

/// Prints each session event to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl SessionObserver for ConsoleObserver {
    fn on_turn(&mut self, turn: &Turn) {
        println!(
            "Guess: {} - Feedback: {} {}",
            spaced_code(&turn.guess).bright_yellow(),
            turn.feedback,
            feedback_pegs(turn.feedback)
        );
        if let Some(remaining) = turn.remaining {
            println!("  {} candidates remain", remaining.to_string().cyan());
        }
    }

    fn on_finish(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Won { code, turns } => println!(
                "{}",
                format!("Code {code} cracked in {turns} turn(s)!").green().bold()
            ),
            Outcome::Exhausted { secret } => println!(
                "{}",
                format!("Out of turns. The secret code was {secret}.").yellow().bold()
            ),
            Outcome::Failed { secret, turns } => println!(
                "{}",
                format!("No consistent codes left after {turns} turn(s); the secret was {secret}.")
                    .red()
                    .bold()
            ),
        }
    }

    fn on_invalid(&mut self, error: &CodeError) {
        println!(
            "{} ({error})",
            "Invalid code. Please enter exactly four numbers between 1 and 6.".red()
        );
    }

    fn on_secret_accepted(&mut self) {
        println!("Secret code accepted. The computer will now try to guess it.");
    }
}

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let mut before = crate::core::CODE_SPACE_SIZE;
    for turn in &result.turns {
        println!(
            "\nTurn {}: {} {}",
            turn.number,
            spaced_code(&turn.guess),
            feedback_pegs(turn.feedback)
        );

        if verbose {
            println!("  Feedback:   {}", turn.feedback);
            if let Some(after) = turn.remaining {
                println!("  Candidates: {before} → {after}");
                before = after;
            }
        }
    }

    println!();
    match result.outcome {
        Outcome::Won { turns, .. } => {
            println!("{}", format!("✅ Solved in {turns} guesses!").green().bold());
        }
        _ => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.turns.len())
                .red()
                .bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0).bright_yellow().bold()
    );
    println!(
        "   Average turns:    {}",
        format!("{:.2}", result.average_turns).bright_yellow().bold()
    );
    println!("   Best case:        {}", result.min_turns.to_string().green());
    println!("   Worst case:       {}", result.max_turns.to_string().yellow());
    if result.exhausted > 0 {
        println!("   Out of turns:     {}", result.exhausted.to_string().yellow());
    }
    if result.failed > 0 {
        println!("   Failed:           {}", result.failed.to_string().red());
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut turn_counts: Vec<_> = result.distribution.iter().collect();
    turn_counts.sort_unstable();
    for (turns, &count) in turn_counts {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {turns:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
