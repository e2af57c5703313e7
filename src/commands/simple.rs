//! Simple interactive CLI mode
//!
//! Text-based menu and turn prompts without the TUI. Parsing of typed codes
//! happens here; the game core only ever sees raw symbols.

use crate::game::{
    CodeSource, GameConfig, SessionError, SessionObserver, run_computer_guesser,
    run_human_guesser,
};
use crate::solver::RandomStrategy;
use colored::Colorize;
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};

/// Which side the human plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Human sets the secret, the solver guesses
    Creator,
    /// Computer sets the secret, the human guesses
    Guesser,
}

/// Turn typed text into raw symbols
///
/// Whitespace and commas are ignored, so `1234`, `1 2 3 4` and `1,2,3,4` are
/// equivalent. Any other non-digit character becomes 0, which validation rejects.
#[must_use]
pub fn parse_digits(input: &str) -> Vec<u8> {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| c.to_digit(10).map_or(0, |d| d as u8))
        .collect()
}

/// Line-oriented shell over any `BufRead`
pub struct Shell<R: BufRead> {
    reader: R,
}

impl<R: BufRead> Shell<R> {
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Print a prompt and read one trimmed line; `None` on end of input
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        println!("{prompt}");
        std::io::stdout().flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    /// Ask play or quit until one is chosen; `false` means quit
    fn ask_play(&mut self) -> Result<bool, SessionError> {
        loop {
            println!("\n{}", "Welcome to Mastermind!".bright_cyan().bold());
            let Some(choice) = self.prompt("Would you like to (p)lay or (q)uit?")? else {
                return Ok(false);
            };

            match choice.to_lowercase().as_str() {
                "p" | "play" => return Ok(true),
                "q" | "quit" => return Ok(false),
                _ => println!("Invalid choice. Please enter 'p' to play or 'q' to quit."),
            }
        }
    }

    /// Ask for a role until a valid one is chosen; `None` on end of input
    fn ask_role(&mut self) -> Result<Option<Role>, SessionError> {
        loop {
            let Some(choice) = self.prompt("Choose your role: (1) Creator or (2) Guesser")? else {
                return Ok(None);
            };

            match choice.as_str() {
                "1" => return Ok(Some(Role::Creator)),
                "2" => return Ok(Some(Role::Guesser)),
                _ => println!("Invalid choice. Please choose (1) or (2)."),
            }
        }
    }
}

impl<R: BufRead> CodeSource for Shell<R> {
    fn next_guess(&mut self, turn: usize) -> Result<Option<Vec<u8>>, SessionError> {
        let prompt = format!("Turn {turn}: Enter your guess (4 numbers between 1 and 6):");
        Ok(self.prompt(&prompt)?.map(|line| parse_digits(&line)))
    }

    fn next_secret(&mut self) -> Result<Option<Vec<u8>>, SessionError> {
        let line = self.prompt("Enter your secret code (4 numbers between 1 and 6):")?;
        Ok(line.map(|line| parse_digits(&line)))
    }
}

/// Run the simple interactive CLI mode
///
/// Loops over the play/quit menu; each session runs to completion before the
/// menu is shown again. End of input exits cleanly. Session events go to
/// `observer`.
///
/// # Errors
///
/// Returns an error if reading input or flushing output fails.
pub fn run_simple<R, O>(
    reader: R,
    config: GameConfig,
    seed: Option<u64>,
    observer: &mut O,
) -> Result<(), SessionError>
where
    R: BufRead,
    O: SessionObserver + ?Sized,
{
    let mut shell = Shell::new(reader);
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    while shell.ask_play()? {
        let Some(role) = shell.ask_role()? else {
            break;
        };

        let result = match role {
            Role::Guesser => {
                println!("The computer has generated a secret code.");
                run_human_guesser(&mut rng, config, &mut shell, &mut *observer)
            }
            Role::Creator => {
                let strategy = RandomStrategy::from_seed(seed);
                run_computer_guesser(strategy, config, &mut shell, &mut *observer)
            }
        };

        match result {
            Ok(_) => {}
            Err(SessionError::InputClosed) => break,
            Err(e @ SessionError::CandidateSpaceExhausted { .. }) => {
                warn!("Solver session failed: {e}");
                println!("{}", format!("Error: {e}").red().bold());
            }
            Err(e) => return Err(e),
        }
    }

    println!("Thanks for playing!");
    Ok(())
}
