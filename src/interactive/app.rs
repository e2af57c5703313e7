//! TUI application state and logic

use crate::commands::parse_digits;
use crate::core::CODE_LENGTH;
use crate::game::{CodebreakerGame, GameConfig, Outcome, SessionError};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: CodebreakerGame,
    pub config: GameConfig,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index is the number of turns a win took
    pub turn_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    fn record(&mut self, outcome: &Outcome) {
        self.total_games += 1;
        if let Outcome::Won { turns, .. } = *outcome {
            self.games_won += 1;
            if self.turn_distribution.len() <= turns {
                self.turn_distribution.resize(turns + 1, 0);
            }
            self.turn_distribution[turns] += 1;
        }
    }
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let game = CodebreakerGame::random(&mut rng, config);

        Self {
            game,
            config,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! I've picked a secret code of 4 colors from 1-6.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: format!(
                        "Type your guess and press Enter. You have {} turns.",
                        config.max_turns
                    ),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        }
    }

    /// Append a symbol key to the pending guess; anything outside 1-6 is ignored
    pub fn push_symbol(&mut self, c: char) {
        if self.input_buffer.len() < CODE_LENGTH && ('1'..='6').contains(&c) {
            self.input_buffer.push(c);
        }
    }

    pub fn submit_guess(&mut self) {
        let raw = parse_digits(&self.input_buffer);

        match self.game.guess(&raw) {
            Ok(turn) => {
                self.input_buffer.clear();
                debug!("Turn {}: {} -> {}", turn.number, turn.guess, turn.feedback);

                if let Some(outcome) = self.game.outcome() {
                    self.finish(&outcome);
                } else {
                    self.add_message(
                        &format!("{} - {} turns left", turn.feedback, self.game.turns_left()),
                        MessageStyle::Info,
                    );
                }
            }
            Err(SessionError::InvalidCode(e)) => {
                self.add_message(&format!("Invalid code: {e}"), MessageStyle::Error);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish(&mut self, outcome: &Outcome) {
        self.stats.record(outcome);
        self.input_mode = InputMode::GameOver;

        match *outcome {
            Outcome::Won { turns, .. } => {
                let celebration = match turns {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟".to_string(),
                    2..=4 => format!("🔥 Cracked it in {turns} turns! 🔥"),
                    _ => format!("🎉 Solved in {turns} turns! 🎉"),
                };
                self.add_message(&celebration, MessageStyle::Success);
            }
            Outcome::Exhausted { secret } | Outcome::Failed { secret, .. } => {
                self.add_message(
                    &format!("Out of turns! The secret code was {secret}."),
                    MessageStyle::Error,
                );
            }
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game = CodebreakerGame::random(&mut self.rng, self.config);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! A fresh secret is ready.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('n') => {
                self.new_game();
                return;
            }
            _ => {}
        }

        if self.input_mode == InputMode::GameOver {
            return;
        }

        match code {
            KeyCode::Char(c) => self.push_symbol(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Esc => self.input_buffer.clear(),
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionState;

    fn type_code(app: &mut App, code: &str) {
        for c in code.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    const SEED: u64 = 42;

    /// The secret is only revealed by finishing; replay the seed instead
    fn seeded_secret() -> String {
        let mut rng = StdRng::seed_from_u64(SEED);
        crate::core::Code::random(&mut rng).to_string()
    }

    fn new_app() -> App {
        App::new(GameConfig::default(), Some(SEED))
    }

    #[test]
    fn input_accepts_only_symbols() {
        let mut app = new_app();
        for c in ['1', '7', '0', 'x', '6', '2', '3', '4'] {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        assert_eq!(app.input_buffer, "1623");
    }

    #[test]
    fn backspace_and_escape_edit_input() {
        let mut app = new_app();
        app.handle_key(KeyCode::Char('1'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('2'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.input_buffer, "1");

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn short_guess_is_rejected_without_using_a_turn() {
        let mut app = new_app();
        type_code(&mut app, "12");

        assert_eq!(app.game.turns_used(), 0);
        assert_eq!(app.input_buffer, "12");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut app = new_app();
        let secret = seeded_secret();
        type_code(&mut app, &secret);

        assert_eq!(app.game.state(), SessionState::Won);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.turn_distribution[1], 1);
    }

    #[test]
    fn input_ignored_after_game_over() {
        let mut app = new_app();
        let secret = seeded_secret();
        type_code(&mut app, &secret);

        app.handle_key(KeyCode::Char('1'), KeyModifiers::NONE);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn running_out_of_turns_records_loss() {
        let mut app = App::new(GameConfig::new(2), Some(SEED));
        let secret = seeded_secret();
        let wrong = if secret == "1111" { "2222" } else { "1111" };

        type_code(&mut app, wrong);
        type_code(&mut app, wrong);

        assert_eq!(app.game.state(), SessionState::Exhausted);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn new_game_resets_board() {
        let mut app = new_app();
        type_code(&mut app, "1234");
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);

        assert_eq!(app.game.turns_used(), 0);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app();
        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);

        let mut app = new_app();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = new_app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
