//! TUI rendering with ratatui
//!
//! Board, messages and status for the human codebreaker.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Code;
use crate::game::Turn;
use crate::output::formatters::{feedback_pegs, spaced_code};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Color of a symbol on the board
const fn symbol_color(symbol: u8) -> Color {
    match symbol {
        1 => Color::Red,
        2 => Color::Green,
        3 => Color::Blue,
        4 => Color::Yellow,
        5 => Color::Magenta,
        _ => Color::Cyan,
    }
}

fn code_spans(code: &Code) -> Vec<Span<'static>> {
    code.symbols()
        .iter()
        .map(|&s| {
            Span::styled(
                format!(" {s} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(symbol_color(s))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn turn_line(turn: &Turn) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{:>2}: ", turn.number))];
    spans.extend(code_spans(&turn.guess));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        feedback_pegs(turn.feedback),
        Style::default().fg(Color::White),
    ));
    spans.push(Span::styled(
        format!("  {}", turn.feedback),
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app.game.history().iter().map(turn_line).collect();

    for number in app.game.turns_used() + 1..=app.game.max_turns() {
        lines.push(Line::styled(
            format!("{number:>2}:  ·  ·  ·  ·"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Turns gauge
            Constraint::Length(4), // Legend
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_turns_gauge(f, app, chunks[0]);
    render_legend(f, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_turns_gauge(f: &mut Frame, app: &App, area: Rect) {
    let used = app.game.turns_used();
    let max = app.game.max_turns().max(1);
    let percent = ((used * 100) / max).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Turns ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{} used | {} left", app.game.max_turns(), app.game.turns_left()));

    f.render_widget(gauge, area);
}

fn render_legend(f: &mut Frame, area: Rect) {
    let legend = Paragraph::new(vec![
        Line::from("● right color, right position"),
        Line::from("○ right color, wrong position"),
    ])
    .block(Block::default().title(" Pegs ").borders(Borders::ALL));
    f.render_widget(legend, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => {
            let mut pending: Vec<String> = app.input_buffer.chars().map(String::from).collect();
            pending.resize(crate::core::CODE_LENGTH, "_".to_string());
            (
                " Enter Guess (keys 1-6) | Enter: submit | Esc: clear ",
                pending.join(" "),
                Color::Yellow,
            )
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[0]);

    let last = app.game.history().last().map_or_else(
        || "No guesses yet".to_string(),
        |t| format!("Last: {}", spaced_code(&t.guess)),
    );
    f.render_widget(Paragraph::new(last).alignment(Alignment::Center), chunks[1]);

    let help = Paragraph::new("q: Quit | n: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn renders_fresh_board() {
        let app = App::new(GameConfig::default(), Some(3));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("MASTERMIND"));
        assert!(text.contains("0/12 used"));
    }

    #[test]
    fn symbol_colors_are_distinct() {
        let colors: Vec<Color> = (1..=6).map(symbol_color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
