//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Code, Feedback};

/// Format feedback as peg glyphs: filled for exact, hollow for colour-only,
/// dots for the rest
#[must_use]
pub fn feedback_pegs(feedback: Feedback) -> String {
    let exact = usize::from(feedback.exact());
    let color_only = usize::from(feedback.color_only());
    let blank = CODE_LENGTH.saturating_sub(exact + color_only);

    format!("{}{}{}", "●".repeat(exact), "○".repeat(color_only), "·".repeat(blank))
}

/// Space-separated symbols, e.g. `1 1 2 3`
#[must_use]
pub fn spaced_code(code: &Code) -> String {
    code.symbols()
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
