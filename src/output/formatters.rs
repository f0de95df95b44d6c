//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, COLOR_MARKER, Code, EXACT_MARKER, Feedback};
use crate::game::{Attempt, NUMBER_OF_ATTEMPTS};
use colored::Colorize;

const ROW_SEPARATOR: &str = "+----+---------+---------+";

/// "1 attempt", "3 attempts"
#[must_use]
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Code with spaces between symbols, e.g. "A B C D"
#[must_use]
pub fn spaced(symbols: impl IntoIterator<Item = char>) -> String {
    symbols
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spaced code text
#[must_use]
pub fn code_cell(code: Code) -> String {
    spaced(code.to_string().chars())
}

/// Feedback markers, spaced and colored: exact green, color-only yellow, miss dimmed
#[must_use]
pub fn feedback_pegs(feedback: Feedback) -> String {
    feedback
        .markers()
        .chars()
        .map(|marker| match marker {
            EXACT_MARKER => marker.to_string().green().bold().to_string(),
            COLOR_MARKER => marker.to_string().yellow().bold().to_string(),
            _ => marker.to_string().bright_black().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the board as a fixed-width table with one row per attempt slot
///
/// Unused slots are drawn as dots so the remaining attempts are visible.
#[must_use]
pub fn render_board(history: &[Attempt]) -> String {
    let mut lines = Vec::with_capacity(NUMBER_OF_ATTEMPTS * 2 + 3);
    lines.push(ROW_SEPARATOR.to_string());
    lines.push(format!("| {:>2} | {:<7} | {:<7} |", "#", "Guess", "Result"));
    lines.push(ROW_SEPARATOR.to_string());

    for slot in 0..NUMBER_OF_ATTEMPTS {
        let row = history.get(slot).map_or_else(
            || {
                let empty = spaced(std::iter::repeat_n('.', CODE_LENGTH));
                format!(
                    "| {:>2} | {} | {} |",
                    slot + 1,
                    empty.bright_black(),
                    empty.bright_black()
                )
            },
            |attempt| {
                format!(
                    "| {:>2} | {} | {} |",
                    slot + 1,
                    code_cell(attempt.guess).bold(),
                    feedback_pegs(attempt.feedback)
                )
            },
        );
        lines.push(row);
        lines.push(ROW_SEPARATOR.to_string());
    }

    lines.join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
