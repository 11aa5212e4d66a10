//! Formatting utilities for terminal output

use crate::core::FeedbackState;
use colored::{ColoredString, Colorize};

/// Color a single letter cell by its feedback
#[must_use]
pub fn colored_letter(letter: char, state: FeedbackState) -> ColoredString {
    let cell = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        FeedbackState::Correct => cell.black().on_green().bold(),
        FeedbackState::WrongSpot => cell.black().on_yellow().bold(),
        FeedbackState::Incorrect => cell.white().on_bright_black(),
        FeedbackState::Locked => cell.black().on_cyan().bold(),
        FeedbackState::ValidChainWord => cell.black().on_bright_green().bold(),
        FeedbackState::Occupied => cell.bright_white().bold(),
        FeedbackState::Empty => cell.bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f32, max: f32, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f32) as usize
    } else {
        width
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
