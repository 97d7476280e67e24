//! Formatting utilities for terminal output

use crate::core::{Classification, Feedback, KEYBOARD_ROWS, Key, KeyStatus, KeyboardStatus};
use crate::game::Row;
use colored::{ColoredString, Colorize};

/// A letter tile coloured by its classification
#[must_use]
pub fn tile(letter: char, classification: Classification) -> ColoredString {
    let text = format!(" {letter} ");
    match classification {
        Classification::Green => text.black().on_green().bold(),
        Classification::Yellow => text.black().on_yellow().bold(),
        Classification::Black => text.white().on_bright_black().bold(),
    }
}

/// A submitted row with coloured tiles
#[must_use]
pub fn scored_row(row: &Row, feedback: &Feedback) -> String {
    row.iter()
        .zip(feedback.classifications())
        .map(|(cell, &c)| tile(cell.unwrap_or(' '), c).to_string())
        .collect()
}

/// A row still being typed, or an empty row
#[must_use]
pub fn plain_row(row: &Row) -> String {
    row.iter()
        .map(|cell| match cell {
            Some(letter) => format!("[{letter}]"),
            None => "[ ]".to_string(),
        })
        .collect()
}

/// The on-screen keyboard as three coloured lines
#[must_use]
pub fn keyboard_lines(keys: &KeyboardStatus) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let indent = " ".repeat(i);
            let tiles: Vec<String> = row
                .iter()
                .filter_map(|&key| match key {
                    Key::Letter(l) => Some(char::from(l)),
                    Key::Enter | Key::Backspace => None,
                })
                .map(|letter| match keys.get(letter) {
                    KeyStatus::Known(c) => tile(letter, c).to_string(),
                    KeyStatus::Unknown => format!(" {letter} "),
                })
                .collect();
            format!("{indent}{}", tiles.join(""))
        })
        .collect()
}

/// Shareable emoji grid for a list of feedback rows
#[must_use]
pub fn emoji_grid(rows: &[Feedback]) -> String {
    rows.iter()
        .map(Feedback::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
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
