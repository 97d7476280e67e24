//! Core domain types for the game
//!
//! Words, letter scoring and the keyboard status map. Everything here is
//! pure; the game state machine in [`crate::game`] composes these pieces.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Classification, Feedback, classify, score};
pub use keyboard::{KEYBOARD_ROWS, Key, KeyStatus, KeyboardStatus};
pub use word::{WORD_LENGTH, Word, WordError};
