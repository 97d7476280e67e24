//! Dictionary service
//!
//! Provides the embedded word list and the [`Dictionary`] the game uses for
//! membership tests and solution draws.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError, WordList};
pub use embedded::{WORDS, WORDS_COUNT};
