//! Word list loading utilities
//!
//! Turns a file or the embedded constant into validated [`Word`]s.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and lines starting with `#` are skipped, as is any entry that
/// is not a 5-letter ASCII word.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse newline-separated words, skipping comments and invalid entries
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
