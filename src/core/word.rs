//! Five-letter word representation
//!
//! A `Word` stores an uppercase 5-letter word along with a letter index used
//! by the scorer to answer "does the solution contain this letter" in O(1).

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A validated, uppercase 5-letter word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
    positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalising it to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Contains non-ASCII characters
    /// - Length is not exactly 5
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_uppercase();

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters = [0u8; WORD_LENGTH];
        letters.copy_from_slice(text.as_bytes());

        let mut positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &letter) in letters.iter().enumerate() {
            positions.entry(letter).or_default().push(i);
        }

        Ok(Self {
            text,
            letters,
            positions,
        })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific uppercase letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
