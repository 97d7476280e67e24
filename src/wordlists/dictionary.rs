//! Word corpus with membership test and random solution draw

use super::embedded::WORDS;
use super::loader::words_from_slice;
use crate::core::Word;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// The dictionary the game consults
///
/// Lookups are total and infallible. The solution returned by
/// `pick_random_solution` must itself pass `is_valid_word`.
pub trait Dictionary: Send + Sync {
    /// Case-insensitive exact match against the corpus
    fn is_valid_word(&self, word: &str) -> bool;

    /// Uniform random choice from the corpus
    fn pick_random_solution(&self) -> Word;
}

/// Error building a dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list contains no valid 5-letter words"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// In-memory word list backed by a hash set
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<String>,
    rng: Mutex<StdRng>,
}

impl WordList {
    /// Build a word list whose draws are seeded from the OS
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Build a word list with reproducible draws
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::{Dictionary, WordList, loader::words_from_slice};
    ///
    /// let words = words_from_slice(&["crane", "slate"]);
    /// let a = WordList::seeded(words.clone(), 7).unwrap();
    /// let b = WordList::seeded(words, 7).unwrap();
    /// assert_eq!(a.pick_random_solution(), b.pick_random_solution());
    /// ```
    pub fn seeded(words: Vec<Word>, seed: u64) -> Result<Self, DictionaryError> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    /// The word list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if the embedded list is empty.
    pub fn embedded(seed: Option<u64>) -> Result<Self, DictionaryError> {
        let words = words_from_slice(WORDS);
        match seed {
            Some(seed) => Self::seeded(words, seed),
            None => Self::new(words),
        }
    }

    fn with_rng(words: Vec<Word>, rng: StdRng) -> Result<Self, DictionaryError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| index.insert(w.text().to_string()))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self {
            words,
            index,
            rng: Mutex::new(rng),
        })
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn is_valid_word(&self, word: &str) -> bool {
        self.index.contains(&word.to_uppercase())
    }

    fn pick_random_solution(&self) -> Word {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        // Construction guarantees at least one word
        self.words
            .choose(&mut *rng)
            .unwrap_or(&self.words[0])
            .clone()
    }
}

impl fmt::Debug for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordList")
            .field("words", &self.words.len())
            .finish_non_exhaustive()
    }
}
