//! Letter scoring
//!
//! Each position of a guess is classified on its own:
//! - Green: the letter matches the solution at that position
//! - Yellow: the letter appears anywhere else in the solution
//! - Black: the letter is absent from the solution
//!
//! Repeated letters are not consumed by earlier matches, so a guess with two
//! `L`s against a solution with one `L` may show two yellows. Players of this
//! game see exactly this behaviour and the tests pin it down.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Outcome for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Black,
    Yellow,
    Green,
}

impl Classification {
    /// Square emoji used for shareable result lines
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Black => '⬛',
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifications for all five positions of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Classification; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const WIN: Self = Self([Classification::Green; WORD_LENGTH]);

    #[must_use]
    pub const fn new(classifications: [Classification; WORD_LENGTH]) -> Self {
        Self(classifications)
    }

    #[inline]
    #[must_use]
    pub const fn classifications(&self) -> &[Classification; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Classification {
        self.0[position]
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::WIN
    }

    /// Number of positions with the given classification
    #[must_use]
    pub fn count(&self, classification: Classification) -> usize {
        self.0.iter().filter(|&&c| c == classification).count()
    }

    /// Convert to a string like "⬛🟩🟩🟨🟩"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{score, Word};
    ///
    /// let solution = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// assert_eq!(score(&solution, &guess).to_emoji(), "⬛🟩🟩🟨🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

/// Score `guess` against `solution`, one position at a time
///
/// # Examples
/// ```
/// use wordle_game::core::{score, Classification::*, Word};
///
/// let solution = Word::new("crane").unwrap();
/// let guess = Word::new("trace").unwrap();
/// let feedback = score(&solution, &guess);
/// assert_eq!(
///     feedback.classifications(),
///     &[Black, Green, Green, Yellow, Green]
/// );
/// ```
#[must_use]
pub fn score(solution: &Word, guess: &Word) -> Feedback {
    let mut result = [Classification::Black; WORD_LENGTH];

    for (i, slot) in result.iter_mut().enumerate() {
        *slot = classify(solution, guess.letter_at(i), i);
    }

    Feedback(result)
}

/// Classify one letter placed at `position` against the solution
#[must_use]
pub fn classify(solution: &Word, letter: u8, position: usize) -> Classification {
    if solution.letter_at(position) == letter {
        Classification::Green
    } else if solution.has_letter(letter) {
        Classification::Yellow
    } else {
        Classification::Black
    }
}
