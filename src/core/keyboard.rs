//! Per-letter keyboard feedback
//!
//! The map remembers the most recent classification written for each letter.
//! A later guess can therefore downgrade a green key to yellow or black.

use super::feedback::Classification;
use rustc_hash::FxHashMap;

/// Status of a key as shown on the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyStatus {
    Unknown,
    Known(Classification),
}

/// On-screen keyboard rows, top to bottom
pub const KEYBOARD_ROWS: [&[Key]; 3] = [
    &[
        Key::Letter(b'Q'),
        Key::Letter(b'W'),
        Key::Letter(b'E'),
        Key::Letter(b'R'),
        Key::Letter(b'T'),
        Key::Letter(b'Y'),
        Key::Letter(b'U'),
        Key::Letter(b'I'),
        Key::Letter(b'O'),
        Key::Letter(b'P'),
    ],
    &[
        Key::Letter(b'A'),
        Key::Letter(b'S'),
        Key::Letter(b'D'),
        Key::Letter(b'F'),
        Key::Letter(b'G'),
        Key::Letter(b'H'),
        Key::Letter(b'J'),
        Key::Letter(b'K'),
        Key::Letter(b'L'),
    ],
    &[
        Key::Enter,
        Key::Letter(b'Z'),
        Key::Letter(b'X'),
        Key::Letter(b'C'),
        Key::Letter(b'V'),
        Key::Letter(b'B'),
        Key::Letter(b'N'),
        Key::Letter(b'M'),
        Key::Backspace,
    ],
];

/// A key of the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(u8),
    Enter,
    Backspace,
}

impl Key {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(letter) => char::from(letter).to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }
}

/// Latest classification per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatus {
    keys: FxHashMap<u8, Classification>,
}

impl KeyboardStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `classification` for `letter`, replacing whatever was there
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Classification, KeyStatus, KeyboardStatus};
    ///
    /// let keys = KeyboardStatus::new()
    ///     .update('R', Classification::Green)
    ///     .update('R', Classification::Yellow);
    /// assert_eq!(keys.get('R'), KeyStatus::Known(Classification::Yellow));
    /// ```
    #[must_use]
    pub fn update(mut self, letter: char, classification: Classification) -> Self {
        if let Some(key) = Self::key_of(letter) {
            self.keys.insert(key, classification);
        }
        self
    }

    /// Status for a letter; lowercase input is looked up as uppercase
    #[must_use]
    pub fn get(&self, letter: char) -> KeyStatus {
        Self::key_of(letter)
            .and_then(|key| self.keys.get(&key))
            .map_or(KeyStatus::Unknown, |&c| KeyStatus::Known(c))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Letters with a known status, in alphabetical order
    #[must_use]
    pub fn known(&self) -> Vec<(char, Classification)> {
        let mut known: Vec<(char, Classification)> = self
            .keys
            .iter()
            .map(|(&key, &c)| (char::from(key), c))
            .collect();
        known.sort_unstable_by_key(|&(letter, _)| letter);
        known
    }

    fn key_of(letter: char) -> Option<u8> {
        u8::try_from(letter.to_ascii_uppercase())
            .ok()
            .filter(u8::is_ascii_uppercase)
    }
}
