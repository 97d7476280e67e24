//! Game state snapshot
//!
//! A `GameState` is a plain value. The reducer never mutates one in place; it
//! builds the next state from the previous one. Everything a renderer needs
//! (board, current row, keyboard, outcome, shake) is readable from here.

use crate::core::{Feedback, KeyboardStatus, WORD_LENGTH, Word, score};
use crate::wordlists::Dictionary;

/// Number of guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// One board row; `None` is an empty cell
pub type Row = [Option<char>; WORD_LENGTH];

const EMPTY_ROW: Row = [None; WORD_LENGTH];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(super) solution: Word,
    pub(super) board: [Row; MAX_GUESSES],
    pub(super) buffer: Vec<char>,
    pub(super) current_row: usize,
    pub(super) is_over: bool,
    pub(super) is_win: bool,
    pub(super) keyboard: KeyboardStatus,
    pub(super) shake: bool,
}

impl GameState {
    /// Fresh game with a solution drawn from `dictionary`
    #[must_use]
    pub fn new<D: Dictionary + ?Sized>(dictionary: &D) -> Self {
        Self::with_solution(dictionary.pick_random_solution())
    }

    /// Fresh game with a known solution
    #[must_use]
    pub fn with_solution(solution: Word) -> Self {
        Self {
            solution,
            board: [EMPTY_ROW; MAX_GUESSES],
            buffer: Vec::with_capacity(WORD_LENGTH),
            current_row: 0,
            is_over: false,
            is_win: false,
            keyboard: KeyboardStatus::new(),
            shake: false,
        }
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub const fn board(&self) -> &[Row; MAX_GUESSES] {
        &self.board
    }

    /// Letters typed into the current row so far
    #[must_use]
    pub fn buffer(&self) -> &[char] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_text(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Index of the row being typed; equals the number of submitted guesses
    #[must_use]
    pub const fn current_row_index(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_over
    }

    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.is_win
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    /// Whether the last submission was rejected and not yet cleared
    #[must_use]
    pub const fn shake(&self) -> bool {
        self.shake
    }

    /// The row being typed, padded with empty cells
    #[must_use]
    pub fn current_row(&self) -> Row {
        let mut row = EMPTY_ROW;
        for (cell, &letter) in row.iter_mut().zip(&self.buffer) {
            *cell = Some(letter);
        }
        row
    }

    /// Feedback for a submitted row, `None` for rows not yet played
    #[must_use]
    pub fn row_feedback(&self, row: usize) -> Option<Feedback> {
        self.guess_at(row).map(|guess| score(&self.solution, &guess))
    }

    /// Submitted guesses, oldest first
    #[must_use]
    pub fn guesses(&self) -> Vec<Word> {
        (0..self.current_row).filter_map(|r| self.guess_at(r)).collect()
    }

    fn guess_at(&self, row: usize) -> Option<Word> {
        if row >= self.current_row {
            return None;
        }
        let text: Option<String> = self.board.get(row)?.iter().copied().collect();
        Word::new(text?).ok()
    }
}
