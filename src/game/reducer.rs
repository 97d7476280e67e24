//! The transition function
//!
//! `apply(dictionary, state, action)` returns the next state. It is total
//! over [`Action`], never mutates its input and never fails: rejected
//! submissions only raise the shake flag.

use super::action::Action;
use super::state::{GameState, MAX_GUESSES};
use crate::core::{WORD_LENGTH, Word, score};
use crate::wordlists::Dictionary;

/// Apply one action to a state and return the resulting state
///
/// # Examples
/// ```
/// use wordle_game::game::{Action, GameState, apply};
/// use wordle_game::wordlists::{WordList, loader::words_from_slice};
/// use wordle_game::core::Word;
///
/// let dictionary = WordList::seeded(words_from_slice(&["crane", "trace"]), 1).unwrap();
/// let mut state = GameState::with_solution(Word::new("crane").unwrap());
/// for c in "trace".chars() {
///     state = apply(&dictionary, &state, Action::TypeChar(c));
/// }
/// state = apply(&dictionary, &state, Action::SubmitRow);
///
/// assert_eq!(state.current_row_index(), 1);
/// assert!(!state.is_over());
/// ```
#[must_use]
pub fn apply<D: Dictionary + ?Sized>(
    dictionary: &D,
    state: &GameState,
    action: Action,
) -> GameState {
    if state.is_over && action.is_gameplay() {
        return state.clone();
    }

    match action {
        Action::TypeChar(letter) => type_char(state, letter),
        Action::RemoveChar => remove_char(state),
        Action::SubmitRow => submit_row(dictionary, state),
        Action::ClearShake => GameState {
            shake: false,
            ..state.clone()
        },
        Action::Restart => GameState::new(dictionary),
    }
}

fn type_char(state: &GameState, letter: char) -> GameState {
    if state.buffer.len() >= WORD_LENGTH {
        return state.clone();
    }

    let mut next = state.clone();
    // Some characters uppercase to more than one; keep what still fits
    for upper in letter.to_uppercase() {
        if next.buffer.len() < WORD_LENGTH {
            next.buffer.push(upper);
        }
    }
    next
}

fn remove_char(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.buffer.pop();
    next
}

fn submit_row<D: Dictionary + ?Sized>(dictionary: &D, state: &GameState) -> GameState {
    let Some(guess) = accepted_guess(dictionary, state) else {
        return GameState {
            shake: true,
            ..state.clone()
        };
    };

    let feedback = score(&state.solution, &guess);
    let keyboard = guess
        .letters()
        .iter()
        .zip(feedback.classifications())
        .fold(state.keyboard.clone(), |keys, (&letter, &classification)| {
            keys.update(char::from(letter), classification)
        });

    let mut board = state.board;
    for (cell, &letter) in board[state.current_row].iter_mut().zip(guess.letters()) {
        *cell = Some(char::from(letter));
    }

    let is_win = guess == state.solution;

    GameState {
        solution: state.solution.clone(),
        board,
        buffer: Vec::with_capacity(WORD_LENGTH),
        current_row: state.current_row + 1,
        is_over: is_win || state.current_row == MAX_GUESSES - 1,
        is_win,
        keyboard,
        shake: state.shake,
    }
}

/// The buffer as a dictionary word, or `None` if the row must be rejected
fn accepted_guess<D: Dictionary + ?Sized>(dictionary: &D, state: &GameState) -> Option<Word> {
    if state.buffer.len() < WORD_LENGTH || state.current_row >= MAX_GUESSES {
        return None;
    }

    let text = state.buffer_text().to_uppercase();
    if !dictionary.is_valid_word(&text) {
        return None;
    }

    Word::new(&text).ok()
}
