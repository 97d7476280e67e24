//! Wordle Game
//!
//! A terminal Wordle built around a pure state machine: every front end
//! feeds [`game::Action`]s through [`game::apply`] and renders the resulting
//! [`game::GameState`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_game::core::Word;
//! use wordle_game::game::{Action, GameState, apply};
//! use wordle_game::wordlists::WordList;
//!
//! let dictionary = WordList::embedded(None).unwrap();
//! let mut state = GameState::with_solution(Word::new("crane").unwrap());
//!
//! for c in "slate".chars() {
//!     state = apply(&dictionary, &state, Action::TypeChar(c));
//! }
//! state = apply(&dictionary, &state, Action::SubmitRow);
//! println!("{}", state.row_feedback(0).unwrap().to_emoji());
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Action loop and shake timer
pub mod driver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
