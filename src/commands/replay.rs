//! Replay an action script
//!
//! A script holds one action per line (`type c`, `remove`, `submit`,
//! `clear_shake`, `restart`). Blank lines and `#` comments are skipped. This
//! is the one place untyped actions enter the game, so every line is parsed
//! and validated before anything is applied.

use crate::core::Word;
use crate::game::{Action, GameState, apply};
use crate::wordlists::Dictionary;
use std::fs;
use std::path::Path;

/// Parse a whole script, reporting the first bad line
///
/// # Errors
///
/// Returns `line N: <reason>` for the first line that is not a valid action.
pub fn parse_script(content: &str) -> Result<Vec<Action>, String> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| {
            line.parse::<Action>()
                .map_err(|e| format!("line {}: {e}", i + 1))
        })
        .collect()
}

/// Apply actions in order, returning every intermediate state
#[must_use]
pub fn replay<D: Dictionary + ?Sized>(
    dictionary: &D,
    initial: GameState,
    actions: &[Action],
) -> Vec<GameState> {
    let mut states = Vec::with_capacity(actions.len() + 1);
    states.push(initial);
    for &action in actions {
        if let Some(last) = states.last() {
            let next = apply(dictionary, last, action);
            states.push(next);
        }
    }
    states
}

/// Load a script file and run it against a fixed or random solution
///
/// # Errors
///
/// Returns an error if the file cannot be read, a line is not a valid
/// action, or the forced solution is not a dictionary word.
pub fn run_replay<D: Dictionary + ?Sized, P: AsRef<Path>>(
    dictionary: &D,
    path: P,
    solution: Option<&str>,
) -> Result<GameState, String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let actions = parse_script(&content)?;

    let initial = match solution {
        Some(text) => {
            let word = Word::new(text).map_err(|e| format!("Invalid solution: {e}"))?;
            if !dictionary.is_valid_word(word.text()) {
                return Err(format!("Solution '{word}' is not in the word list"));
            }
            GameState::with_solution(word)
        }
        None => GameState::new(dictionary),
    };

    replay(dictionary, initial, &actions)
        .pop()
        .ok_or_else(|| "Replay produced no state".to_string())
}
