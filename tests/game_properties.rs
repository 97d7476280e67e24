//! Invariants of the game state machine, exercised through the public API

use wordle_game::core::{Classification, KeyStatus, Word, score};
use wordle_game::game::{Action, GameState, MAX_GUESSES, apply};
use wordle_game::wordlists::Dictionary;

/// Dictionary with a fixed solution so restarts are predictable
struct Fixed {
    words: Vec<&'static str>,
    solution: &'static str,
}

impl Dictionary for Fixed {
    fn is_valid_word(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.eq_ignore_ascii_case(word))
    }

    fn pick_random_solution(&self) -> Word {
        Word::new(self.solution).unwrap()
    }
}

fn dictionary() -> Fixed {
    Fixed {
        words: vec![
            "crane", "trace", "slate", "allow", "llama", "eerie", "react", "caret", "stare",
        ],
        solution: "crane",
    }
}

fn play(dict: &Fixed, mut state: GameState, actions: &[Action]) -> GameState {
    for &action in actions {
        state = apply(dict, &state, action);
    }
    state
}

fn guess(word: &str) -> Vec<Action> {
    word.chars()
        .map(Action::TypeChar)
        .chain([Action::SubmitRow])
        .collect()
}

#[test]
fn buffer_never_exceeds_five() {
    let dict = dictionary();
    let letters: Vec<Action> = "abcdefghij".chars().map(Action::TypeChar).collect();
    let state = play(&dict, GameState::new(&dict), &letters);
    assert_eq!(state.buffer_text(), "ABCDE");
}

#[test]
fn input_state_is_never_mutated() {
    let dict = dictionary();
    let before = GameState::new(&dict);
    let snapshot = before.clone();
    let _ = apply(&dict, &before, Action::TypeChar('x'));
    let _ = apply(&dict, &before, Action::SubmitRow);
    assert_eq!(before, snapshot);
}

#[test]
fn submitted_rows_do_not_change() {
    let dict = dictionary();
    let state = play(&dict, GameState::new(&dict), &guess("trace"));
    let first_row = state.board()[0];

    let later = play(&dict, state, &[guess("slate"), guess("react")].concat());
    assert_eq!(later.board()[0], first_row);
    assert_eq!(later.current_row_index(), 3);
}

#[test]
fn win_on_exact_match() {
    let dict = dictionary();
    let state = play(&dict, GameState::new(&dict), &guess("crane"));
    assert!(state.is_over());
    assert!(state.is_win());
    assert_eq!(state.current_row_index(), 1);
}

#[test]
fn loss_after_six_misses() {
    let dict = dictionary();
    let misses = ["trace", "slate", "allow", "llama", "eerie", "react"];
    let actions: Vec<Action> = misses.iter().flat_map(|w| guess(w)).collect();
    let state = play(&dict, GameState::new(&dict), &actions);

    assert!(state.is_over());
    assert!(!state.is_win());
    assert_eq!(state.current_row_index(), MAX_GUESSES);

    // Nothing but ClearShake and Restart has an effect now
    let after = play(&dict, state.clone(), &guess("crane"));
    assert_eq!(after, state);
}

#[test]
fn rejected_submission_only_shakes() {
    let dict = dictionary();
    let letters: Vec<Action> = "zzzzz".chars().map(Action::TypeChar).collect();
    let typed = play(&dict, GameState::new(&dict), &letters);
    let rejected = apply(&dict, &typed, Action::SubmitRow);

    assert!(rejected.shake());
    assert_eq!(rejected.buffer_text(), "ZZZZZ");
    assert_eq!(rejected.current_row_index(), 0);
    assert!(rejected.keyboard().is_empty());
}

#[test]
fn restart_resets_everything() {
    let dict = dictionary();
    let actions = [guess("trace"), vec![Action::TypeChar('s')]].concat();
    let state = play(&dict, GameState::new(&dict), &actions);
    let restarted = apply(&dict, &state, Action::Restart);

    assert_eq!(restarted, GameState::with_solution(Word::new("crane").unwrap()));
}

#[test]
fn duplicate_letters_scored_without_context() {
    // LLAMA against ALLOW: every letter is judged on its own, so both A's
    // are yellow although the solution holds a single A.
    let solution = Word::new("allow").unwrap();
    let feedback = score(&solution, &Word::new("llama").unwrap());
    assert_eq!(
        feedback.classifications(),
        &[
            Classification::Yellow,
            Classification::Green,
            Classification::Yellow,
            Classification::Black,
            Classification::Yellow,
        ]
    );
    assert_eq!(feedback.count(Classification::Yellow), 3);
}

#[test]
fn keyboard_keeps_last_classification() {
    // Solution SLATE, guess EERIE: the first E is yellow, the last E is
    // green, so the key ends green.
    let dict = Fixed {
        words: vec!["slate", "eerie", "react"],
        solution: "slate",
    };
    let state = play(&dict, GameState::new(&dict), &guess("eerie"));
    assert_eq!(state.keyboard().get('E'), KeyStatus::Known(Classification::Green));

    // REACT puts E in the wrong place, and the key is downgraded to yellow
    let state = play(&dict, state, &guess("react"));
    assert_eq!(state.keyboard().get('E'), KeyStatus::Known(Classification::Yellow));
    assert_eq!(state.keyboard().get('A'), KeyStatus::Known(Classification::Green));
    assert_eq!(state.keyboard().get('R'), KeyStatus::Known(Classification::Black));
}
