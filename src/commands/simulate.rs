//! Self-play simulation
//!
//! Plays many games in parallel through the real state machine. The player
//! guesses a random word that is still consistent with every feedback row it
//! has seen, scored with the same rules the game uses.

use crate::core::{Word, score};
use crate::driver::Statistics;
use crate::game::{Action, GameState, apply};
use crate::wordlists::{Dictionary, WordList};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulateConfig {
    pub games: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            show_progress: true,
        }
    }
}

/// Outcome of a single simulated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub solution: String,
    pub guesses: Vec<String>,
    pub state: GameState,
}

/// Result of a simulation run
pub struct SimulationResult {
    pub games: Vec<GameRecord>,
    pub statistics: Statistics,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `config.games` games against `dictionary`
///
/// Each game draws its solution and its guesses from its own RNG seeded from
/// `config.seed` and the game index, so a run is reproducible regardless of
/// thread scheduling.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
#[must_use]
pub fn run_simulation(dictionary: &WordList, config: &SimulateConfig) -> SimulationResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let games: Vec<GameRecord> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let record = play_game(dictionary, &mut rng);
            pb.inc(1);
            record
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut statistics = Statistics::default();
    for game in &games {
        statistics.record(&game.state);
    }

    let duration = start.elapsed();
    let secs = duration.as_secs_f64();

    SimulationResult {
        games_per_second: if secs > 0.0 {
            config.games as f64 / secs
        } else {
            0.0
        },
        games,
        statistics,
        duration,
    }
}

/// Play one game to completion
#[must_use]
pub fn play_game(dictionary: &WordList, rng: &mut StdRng) -> GameRecord {
    let words = dictionary.words();
    let solution = words
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| dictionary.pick_random_solution());
    let mut state = GameState::with_solution(solution.clone());
    let mut candidates: Vec<&Word> = words.iter().collect();
    let mut guesses = Vec::new();

    while !state.is_over() {
        let Some(&guess) = candidates.choose(rng) else {
            break;
        };

        for letter in guess.text().chars() {
            state = apply(dictionary, &state, Action::TypeChar(letter));
        }
        state = apply(dictionary, &state, Action::SubmitRow);
        guesses.push(guess.text().to_string());

        let last_row = state.current_row_index().checked_sub(1);
        let Some(feedback) = last_row.and_then(|row| state.row_feedback(row)) else {
            break;
        };
        candidates.retain(|&candidate| score(candidate, guess) == feedback);
    }

    GameRecord {
        solution: solution.text().to_string(),
        guesses,
        state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_GUESSES;
    use crate::wordlists::loader::words_from_slice;

    fn small_dictionary() -> WordList {
        WordList::seeded(
            words_from_slice(&[
                "crane", "trace", "slate", "allow", "llama", "eerie", "react", "caret", "stare",
                "arose",
            ]),
            11,
        )
        .unwrap()
    }

    fn quiet(games: usize, seed: u64) -> SimulateConfig {
        SimulateConfig {
            games,
            seed,
            show_progress: false,
        }
    }

    #[test]
    fn every_game_finishes() {
        let dict = small_dictionary();
        let result = run_simulation(&dict, &quiet(40, 1));

        assert_eq!(result.games.len(), 40);
        assert_eq!(result.statistics.total_games, 40);
        for game in &result.games {
            assert!(game.state.is_over());
            assert!(game.guesses.len() <= MAX_GUESSES);
            assert_eq!(game.guesses.len(), game.state.current_row_index());
        }
    }

    #[test]
    fn solution_stays_a_candidate() {
        // The solution is never filtered out and every miss removes at least
        // the missed word, so with six words the sixth guess at the latest wins.
        let dict = WordList::seeded(
            words_from_slice(&["crane", "trace", "slate", "allow", "llama", "eerie"]),
            4,
        )
        .unwrap();
        let result = run_simulation(&dict, &quiet(25, 2));
        assert_eq!(result.statistics.games_won, 25);
    }

    #[test]
    fn runs_are_reproducible() {
        let dict = small_dictionary();
        let a = run_simulation(&dict, &quiet(10, 7));
        let b = run_simulation(&dict, &quiet(10, 7));

        let guesses_a: Vec<_> = a.games.iter().map(|g| g.guesses.clone()).collect();
        let guesses_b: Vec<_> = b.games.iter().map(|g| g.guesses.clone()).collect();
        assert_eq!(guesses_a, guesses_b);
    }

    #[test]
    fn winning_game_ends_with_solution() {
        let dict = small_dictionary();
        let mut rng = StdRng::seed_from_u64(3);
        let record = play_game(&dict, &mut rng);

        if record.state.is_win() {
            assert_eq!(record.guesses.last(), Some(&record.solution));
        }
    }
}
