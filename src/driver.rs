//! Action loop shared by every front end
//!
//! A [`Driver`] owns one [`GameState`] and feeds it actions. It also owns the
//! only timer in the game: after a rejected submission it schedules a
//! `ClearShake` for `shake_duration` later. Time is passed in explicitly so
//! the loop can be tested without sleeping.

use crate::game::{Action, GameState, MAX_GUESSES, apply};
use crate::wordlists::Dictionary;
use std::time::{Duration, Instant};

/// How long a rejected row keeps shaking
pub const DEFAULT_SHAKE_DURATION: Duration = Duration::from_millis(500);

/// Driver settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    pub shake_duration: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            shake_duration: DEFAULT_SHAKE_DURATION,
        }
    }
}

/// Results of the games finished in this session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n - 1` counts wins in `n` guesses
    pub guess_distribution: [usize; MAX_GUESSES],
    pub current_streak: usize,
    pub max_streak: usize,
}

impl Statistics {
    /// Record a finished game
    pub fn record(&mut self, state: &GameState) {
        self.total_games += 1;

        if state.is_win() {
            self.games_won += 1;
            if let Some(slot) = self
                .guess_distribution
                .get_mut(state.current_row_index().saturating_sub(1))
            {
                *slot += 1;
            }
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Mean number of guesses over won games
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }
        let total: usize = self
            .guess_distribution
            .iter()
            .enumerate()
            .map(|(i, count)| (i + 1) * count)
            .sum();
        Some(total as f64 / self.games_won as f64)
    }
}

/// Holds the game state and the pending shake timer
pub struct Driver<D: Dictionary> {
    dictionary: D,
    state: GameState,
    config: DriverConfig,
    clear_shake_at: Option<Instant>,
    stats: Statistics,
}

impl<D: Dictionary> Driver<D> {
    #[must_use]
    pub fn new(dictionary: D, config: DriverConfig) -> Self {
        let state = GameState::new(&dictionary);
        Self::with_state(dictionary, state, config)
    }

    /// Start from an existing state, e.g. a game with a known solution
    #[must_use]
    pub fn with_state(dictionary: D, state: GameState, config: DriverConfig) -> Self {
        Self {
            dictionary,
            state,
            config,
            clear_shake_at: None,
            stats: Statistics::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// When the pending `ClearShake` will fire, if one is scheduled
    #[must_use]
    pub const fn pending_clear(&self) -> Option<Instant> {
        self.clear_shake_at
    }

    /// Apply an action at time `now`
    pub fn dispatch(&mut self, action: Action, now: Instant) {
        let next = apply(&self.dictionary, &self.state, action);

        if matches!(action, Action::Restart) {
            self.clear_shake_at = None;
        } else if next.shake() && !self.state.shake() {
            // A shake raised while one is already showing does not re-arm the
            // timer; the earlier clear still fires at its original deadline.
            self.clear_shake_at = Some(now + self.config.shake_duration);
        }

        if next.is_over() && !self.state.is_over() {
            self.stats.record(&next);
        }

        self.state = next;
    }

    /// Fire the pending `ClearShake` if its deadline has passed
    ///
    /// Returns `true` if the state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.clear_shake_at {
            Some(deadline) if now >= deadline => {
                self.clear_shake_at = None;
                let before = self.state.shake();
                self.dispatch(Action::ClearShake, now);
                before
            }
            _ => false,
        }
    }

    /// Time left until the next timer fires, for use as a poll timeout
    #[must_use]
    pub fn time_until_deadline(&self, now: Instant) -> Option<Duration> {
        self.clear_shake_at
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;

    fn driver(solution: &str) -> Driver<WordList> {
        let dict = WordList::seeded(
            words_from_slice(&["crane", "trace", "slate", "allow", "llama", "eerie"]),
            3,
        )
        .unwrap();
        let state = GameState::with_solution(Word::new(solution).unwrap());
        Driver::with_state(dict, state, DriverConfig::default())
    }

    fn submit(driver: &mut Driver<WordList>, word: &str, now: Instant) {
        for c in word.chars() {
            driver.dispatch(Action::TypeChar(c), now);
        }
        driver.dispatch(Action::SubmitRow, now);
    }

    #[test]
    fn rejection_schedules_clear() {
        let mut d = driver("crane");
        let t0 = Instant::now();

        d.dispatch(Action::SubmitRow, t0);
        assert!(d.state().shake());
        assert_eq!(d.pending_clear(), Some(t0 + DEFAULT_SHAKE_DURATION));
        assert_eq!(d.time_until_deadline(t0), Some(DEFAULT_SHAKE_DURATION));
    }

    #[test]
    fn tick_before_deadline_does_nothing() {
        let mut d = driver("crane");
        let t0 = Instant::now();
        d.dispatch(Action::SubmitRow, t0);

        assert!(!d.tick(t0 + Duration::from_millis(499)));
        assert!(d.state().shake());
    }

    #[test]
    fn tick_after_deadline_clears_shake() {
        let mut d = driver("crane");
        let t0 = Instant::now();
        d.dispatch(Action::SubmitRow, t0);

        assert!(d.tick(t0 + DEFAULT_SHAKE_DURATION));
        assert!(!d.state().shake());
        assert_eq!(d.pending_clear(), None);
        assert!(!d.tick(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn second_rejection_keeps_first_deadline() {
        let mut d = driver("crane");
        let t0 = Instant::now();
        d.dispatch(Action::SubmitRow, t0);

        let t1 = t0 + Duration::from_millis(400);
        submit(&mut d, "zzzzz", t1);
        assert!(d.state().shake());
        assert_eq!(d.pending_clear(), Some(t0 + DEFAULT_SHAKE_DURATION));

        // The stale clear hides the newer rejection early
        assert!(d.tick(t0 + DEFAULT_SHAKE_DURATION));
        assert!(!d.state().shake());
    }

    #[test]
    fn restart_cancels_pending_clear() {
        let mut d = driver("crane");
        let t0 = Instant::now();
        d.dispatch(Action::SubmitRow, t0);
        d.dispatch(Action::Restart, t0);

        assert_eq!(d.pending_clear(), None);
        assert!(!d.state().shake());
    }

    #[test]
    fn custom_shake_duration() {
        let dict = WordList::seeded(words_from_slice(&["crane"]), 1).unwrap();
        let config = DriverConfig {
            shake_duration: Duration::from_millis(50),
        };
        let mut d = Driver::new(dict, config);
        let t0 = Instant::now();
        d.dispatch(Action::SubmitRow, t0);
        assert_eq!(d.pending_clear(), Some(t0 + Duration::from_millis(50)));
    }

    #[test]
    fn win_is_recorded_once() {
        let mut d = driver("crane");
        let now = Instant::now();
        submit(&mut d, "trace", now);
        submit(&mut d, "crane", now);
        // Further input on a finished game is ignored and not recorded again
        submit(&mut d, "slate", now);

        let stats = d.statistics();
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution, [0, 1, 0, 0, 0, 0]);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.average_guesses(), Some(2.0));
    }

    #[test]
    fn loss_resets_streak() {
        let mut d = driver("crane");
        let now = Instant::now();
        submit(&mut d, "crane", now);

        d.dispatch(Action::Restart, now);
        let solution = d.state().solution().text().to_string();
        let misses: Vec<&str> = ["trace", "slate", "allow", "llama", "eerie", "crane"]
            .into_iter()
            .filter(|w| !w.eq_ignore_ascii_case(&solution))
            .collect();
        for word in misses.iter().cycle().take(MAX_GUESSES) {
            submit(&mut d, word, now);
        }

        let stats = d.statistics();
        assert!(d.state().is_over());
        assert!(!d.state().is_win());
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }
}
