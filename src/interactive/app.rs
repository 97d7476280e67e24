//! TUI application state and event loop

use crate::driver::Driver;
use crate::game::Action;
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Upper bound on how long the loop blocks waiting for input
const IDLE_POLL: Duration = Duration::from_millis(250);

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Dispatch(Action),
    Quit,
    Ignore,
}

/// Map a key press to a command
///
/// Only ASCII letters reach the game as `TypeChar`; every other printable
/// key is dropped here.
#[must_use]
pub fn action_for_key(key: KeyEvent, is_over: bool) -> KeyCommand {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c' | 'C') if ctrl => KeyCommand::Quit,
        KeyCode::Char('r' | 'R') if ctrl => KeyCommand::Dispatch(Action::Restart),
        KeyCode::Esc => KeyCommand::Quit,
        KeyCode::Char('n' | 'N') | KeyCode::Enter if is_over => {
            KeyCommand::Dispatch(Action::Restart)
        }
        KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => {
            KeyCommand::Dispatch(Action::TypeChar(c))
        }
        KeyCode::Backspace => KeyCommand::Dispatch(Action::RemoveChar),
        KeyCode::Enter => KeyCommand::Dispatch(Action::SubmitRow),
        _ => KeyCommand::Ignore,
    }
}

/// Application state
pub struct App<D: Dictionary> {
    pub driver: Driver<D>,
    pub should_quit: bool,
}

impl<D: Dictionary> App<D> {
    #[must_use]
    pub const fn new(driver: Driver<D>) -> Self {
        Self {
            driver,
            should_quit: false,
        }
    }

    /// Handle one key press at time `now`
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match action_for_key(key, self.driver.state().is_over()) {
            KeyCommand::Dispatch(action) => self.driver.dispatch(action, now),
            KeyCommand::Quit => self.should_quit = true,
            KeyCommand::Ignore => {}
        }
    }

    /// How long to wait for input before the next timer is due
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.driver
            .time_until_deadline(now)
            .map_or(IDLE_POLL, |left| left.min(IDLE_POLL))
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary>(app: App<D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, D: Dictionary>(
    terminal: &mut Terminal<B>,
    mut app: App<D>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        app.driver.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::driver::DriverConfig;
    use crate::game::GameState;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app(solution: &str) -> App<WordList> {
        let dict = WordList::seeded(words_from_slice(&["crane", "trace", "slate"]), 9).unwrap();
        let state = GameState::with_solution(Word::new(solution).unwrap());
        App::new(Driver::with_state(dict, state, DriverConfig::default()))
    }

    #[test]
    fn letters_type_and_others_are_filtered() {
        assert_eq!(
            action_for_key(key(KeyCode::Char('a')), false),
            KeyCommand::Dispatch(Action::TypeChar('a'))
        );
        assert_eq!(action_for_key(key(KeyCode::Char('1')), false), KeyCommand::Ignore);
        assert_eq!(action_for_key(key(KeyCode::Char('é')), false), KeyCommand::Ignore);
        assert_eq!(action_for_key(key(KeyCode::Tab), false), KeyCommand::Ignore);
    }

    #[test]
    fn editing_keys() {
        assert_eq!(
            action_for_key(key(KeyCode::Backspace), false),
            KeyCommand::Dispatch(Action::RemoveChar)
        );
        assert_eq!(
            action_for_key(key(KeyCode::Enter), false),
            KeyCommand::Dispatch(Action::SubmitRow)
        );
    }

    #[test]
    fn restart_and_quit_keys() {
        assert_eq!(action_for_key(ctrl('c'), false), KeyCommand::Quit);
        assert_eq!(action_for_key(key(KeyCode::Esc), true), KeyCommand::Quit);
        assert_eq!(
            action_for_key(ctrl('r'), false),
            KeyCommand::Dispatch(Action::Restart)
        );
    }

    #[test]
    fn n_and_enter_restart_only_when_over() {
        assert_eq!(
            action_for_key(key(KeyCode::Char('n')), true),
            KeyCommand::Dispatch(Action::Restart)
        );
        assert_eq!(
            action_for_key(key(KeyCode::Enter), true),
            KeyCommand::Dispatch(Action::Restart)
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char('n')), false),
            KeyCommand::Dispatch(Action::TypeChar('n'))
        );
    }

    #[test]
    fn typing_a_word_wins() {
        let mut app = app("crane");
        let now = Instant::now();
        for c in "crane".chars() {
            app.handle_key(key(KeyCode::Char(c)), now);
        }
        app.handle_key(key(KeyCode::Enter), now);

        assert!(app.driver.state().is_win());
        assert_eq!(app.driver.statistics().games_won, 1);
    }

    #[test]
    fn poll_timeout_follows_shake_deadline() {
        let mut app = app("crane");
        let now = Instant::now();
        assert_eq!(app.poll_timeout(now), IDLE_POLL);

        app.handle_key(key(KeyCode::Enter), now);
        assert!(app.driver.state().shake());
        assert!(app.poll_timeout(now) <= IDLE_POLL);

        let later = now + app.driver.config().shake_duration;
        assert_eq!(app.poll_timeout(later), Duration::ZERO);
    }

    #[test]
    fn escape_sets_quit() {
        let mut app = app("crane");
        app.handle_key(key(KeyCode::Esc), Instant::now());
        assert!(app.should_quit);
    }
}
