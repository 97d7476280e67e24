//! TUI rendering with ratatui
//!
//! Draws the board, the on-screen keyboard and the session statistics. All
//! colours come from the state snapshot; nothing here knows the rules.

use super::app::App;
use crate::core::{Classification, KEYBOARD_ROWS, Key, KeyStatus};
use crate::game::{GameState, MAX_GUESSES};
use crate::wordlists::Dictionary;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui<D: Dictionary>(f: &mut Frame, app: &App<D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                      // Header
            Constraint::Length(MAX_GUESSES as u16 + 2), // Board
            Constraint::Length(3),                      // Message
            Constraint::Length(5),                      // Keyboard
            Constraint::Min(0),
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    let state = app.driver.state();

    render_header(f, chunks[0]);
    render_board(f, state, chunks[1]);
    render_message(f, state, chunks[2]);
    render_keyboard(f, state, chunks[3]);
    render_status(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Background colour for a scored letter
#[must_use]
pub const fn classification_color(classification: Classification) -> Color {
    match classification {
        Classification::Green => Color::Green,
        Classification::Yellow => Color::Yellow,
        Classification::Black => Color::DarkGray,
    }
}

fn tile_span(letter: Option<char>, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.unwrap_or('·')), style)
}

/// One line per board row
#[must_use]
pub fn board_lines(state: &GameState) -> Vec<Line<'static>> {
    let scored = Style::default().fg(Color::Black).add_modifier(Modifier::BOLD);
    let pending = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let shaking = Style::default().fg(Color::White).bg(Color::Red);
    let empty = Style::default().fg(Color::DarkGray);

    state
        .board()
        .iter()
        .enumerate()
        .map(|(r, row)| {
            let spans: Vec<Span> = if let Some(feedback) = state.row_feedback(r) {
                row.iter()
                    .zip(feedback.classifications())
                    .map(|(&cell, &c)| tile_span(cell, scored.bg(classification_color(c))))
                    .collect()
            } else if r == state.current_row_index() && !state.is_over() {
                let style = if state.shake() { shaking } else { pending };
                state
                    .current_row()
                    .iter()
                    .map(|&cell| tile_span(cell, style))
                    .collect()
            } else {
                row.iter().map(|&cell| tile_span(cell, empty)).collect()
            };
            Line::from(spans)
        })
        .collect()
}

fn render_board(f: &mut Frame, state: &GameState, area: Rect) {
    let board = Paragraph::new(board_lines(state))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_message(f: &mut Frame, state: &GameState, area: Rect) {
    let (text, color) = if state.is_over() && state.is_win() {
        let turns = state.current_row_index();
        (
            format!("🎉 Solved in {turns}/{MAX_GUESSES}! Press 'n' for a new game"),
            Color::Green,
        )
    } else if state.is_over() {
        (
            format!(
                "Game Over! The word was {}. Press 'n' for a new game",
                state.solution()
            ),
            Color::Red,
        )
    } else if state.shake() {
        ("Not a word!".to_string(), Color::Red)
    } else {
        (String::new(), Color::White)
    };

    let message = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn key_span(key: Key, state: &GameState) -> Span<'static> {
    let style = match key {
        Key::Letter(letter) => match state.keyboard().get(char::from(letter)) {
            KeyStatus::Known(c) => Style::default()
                .fg(Color::Black)
                .bg(classification_color(c))
                .add_modifier(Modifier::BOLD),
            KeyStatus::Unknown => Style::default().fg(Color::White),
        },
        Key::Enter | Key::Backspace => Style::default().fg(Color::Cyan),
    };
    Span::styled(format!(" {} ", key.label()), style)
}

fn render_keyboard(f: &mut Frame, state: &GameState, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| Line::from(row.iter().map(|&key| key_span(key, state)).collect::<Vec<_>>()))
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(keyboard, area);
}

fn render_status<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats = app.driver.statistics();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {} (max {})",
        stats.total_games,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help = Paragraph::new("Esc: Quit | Ctrl-R: Restart | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
