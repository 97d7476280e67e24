//! Interactive terminal UI

mod app;
mod rendering;

pub use app::{App, KeyCommand, action_for_key, run_tui};
pub use rendering::{board_lines, classification_color};
