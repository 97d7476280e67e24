//! Terminal output formatting
//!
//! Coloured boards, keyboards and result summaries for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_game_over, print_replay_result, print_simulation_result, write_board, write_keyboard,
    write_statistics,
};
