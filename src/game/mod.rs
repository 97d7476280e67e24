//! Game state machine
//!
//! [`GameState`] is the authoritative state of one game and [`apply`] is the
//! only way to move it forward. Drivers hold one state value and feed it
//! [`Action`]s; nothing in this module keeps global state or touches time.

mod action;
mod reducer;
mod state;

pub use action::{Action, ActionError};
pub use reducer::apply;
pub use state::{GameState, MAX_GUESSES, Row};
