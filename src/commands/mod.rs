//! Command implementations

pub mod replay;
pub mod simple;
pub mod simulate;

pub use replay::{parse_script, replay, run_replay};
pub use simple::{run_simple, run_simple_with};
pub use simulate::{SimulateConfig, SimulationResult, run_simulation};
