//! Command implementations

pub mod play;
pub mod score;
pub mod simulate;

pub use play::{run_play, run_play_with};
pub use score::{ScoreResult, score_words};
pub use simulate::{PlayerStrategy, SimulateConfig, SimulationResult, run_simulation};
