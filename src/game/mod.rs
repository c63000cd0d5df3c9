//! Game state and statistics
//!
//! Session state machine, secret word selection and the shared log of
//! finished games.

mod engine;
mod error;
pub mod selector;
pub mod session;
pub mod stats;

pub use engine::GameEngine;
pub use error::GameError;
pub use selector::WordSelector;
pub use session::{
    GameConfig, GameSession, GameState, Guess, GuessRow, MAX_GUESSES, SessionView,
};
pub use stats::{DashboardData, GUEST_PLAYER, GameRecord, StatsAggregator, StatsSummary};
