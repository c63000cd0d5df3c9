//! Errors raised by game operations
//!
//! None of these are fatal: a rejected operation leaves every piece of
//! state exactly as it was.

use super::session::GameState;
use crate::core::WordError;
use thiserror::Error;

/// Reasons a game operation is declined
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Guess text is not a valid word
    #[error("invalid guess: {0}")]
    InvalidInput(#[from] WordError),

    /// Operation is not allowed in the session's current state
    #[error("cannot {action} while game is {state}")]
    IllegalTransition {
        action: &'static str,
        state: GameState,
    },

    /// A word list with no usable words
    #[error("word list contains no valid words")]
    EmptyWordList,
}
