//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with no game state.
//! All types here are pure, testable, and cheap to copy or clone.

mod feedback;
mod word;

pub use feedback::{Feedback, Status};
pub use word::{WORD_LENGTH, Word, WordError};
