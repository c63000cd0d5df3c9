//! Secret word selection
//!
//! Draws secret words uniformly at random from a fixed, non-empty list.
//! The random source is passed in by the caller, so draws are reproducible
//! with a seeded generator.

use super::error::GameError;
use crate::core::Word;
use crate::wordlists::{ANSWERS, loader::words_from_slice};
use rand::Rng;

/// Uniform random picker over a non-empty word list
#[derive(Debug, Clone)]
pub struct WordSelector {
    words: Vec<Word>,
}

impl WordSelector {
    /// Create a selector over a custom word list
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Create a selector over the embedded answer list
    #[must_use]
    pub fn embedded() -> Self {
        let words = words_from_slice(ANSWERS);
        debug_assert!(!words.is_empty(), "embedded answer list must not be empty");
        Self { words }
    }

    /// Draw one word
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        let index = rng.random_range(0..self.words.len());
        self.words[index].clone()
    }

    /// All candidate words
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl Default for WordSelector {
    fn default() -> Self {
        Self::embedded()
    }
}
