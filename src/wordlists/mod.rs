//! Word lists for the game
//!
//! Provides the embedded answer list compiled into the binary and a loader
//! for custom lists.

mod embedded;
pub mod loader;

pub use embedded::ANSWERS;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn answers_not_empty() {
        assert!(!ANSWERS.is_empty());
    }
}
