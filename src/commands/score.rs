//! Score command
//!
//! Shows the feedback a single guess would receive against a given answer.

use crate::core::{Feedback, Word};
use crate::game::GameError;

/// Result of scoring one guess
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns `GameError::InvalidInput` if either word is not 5 ASCII letters.
pub fn score_words(guess: &str, answer: &str) -> Result<ScoreResult, GameError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    let feedback = Feedback::score(&guess, &answer);

    Ok(ScoreResult {
        guess,
        answer,
        feedback,
    })
}
