//! Per-letter feedback for a guess
//!
//! Each position of a guess is labeled with exactly one [`Status`]:
//! - Correct: letter is in the secret word at this position
//! - Present: letter is in the secret word, but elsewhere
//! - Absent: letter is not in the secret word (or its budget is used up)

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Status of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Correct,
    Present,
    Absent,
}

impl Status {
    /// Emoji square used for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-letter code: `G`, `Y` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for one guess, one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Status; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([Status::Correct; WORD_LENGTH]);

    /// Build feedback from explicit statuses
    #[must_use]
    pub const fn new(statuses: [Status; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Score `guess` against `answer`
    ///
    /// Implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. Count every letter of the answer
    /// 2. First pass: mark all exact matches Correct and spend their letter budget
    /// 3. Second pass: left to right over the rest, mark Present while budget remains
    ///
    /// All exact matches must be resolved before any Present is granted,
    /// otherwise an early misplaced duplicate can take the credit of a later
    /// exact match.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Status, Word};
    ///
    /// let guess = Word::new("allee").unwrap();
    /// let answer = Word::new("apple").unwrap();
    /// let feedback = Feedback::score(&guess, &answer);
    ///
    /// assert_eq!(feedback.to_string(), "GY--G");
    /// assert_eq!(feedback.statuses()[1], Status::Present);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut result = [Status::Absent; WORD_LENGTH];
        let mut answer_available = answer.char_counts();
        let mut matched = [false; WORD_LENGTH];

        // First pass: exact position matches
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Status::Correct;
                matched[i] = true;
                if let Some(count) = answer_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but letter budget left
        for (i, &letter) in guess.chars().iter().enumerate() {
            if matched[i] {
                continue;
            }
            if let Some(count) = answer_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = Status::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Statuses in position order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[Status; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is Correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of Correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&s| s == Status::Correct).count()
    }

    /// Count the number of Present positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&s| s == Status::Present).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// let f1 = Feedback::from_str("GY-GY").unwrap();
    /// let f2 = Feedback::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let mut result = [Status::Absent; WORD_LENGTH];
        let mut len = 0;

        for ch in s.chars() {
            if len == WORD_LENGTH {
                return None;
            }
            result[len] = match ch {
                'G' | 'g' | '🟩' => Status::Correct,
                'Y' | 'y' | '🟨' => Status::Present,
                '-' | '_' | '⬜' => Status::Absent,
                _ => return None,
            };
            len += 1;
        }

        (len == WORD_LENGTH).then_some(Self(result))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
