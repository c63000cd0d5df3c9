//! One player's game: secret word, guess history and derived state
//!
//! A session starts `Active` with no guesses. Each accepted guess is scored
//! and appended; the state is then re-derived from the history:
//! - last guess all Correct → `Won` (even on the final allowed guess)
//! - otherwise, guess limit reached → `Lost`
//! - otherwise → `Active`
//!
//! Terminal sessions accept nothing but [`GameSession::restart`], which
//! returns a brand-new session.

use super::error::GameError;
use super::selector::WordSelector;
use crate::core::{Feedback, Status, WORD_LENGTH, Word};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::fmt;
use tracing::{debug, info, warn};

/// Default number of guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// Per-session rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
}

impl GameConfig {
    /// The same rules with a guess limit of at least one
    #[must_use]
    pub const fn normalized(self) -> Self {
        if self.max_guesses == 0 {
            Self { max_guesses: 1 }
        } else {
            self
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
        }
    }
}

/// Derived state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Active,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// A submitted word paired with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    feedback: Feedback,
}

impl Guess {
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Display row for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    /// 1-based guess number
    pub number: usize,
    pub word: String,
    pub letters: [(char, Status); WORD_LENGTH],
}

impl GuessRow {
    #[must_use]
    pub fn new(number: usize, word: &Word, feedback: Feedback) -> Self {
        let mut letters = [(' ', Status::Absent); WORD_LENGTH];
        for (slot, (&ch, &status)) in letters
            .iter_mut()
            .zip(word.chars().iter().zip(feedback.statuses()))
        {
            *slot = (char::from(ch), status);
        }
        Self {
            number,
            word: word.text().to_string(),
            letters,
        }
    }
}

/// Read-only snapshot of a session
///
/// `secret` is `None` while the game is still `Active`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView<'a> {
    pub state: GameState,
    pub guesses: &'a [Guess],
    pub secret: Option<&'a Word>,
    pub elapsed_seconds: u64,
    pub guesses_remaining: usize,
}

/// State machine for a single game
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    guesses: Vec<Guess>,
    started_at: DateTime<Utc>,
    config: GameConfig,
    recorded: bool,
}

impl GameSession {
    /// Start a game around a known secret word with default rules
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self::with_config(secret, GameConfig::default())
    }

    /// Start a game around a known secret word
    ///
    /// A `max_guesses` of zero is raised to one.
    #[must_use]
    pub fn with_config(secret: Word, config: GameConfig) -> Self {
        let config = config.normalized();
        Self {
            secret,
            guesses: Vec::with_capacity(config.max_guesses),
            started_at: Utc::now(),
            config,
            recorded: false,
        }
    }

    /// Start a game with a freshly drawn secret word
    pub fn start<R: Rng + ?Sized>(
        selector: &WordSelector,
        rng: &mut R,
        config: GameConfig,
    ) -> Self {
        let session = Self::with_config(selector.pick(rng), config);
        debug!(max_guesses = session.config.max_guesses, "new session started");
        session
    }

    /// Replace this session with a brand-new one
    ///
    /// Always allowed. The new session keeps the rules but draws a fresh
    /// secret word, has no guesses, a new start time and is unrecorded.
    #[must_use]
    pub fn restart<R: Rng + ?Sized>(self, selector: &WordSelector, rng: &mut R) -> Self {
        debug!(previous_state = %self.state(), "session restarted");
        Self::start(selector, rng, self.config)
    }

    /// Submit a guess
    ///
    /// The text is normalized to uppercase and scored against the secret.
    ///
    /// # Errors
    /// - `GameError::IllegalTransition` if the game is already won or lost
    /// - `GameError::InvalidInput` if the text is not a 5-letter word
    ///
    /// The session is unchanged when an error is returned.
    pub fn submit_guess(&mut self, raw: &str) -> Result<&Guess, GameError> {
        let state = self.state();
        if state.is_terminal() {
            warn!(%state, "guess rejected: game is over");
            return Err(GameError::IllegalTransition {
                action: "submit a guess",
                state,
            });
        }

        let word = Word::new(raw).map_err(|e| {
            warn!(error = %e, "guess rejected: invalid input");
            GameError::from(e)
        })?;
        let feedback = Feedback::score(&word, &self.secret);
        debug!(guess = %word, %feedback, number = self.guesses.len() + 1, "guess scored");

        self.guesses.push(Guess { word, feedback });

        let state = self.state();
        if state.is_terminal() {
            info!(%state, guesses = self.guesses.len(), "game finished");
        }

        let index = self.guesses.len() - 1;
        Ok(&self.guesses[index])
    }

    /// Current state, derived from the guess history
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.guesses.last().is_some_and(|g| g.feedback.is_perfect()) {
            GameState::Won
        } else if self.guesses.len() >= self.config.max_guesses {
            GameState::Lost
        } else {
            GameState::Active
        }
    }

    /// Guesses in submission order
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// The secret word, once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.state().is_terminal().then_some(&self.secret)
    }

    pub(crate) fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Whole seconds between the start of the game and `now`, never negative
    #[must_use]
    pub fn elapsed_seconds_at(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from((now - self.started_at).num_seconds()).unwrap_or(0)
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds_at(Utc::now())
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        if self.state().is_terminal() {
            0
        } else {
            self.config.max_guesses - self.guesses.len()
        }
    }

    /// Whether this session's outcome has been handed to the stats log
    #[must_use]
    pub const fn is_recorded(&self) -> bool {
        self.recorded
    }

    /// Flip the recorded flag if the session is terminal and not yet recorded
    ///
    /// Returns `true` exactly once per session.
    pub(crate) fn mark_recorded(&mut self) -> bool {
        if self.recorded || !self.state().is_terminal() {
            return false;
        }
        self.recorded = true;
        true
    }

    /// Snapshot for the presentation layer
    #[must_use]
    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            state: self.state(),
            guesses: &self.guesses,
            secret: self.revealed_secret(),
            elapsed_seconds: self.elapsed_seconds(),
            guesses_remaining: self.guesses_remaining(),
        }
    }

    /// Display rows, one per guess, numbered from 1
    #[must_use]
    pub fn rows(&self) -> Vec<GuessRow> {
        self.guesses
            .iter()
            .enumerate()
            .map(|(i, guess)| GuessRow::new(i + 1, &guess.word, guess.feedback))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(secret: &str) -> GameSession {
        GameSession::new(Word::new(secret).unwrap())
    }

    #[test]
    fn new_session_is_active_and_empty() {
        let game = session("apple");
        assert_eq!(game.state(), GameState::Active);
        assert!(game.guesses().is_empty());
        assert!(!game.is_recorded());
        assert_eq!(game.guesses_remaining(), MAX_GUESSES);
        assert!(game.revealed_secret().is_none());
    }

    #[test]
    fn guess_is_normalized_and_scored() {
        let mut game = session("apple");
        let guess = game.submit_guess("allee").unwrap();

        assert_eq!(guess.word().text(), "ALLEE");
        assert_eq!(guess.feedback().to_string(), "GY--G");
        assert_eq!(game.guesses().len(), 1);
        assert_eq!(game.state(), GameState::Active);
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut game = session("crane");
        game.submit_guess("brave").unwrap();
        game.submit_guess("CRANE").unwrap();

        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.revealed_secret().unwrap().text(), "CRANE");
        assert_eq!(game.guesses_remaining(), 0);
    }

    #[test]
    fn six_misses_lose() {
        let mut game = session("epoch");
        for _ in 0..MAX_GUESSES {
            game.submit_guess("brave").unwrap();
        }
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.revealed_secret().unwrap().text(), "EPOCH");
    }

    #[test]
    fn win_on_final_guess_is_won_not_lost() {
        let mut game = session("dance");
        for _ in 0..MAX_GUESSES - 1 {
            game.submit_guess("epoch").unwrap();
        }
        assert_eq!(game.state(), GameState::Active);

        game.submit_guess("dance").unwrap();
        assert_eq!(game.guesses().len(), MAX_GUESSES);
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn seventh_guess_is_illegal_and_changes_nothing() {
        let mut game = session("epoch");
        for _ in 0..MAX_GUESSES {
            game.submit_guess("brave").unwrap();
        }

        let err = game.submit_guess("epoch").unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalTransition {
                action: "submit a guess",
                state: GameState::Lost,
            }
        );
        assert_eq!(game.guesses().len(), MAX_GUESSES);
        assert_eq!(game.state(), GameState::Lost);
    }

    #[test]
    fn guess_after_win_is_illegal() {
        let mut game = session("brave");
        game.submit_guess("brave").unwrap();

        assert!(matches!(
            game.submit_guess("crane"),
            Err(GameError::IllegalTransition {
                state: GameState::Won,
                ..
            })
        ));
        // Malformed input on a finished game is still an illegal transition
        assert!(matches!(
            game.submit_guess("x"),
            Err(GameError::IllegalTransition { .. })
        ));
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn invalid_input_rejected_without_mutation() {
        let mut game = session("apple");
        assert_eq!(
            game.submit_guess("appl").unwrap_err(),
            GameError::InvalidInput(WordError::InvalidLength(4))
        );
        assert_eq!(
            game.submit_guess("app1e").unwrap_err(),
            GameError::InvalidInput(WordError::InvalidCharacters)
        );
        assert!(game.guesses().is_empty());
        assert_eq!(game.state(), GameState::Active);
    }

    #[test]
    fn invalid_input_does_not_use_up_attempts() {
        let mut game = session("apple");
        for _ in 0..10 {
            assert!(game.submit_guess("nope").is_err());
        }
        assert_eq!(game.guesses_remaining(), MAX_GUESSES);
    }

    #[test]
    fn custom_guess_limit() {
        let mut game =
            GameSession::with_config(Word::new("apple").unwrap(), GameConfig { max_guesses: 2 });
        game.submit_guess("brave").unwrap();
        game.submit_guess("brave").unwrap();
        assert_eq!(game.state(), GameState::Lost);
    }

    #[test]
    fn zero_guess_limit_is_raised_to_one() {
        let game =
            GameSession::with_config(Word::new("apple").unwrap(), GameConfig { max_guesses: 0 });
        assert_eq!(game.config().max_guesses, 1);
        assert_eq!(game.state(), GameState::Active);
    }

    #[test]
    fn restart_produces_fresh_session() {
        let selector = WordSelector::embedded();
        let mut rng = StdRng::seed_from_u64(9);
        let mut game = GameSession::start(&selector, &mut rng, GameConfig::default());
        let secret = game.secret().clone();
        game.submit_guess(secret.text()).unwrap();
        assert!(game.mark_recorded());

        let fresh = game.restart(&selector, &mut rng);
        assert_eq!(fresh.state(), GameState::Active);
        assert!(fresh.guesses().is_empty());
        assert!(!fresh.is_recorded());
        assert!(selector.words().contains(fresh.secret()));
    }

    #[test]
    fn restart_allowed_while_active() {
        let selector = WordSelector::embedded();
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = GameSession::start(&selector, &mut rng, GameConfig { max_guesses: 3 });
        game.submit_guess("zzzzz").unwrap();

        let fresh = game.restart(&selector, &mut rng);
        assert!(fresh.guesses().is_empty());
        assert_eq!(fresh.config().max_guesses, 3);
    }

    #[test]
    fn mark_recorded_only_once_and_only_when_terminal() {
        let mut game = session("apple");
        assert!(!game.mark_recorded());

        game.submit_guess("apple").unwrap();
        assert!(game.mark_recorded());
        assert!(!game.mark_recorded());
        assert!(game.is_recorded());
    }

    #[test]
    fn elapsed_seconds_never_negative() {
        let game = session("apple");
        let before = game.started_at() - chrono::Duration::seconds(30);
        let after = game.started_at() + chrono::Duration::seconds(42);

        assert_eq!(game.elapsed_seconds_at(before), 0);
        assert_eq!(game.elapsed_seconds_at(after), 42);
    }

    #[test]
    fn view_hides_secret_while_active() {
        let mut game = session("epoch");
        game.submit_guess("chope").unwrap();

        let view = game.view();
        assert_eq!(view.state, GameState::Active);
        assert_eq!(view.guesses.len(), 1);
        assert!(view.secret.is_none());
        assert_eq!(view.guesses_remaining, MAX_GUESSES - 1);
    }

    #[test]
    fn rows_project_guesses_in_order() {
        let mut game = session("epoch");
        game.submit_guess("chope").unwrap();
        game.submit_guess("epoch").unwrap();

        let rows = game.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[0].word, "CHOPE");
        assert_eq!(rows[0].letters[0], ('C', Status::Present));
        assert!(rows[0].letters.iter().all(|&(_, s)| s == Status::Present));
        assert_eq!(rows[1].number, 2);
        assert!(rows[1].letters.iter().all(|&(_, s)| s == Status::Correct));

        // Projection does not touch the session
        assert_eq!(game.guesses().len(), 2);
    }
}
