//! Entry point for presentation layers
//!
//! Bundles the word selector, session rules and the shared stats log. Each
//! player owns their own [`GameSession`]; the engine only hands sessions out
//! and routes finished ones into the log.

use super::error::GameError;
use super::selector::WordSelector;
use super::session::{GameConfig, GameSession, GuessRow};
use super::stats::{DashboardData, GameRecord, StatsAggregator};
use rand::Rng;
use std::sync::Arc;

/// Game engine shared by all sessions in a process
#[derive(Debug, Clone)]
pub struct GameEngine {
    selector: WordSelector,
    config: GameConfig,
    stats: Arc<StatsAggregator>,
}

impl GameEngine {
    /// Create an engine with its own, empty stats log
    #[must_use]
    pub fn new(selector: WordSelector, config: GameConfig) -> Self {
        Self::with_stats(selector, config, Arc::new(StatsAggregator::new()))
    }

    /// Create an engine writing into an existing stats log
    ///
    /// A `max_guesses` of zero is raised to one, as for every session.
    #[must_use]
    pub const fn with_stats(
        selector: WordSelector,
        config: GameConfig,
        stats: Arc<StatsAggregator>,
    ) -> Self {
        Self {
            selector,
            config: config.normalized(),
            stats,
        }
    }

    /// Start a new session using the thread-local random source
    #[must_use]
    pub fn new_session(&self) -> GameSession {
        self.new_session_with(&mut rand::rng())
    }

    /// Start a new session drawing from `rng`
    pub fn new_session_with<R: Rng + ?Sized>(&self, rng: &mut R) -> GameSession {
        GameSession::start(&self.selector, rng, self.config)
    }

    /// Replace `session` with a fresh one
    #[must_use]
    pub fn restart(&self, session: GameSession) -> GameSession {
        self.restart_with(session, &mut rand::rng())
    }

    pub fn restart_with<R: Rng + ?Sized>(&self, session: GameSession, rng: &mut R) -> GameSession {
        session.restart(&self.selector, rng)
    }

    /// Submit a guess for `session`
    ///
    /// On rejection the session is left as it was and the reason is returned.
    ///
    /// # Errors
    /// See [`GameSession::submit_guess`].
    pub fn submit_guess(&self, session: &mut GameSession, raw: &str) -> Result<(), GameError> {
        session.submit_guess(raw).map(|_| ())
    }

    /// Display rows for `session`
    #[must_use]
    pub fn renderable_rows(&self, session: &GameSession) -> Vec<GuessRow> {
        session.rows()
    }

    /// Record a finished session once; call freely on every render
    pub fn record_if_terminal(
        &self,
        session: &mut GameSession,
        player: &str,
    ) -> Option<GameRecord> {
        self.stats.record_if_terminal(session, player)
    }

    /// Summary and history for the stats dashboard
    #[must_use]
    pub fn dashboard_data(&self) -> DashboardData {
        self.stats.dashboard_data()
    }

    #[must_use]
    pub fn stats(&self) -> &Arc<StatsAggregator> {
        &self.stats
    }

    #[must_use]
    pub const fn selector(&self) -> &WordSelector {
        &self.selector
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(WordSelector::embedded(), GameConfig::default())
    }
}
