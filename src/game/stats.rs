//! Append-only log of finished games and the summary derived from it
//!
//! One [`StatsAggregator`] is shared by every session in the process. Appends
//! are serialized behind a write lock; readers take a read lock and always
//! see whole records.

use super::error::GameError;
use super::session::{GameSession, GameState};
use crate::core::Word;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::info;

/// Player name used when the caller has no identity
pub const GUEST_PLAYER: &str = "Guest";

/// Immutable summary of one finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub player: String,
    pub won: bool,
    pub guess_count: usize,
    /// Guess limit the game was played under
    pub max_guesses: usize,
    pub secret_word: Word,
    pub duration_seconds: u64,
    pub recorded_at: DateTime<Utc>,
}

/// Aggregate metrics over all recorded games
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub total_games: usize,
    pub total_wins: usize,
    /// Percentage of games won, rounded to 1 decimal
    pub win_rate_percent: f64,
    /// Mean guesses over all games (won or lost), rounded to 2 decimals
    pub average_guesses: f64,
    /// Wins bucketed by guess count, one bucket per allowed guess; index 0
    /// is a win in one guess
    pub guess_distribution: Vec<usize>,
}

impl StatsSummary {
    /// Summarize a slice of records, `None` when there are none
    #[must_use]
    pub fn from_records(records: &[GameRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let total_games = records.len();
        let total_wins = records.iter().filter(|r| r.won).count();
        let total_guesses: usize = records.iter().map(|r| r.guess_count).sum();

        let buckets = records
            .iter()
            .map(|r| r.max_guesses.max(r.guess_count))
            .max()
            .unwrap_or(0);
        let mut guess_distribution = vec![0; buckets];
        for record in records.iter().filter(|r| r.won && r.guess_count > 0) {
            guess_distribution[record.guess_count - 1] += 1;
        }

        Some(Self {
            total_games,
            total_wins,
            win_rate_percent: round_to(total_wins as f64 / total_games as f64 * 100.0, 1),
            average_guesses: round_to(total_guesses as f64 / total_games as f64, 2),
            guess_distribution,
        })
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Summary and history read under one lock
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    /// `None` means no games have been played yet
    pub summary: Option<StatsSummary>,
    /// Oldest first
    pub history: Vec<GameRecord>,
}

/// Process-wide, append-only game log
#[derive(Debug, Default)]
pub struct StatsAggregator {
    records: RwLock<Vec<GameRecord>>,
}

impl StatsAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record for a finished session
    ///
    /// Does not consult the session's recorded flag; callers that may see the
    /// same session more than once should use [`Self::record_if_terminal`].
    ///
    /// # Errors
    /// Returns `GameError::IllegalTransition` if the session is still active.
    pub fn record_game(
        &self,
        session: &GameSession,
        player: &str,
    ) -> Result<GameRecord, GameError> {
        self.record_game_at(session, player, Utc::now())
    }

    /// [`Self::record_game`] with an explicit recording time
    ///
    /// # Errors
    /// Returns `GameError::IllegalTransition` if the session is still active.
    pub fn record_game_at(
        &self,
        session: &GameSession,
        player: &str,
        now: DateTime<Utc>,
    ) -> Result<GameRecord, GameError> {
        let state = session.state();
        if !state.is_terminal() {
            return Err(GameError::IllegalTransition {
                action: "record a game",
                state,
            });
        }

        let player = if player.trim().is_empty() {
            GUEST_PLAYER
        } else {
            player
        };
        let record = GameRecord {
            player: player.to_string(),
            won: state == GameState::Won,
            guess_count: session.guesses().len(),
            max_guesses: session.config().max_guesses,
            secret_word: session.secret().clone(),
            duration_seconds: session.elapsed_seconds_at(now),
            recorded_at: now,
        };

        let total = {
            let mut records = self.records.write();
            records.push(record.clone());
            records.len()
        };
        info!(
            player = %record.player,
            won = record.won,
            guesses = record.guess_count,
            total,
            "game recorded"
        );

        Ok(record)
    }

    /// Record `session` once, the first time it is seen in a terminal state
    ///
    /// Safe to call on every render or poll: active sessions and sessions
    /// already recorded are ignored. Returns the new record, if any.
    pub fn record_if_terminal(
        &self,
        session: &mut GameSession,
        player: &str,
    ) -> Option<GameRecord> {
        if !session.mark_recorded() {
            return None;
        }
        // mark_recorded only succeeds on terminal sessions
        self.record_game(session, player).ok()
    }

    /// Summary metrics, `None` when no games have been recorded
    #[must_use]
    pub fn summary(&self) -> Option<StatsSummary> {
        StatsSummary::from_records(&self.records.read())
    }

    /// All records, oldest first
    #[must_use]
    pub fn history(&self) -> Vec<GameRecord> {
        self.records.read().clone()
    }

    /// Summary and history from the same snapshot
    #[must_use]
    pub fn dashboard_data(&self) -> DashboardData {
        let records = self.records.read();
        DashboardData {
            summary: StatsSummary::from_records(&records),
            history: records.clone(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
