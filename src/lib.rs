//! Wordle Game
//!
//! A Wordle game engine: duplicate-aware letter feedback, per-player game
//! sessions and an append-only log of finished games with summary statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{GameEngine, GameState};
//!
//! let engine = GameEngine::default();
//! let mut session = engine.new_session();
//!
//! engine.submit_guess(&mut session, "crane").unwrap();
//! for row in engine.renderable_rows(&session) {
//!     println!("{}: {}", row.number, row.word);
//! }
//!
//! if session.state() != GameState::Active {
//!     engine.record_if_terminal(&mut session, "Guest");
//! }
//! ```

// Core domain types
pub mod core;

// Sessions, word selection and statistics
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
