//! Embedded word lists
//!
//! Word lists compiled into the binary.

/// Candidate secret words for a new game
pub const ANSWERS: &[&str] = &["APPLE", "BRAVE", "CRANE", "DANCE", "EPOCH"];
