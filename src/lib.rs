//! Cascadia scoring engine library.
//!
//! Turns each player's hex board into wildlife pattern scores, habitat
//! sizes and nature tokens, then resolves habitat majority bonuses and the
//! winner across the table. Used by integration tests and the `cascadia`
//! binary.

pub mod board;
pub mod habitat;
pub mod patterns;
pub mod protocol;
pub mod resolve;
pub mod rules;
pub mod scorer;

pub use scorer::{GameReport, GameScorer, PlayerScore, ScoreError};
