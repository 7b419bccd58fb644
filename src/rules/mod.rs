//! Scoring configuration.
//!
//! Point tables and the per-species card set that the pattern detectors
//! read from. Rules are plain values passed into each scoring run.

pub mod card;
pub mod table;

pub use card::{card_a_table, CardEntry, RulesError, ScoringRules};
pub use table::{ScoringTable, TableKey};
