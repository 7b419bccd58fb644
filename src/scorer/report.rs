//! Scoring results.

use std::collections::BTreeMap;

use serde::Serialize;

use super::player::PlayerScore;
use crate::resolve::Winner;

/// Compact per-player totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub total: u32,
    pub animals: u32,
    pub habitats: u32,
    pub bonuses: u32,
}

impl From<&PlayerScore> for PlayerSummary {
    fn from(score: &PlayerScore) -> Self {
        PlayerSummary {
            total: score.total_score(),
            animals: score.animal_total(),
            habitats: score.habitat_total(),
            bonuses: score.bonus_total(),
        }
    }
}

/// The full outcome of scoring a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub winner: Winner,
    pub players: Vec<PlayerScore>,
    /// Keyed `player_<id>`.
    pub summary: BTreeMap<String, PlayerSummary>,
}

impl GameReport {
    pub fn new(winner: Winner, players: Vec<PlayerScore>) -> Self {
        let summary = players
            .iter()
            .map(|p| (format!("player_{}", p.player_id()), PlayerSummary::from(p)))
            .collect();
        GameReport {
            winner,
            players,
            summary,
        }
    }

    /// Returns the score for a player id.
    pub fn player(&self, player_id: u32) -> Option<&PlayerScore> {
        self.players.iter().find(|p| p.player_id() == player_id)
    }

    /// One line per player, as printed by the CLI.
    pub fn breakdown_lines(&self) -> Vec<String> {
        self.players
            .iter()
            .map(|p| {
                format!(
                    "Player {}: Total {} pts (Animals: {}, Habitats: {}, Bonuses: {})",
                    p.player_id(),
                    p.total_score(),
                    p.animal_total(),
                    p.habitat_total(),
                    p.bonus_total()
                )
            })
            .collect()
    }
}
