//! Per-player score breakdown.
//!
//! A `PlayerScore` is built once from a board's pattern and habitat scores,
//! then receives its majority bonuses after every player has been scored.
//! The total is always recomputed from the fields, never adjusted by hand.

use serde::Serialize;

use crate::board::{PerSpecies, PerTerrain, PlayerBoard, PlayerId};
use crate::habitat;
use crate::patterns::SpeciesScore;
use crate::resolve::Standing;

/// Complete score breakdown for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerScore {
    player_id: PlayerId,
    animal_scores: PerSpecies<u32>,
    animal_explanations: PerSpecies<String>,
    habitat_scores: PerTerrain<u32>,
    habitat_explanation: String,
    habitat_total: u32,
    nature_tokens: u32,
    majority_bonuses: PerTerrain<u32>,
    total_score: u32,
}

impl PlayerScore {
    /// Combines pattern and habitat scores into a provisional score with no
    /// majority bonuses.
    pub fn aggregate(
        board: &PlayerBoard,
        wildlife: PerSpecies<SpeciesScore>,
        habitats: PerTerrain<u32>,
    ) -> Self {
        let mut score = PlayerScore {
            player_id: board.player_id,
            animal_scores: wildlife.map(|_, s| s.points),
            animal_explanations: wildlife.map(|_, s| s.explanation.clone()),
            habitat_total: habitats.total(),
            habitat_explanation: habitat::describe(&habitats),
            habitat_scores: habitats,
            nature_tokens: board.nature_tokens,
            majority_bonuses: PerTerrain::default(),
            total_score: 0,
        };
        score.recompute_total();
        score
    }

    /// Replaces the majority bonuses and recomputes the total.
    pub fn set_majority_bonuses(&mut self, bonuses: PerTerrain<u32>) {
        self.majority_bonuses = bonuses;
        self.recompute_total();
    }

    /// Summary counts are not range-checked, so the total saturates.
    fn recompute_total(&mut self) {
        self.total_score = [
            self.animal_total(),
            self.habitat_total,
            self.bonus_total(),
            self.nature_tokens,
        ]
        .into_iter()
        .fold(0, u32::saturating_add);
    }

    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    pub fn animal_scores(&self) -> &PerSpecies<u32> {
        &self.animal_scores
    }

    pub fn animal_explanations(&self) -> &PerSpecies<String> {
        &self.animal_explanations
    }

    pub fn habitat_scores(&self) -> &PerTerrain<u32> {
        &self.habitat_scores
    }

    pub fn habitat_explanation(&self) -> &str {
        &self.habitat_explanation
    }

    pub fn habitat_total(&self) -> u32 {
        self.habitat_total
    }

    pub fn nature_tokens(&self) -> u32 {
        self.nature_tokens
    }

    pub fn majority_bonuses(&self) -> &PerTerrain<u32> {
        &self.majority_bonuses
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn animal_total(&self) -> u32 {
        self.animal_scores.total()
    }

    pub fn bonus_total(&self) -> u32 {
        self.majority_bonuses.total()
    }

    /// Returns the fields used for winner ranking.
    pub fn standing(&self) -> Standing {
        Standing {
            player_id: self.player_id,
            total_score: self.total_score,
            nature_tokens: self.nature_tokens,
        }
    }
}
