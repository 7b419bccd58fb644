//! Player board state.
//!
//! A `PlayerBoard` carries one player's wildlife tokens and habitat tiles as
//! raw grid positions, a pre-reduced `PatternSummary`, or both. Which of the
//! two is scored is decided by the pattern strategy (see `patterns`).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::hex::Position;
use super::kind::{PerSpecies, PerTerrain, Species, Terrain};

/// Identifies a player within a game.
pub type PlayerId = u32;

/// A wildlife token placed on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimalToken {
    pub species: Species,
    #[serde(flatten)]
    pub position: Position,
}

impl AnimalToken {
    pub const fn new(species: Species, row: i32, col: i32) -> Self {
        AnimalToken {
            species,
            position: Position::new(row, col),
        }
    }
}

/// A habitat tile occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitatTile {
    pub terrain: Terrain,
    #[serde(flatten)]
    pub position: Position,
}

impl HabitatTile {
    pub const fn new(terrain: Terrain, row: i32, col: i32) -> Self {
        HabitatTile {
            terrain,
            position: Position::new(row, col),
        }
    }
}

/// Wildlife patterns already reduced from token positions.
///
/// Field names follow the board-perception service's JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WildlifePatterns {
    /// Number of bear pairs (groups of exactly two).
    pub bear_pairs: u32,
    /// Length of every elk line.
    pub elk_lines: Vec<u32>,
    /// Length of every salmon run.
    pub salmon_runs: Vec<u32>,
    /// Number of hawks with no adjacent hawk.
    pub isolated_hawks: u32,
    /// Distinct non-fox neighbour species, one entry per fox.
    pub fox_neighbors: Vec<u32>,
}

/// Pre-reduced view of one player's board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSummary {
    /// Token count per species, informational only.
    pub animals: PerSpecies<u32>,
    /// Size of the largest contiguous area per terrain.
    pub largest_habitats: PerTerrain<u32>,
    pub wildlife_patterns: WildlifePatterns,
}

/// Everything known about one player's board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBoard {
    pub player_id: PlayerId,
    #[serde(default)]
    pub nature_tokens: u32,
    #[serde(default)]
    pub tokens: Vec<AnimalToken>,
    #[serde(default)]
    pub tiles: Vec<HabitatTile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<PatternSummary>,
}

/// Structural problems with a single board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("player {player}: two tokens on cell {position}")]
    DuplicateToken { player: PlayerId, position: Position },

    #[error("player {player}: two tiles on cell {position}")]
    DuplicateTile { player: PlayerId, position: Position },

    #[error("player {player}: {species} token on cell {position} which has no tile")]
    TokenOffBoard {
        player: PlayerId,
        species: Species,
        position: Position,
    },
}

impl PlayerBoard {
    /// Creates an empty board for the given player.
    pub fn new(player_id: PlayerId) -> Self {
        PlayerBoard {
            player_id,
            ..Default::default()
        }
    }

    /// Returns true if the board carries raw token or tile positions.
    pub fn has_layout(&self) -> bool {
        !self.tokens.is_empty() || !self.tiles.is_empty()
    }

    /// Returns the positions of all tokens of the given species.
    pub fn positions_of(&self, species: Species) -> Vec<Position> {
        self.tokens
            .iter()
            .filter(|t| t.species == species)
            .map(|t| t.position)
            .collect()
    }

    /// Returns the positions of all tiles of the given terrain.
    pub fn tiles_of(&self, terrain: Terrain) -> Vec<Position> {
        self.tiles
            .iter()
            .filter(|t| t.terrain == terrain)
            .map(|t| t.position)
            .collect()
    }

    /// Counts tokens per species.
    pub fn animal_counts(&self) -> PerSpecies<u32> {
        let mut counts = PerSpecies::default();
        for token in &self.tokens {
            counts[token.species] += 1;
        }
        counts
    }

    /// Checks that no cell holds two tokens or two tiles, and, when tiles
    /// are present, that every token sits on a tile.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut tile_cells = HashSet::with_capacity(self.tiles.len());
        for tile in &self.tiles {
            if !tile_cells.insert(tile.position) {
                return Err(BoardError::DuplicateTile {
                    player: self.player_id,
                    position: tile.position,
                });
            }
        }

        let mut token_cells = HashSet::with_capacity(self.tokens.len());
        for token in &self.tokens {
            if !token_cells.insert(token.position) {
                return Err(BoardError::DuplicateToken {
                    player: self.player_id,
                    position: token.position,
                });
            }
            if !tile_cells.is_empty() && !tile_cells.contains(&token.position) {
                return Err(BoardError::TokenOffBoard {
                    player: self.player_id,
                    species: token.species,
                    position: token.position,
                });
            }
        }
        Ok(())
    }
}
