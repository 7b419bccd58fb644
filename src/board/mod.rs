//! Board representation.
//!
//! Contains hex-grid coordinates and adjacency, the species and terrain
//! enumerations, per-player board state, and random board generation.

pub mod hex;
pub mod kind;
pub mod random;
pub mod state;

pub use hex::{is_adjacent, neighbors_in, Position, AXES, DIRECTIONS};
pub use kind::{
    ByKind, Kind, PerSpecies, PerTerrain, Species, Terrain, ALL_SPECIES, ALL_TERRAINS, KIND_COUNT,
};
pub use random::{random_board, random_game, RandomBoardConfig};
pub use state::{
    AnimalToken, BoardError, HabitatTile, PatternSummary, PlayerBoard, PlayerId, WildlifePatterns,
};
