//! Fox neighbour variety.
//!
//! Each fox scores by how many distinct other species sit in its six
//! neighbouring cells (0 to 4, since foxes do not count).

use std::collections::HashMap;

use super::SpeciesScore;
use crate::board::{AnimalToken, PerSpecies, Position, Species};
use crate::rules::ScoringTable;

/// Returns, for each fox, the number of distinct non-fox species adjacent
/// to it. `tokens` is every token on the player's board.
pub fn neighbor_variety(tokens: &[AnimalToken]) -> Vec<u32> {
    let by_cell: HashMap<Position, Species> =
        tokens.iter().map(|t| (t.position, t.species)).collect();

    tokens
        .iter()
        .filter(|t| t.species == Species::Fox)
        .map(|fox| {
            let mut seen = PerSpecies::<bool>::default();
            for cell in fox.position.neighbors() {
                if let Some(&species) = by_cell.get(&cell) {
                    if species != Species::Fox {
                        seen[species] = true;
                    }
                }
            }
            seen.values().filter(|&&s| s).count() as u32
        })
        .collect()
}

/// Scores a list of per-fox distinct-neighbour counts.
pub fn score_variety_counts(counts: &[u32], table: &ScoringTable) -> SpeciesScore {
    let points = counts
        .iter()
        .map(|&n| table.lookup(n))
        .fold(0, u32::saturating_add);
    SpeciesScore::new(points, format!("Neighbors: {counts:?}"))
}

/// Scores the foxes on a board.
pub fn score_foxes(tokens: &[AnimalToken], table: &ScoringTable) -> SpeciesScore {
    let counts = neighbor_variety(tokens);
    if counts.is_empty() {
        return SpeciesScore::none("foxes");
    }
    score_variety_counts(&counts, table)
}
