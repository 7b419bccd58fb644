//! Habitat corridors.
//!
//! For each terrain, finds the largest group of that player's tiles
//! connected through shared edges. Only the size of the largest group
//! matters for scoring.

use std::collections::{HashSet, VecDeque};

use crate::board::{PerTerrain, PlayerBoard, Position};

/// Returns the size of the largest connected group among `cells`.
pub fn largest_component(cells: &[Position]) -> u32 {
    let remaining: HashSet<Position> = cells.iter().copied().collect();
    let mut visited: HashSet<Position> = HashSet::with_capacity(remaining.len());
    let mut queue = VecDeque::new();
    let mut best = 0;

    for &start in cells {
        if !visited.insert(start) {
            continue;
        }
        queue.push_back(start);
        let mut size = 0;
        while let Some(cell) = queue.pop_front() {
            size += 1;
            for next in cell.neighbors() {
                if remaining.contains(&next) && visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        best = best.max(size);
    }
    best
}

/// Returns the largest contiguous area per terrain for a board's tiles.
pub fn largest_habitats(board: &PlayerBoard) -> PerTerrain<u32> {
    PerTerrain::from_fn(|terrain| largest_component(&board.tiles_of(terrain)))
}

/// Describes habitat sizes, listing only terrains that are present.
pub fn describe(sizes: &PerTerrain<u32>) -> String {
    let parts: Vec<String> = sizes
        .iter()
        .filter(|(_, &size)| size > 0)
        .map(|(terrain, size)| format!("{terrain}: {size} tiles"))
        .collect();
    if parts.is_empty() {
        "No habitats found".to_string()
    } else {
        parts.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{HabitatTile, Terrain};

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(largest_component(&[]), 0);
    }

    #[test]
    fn picks_largest_group_not_group_count() {
        let cells = [p(0, 0), p(0, 1), p(1, 1), p(5, 5), p(5, 6), p(9, 9)];
        assert_eq!(largest_component(&cells), 3);
    }

    #[test]
    fn diagonal_step_connects() {
        assert_eq!(largest_component(&[p(0, 0), p(1, 1), p(2, 2)]), 3);
    }

    #[test]
    fn anti_diagonal_step_does_not_connect() {
        assert_eq!(largest_component(&[p(0, 0), p(1, -1)]), 1);
    }

    #[test]
    fn adding_adjacent_tile_grows_component() {
        let mut cells = vec![p(0, 0), p(0, 1), p(4, 4)];
        let before = largest_component(&cells);
        cells.push(p(1, 1));
        let after = largest_component(&cells);
        assert_eq!(after, before + 1);
    }

    #[test]
    fn per_terrain_sizes() {
        let mut board = PlayerBoard::new(1);
        board.tiles = vec![
            HabitatTile::new(Terrain::Forest, 0, 0),
            HabitatTile::new(Terrain::Forest, 0, 1),
            HabitatTile::new(Terrain::River, 1, 0),
            HabitatTile::new(Terrain::Forest, 1, 1),
            HabitatTile::new(Terrain::River, 3, 3),
        ];
        let sizes = largest_habitats(&board);
        assert_eq!(sizes[Terrain::Forest], 3);
        assert_eq!(sizes[Terrain::River], 1);
        assert_eq!(sizes[Terrain::Mountain], 0);
        assert_eq!(describe(&sizes), "forest: 3 tiles; river: 1 tiles");
    }

    #[test]
    fn describe_empty() {
        assert_eq!(describe(&PerTerrain::default()), "No habitats found");
    }
}
