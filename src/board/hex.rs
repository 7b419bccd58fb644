//! Hex-grid coordinates and adjacency.
//!
//! Cells are addressed by integer `(row, col)` pairs in axial coordinates.
//! Each cell has six edge neighbours at the offsets listed in `DIRECTIONS`.
//! Every spatial rule in the crate (pattern detectors, habitat corridors,
//! board generation) goes through `is_adjacent` / `neighbors` here.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A cell on the hex grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// Returns the six edge neighbours of this cell, in `DIRECTIONS` order.
    pub fn neighbors(self) -> [Position; 6] {
        DIRECTIONS.map(|d| self + d)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The three principal axes of the grid: along a row, along a column, and
/// the diagonal. Straight lines run along exactly one of these.
pub const AXES: [Position; 3] = [
    Position::new(0, 1),
    Position::new(1, 0),
    Position::new(1, 1),
];

/// Offsets of the six edge neighbours: each axis in both senses.
pub const DIRECTIONS: [Position; 6] = [
    Position::new(0, 1),
    Position::new(1, 0),
    Position::new(1, 1),
    Position::new(0, -1),
    Position::new(-1, 0),
    Position::new(-1, -1),
];

/// Returns true if the two cells share an edge.
///
/// Two cells are adjacent iff their offset is one of the six `DIRECTIONS`:
/// one step along a row or column, or one step along the diagonal where
/// row and column change in the same sense.
#[inline]
pub fn is_adjacent(a: Position, b: Position) -> bool {
    let d = b - a;
    matches!(
        (d.row, d.col),
        (0, 1) | (0, -1) | (1, 0) | (-1, 0) | (1, 1) | (-1, -1)
    )
}

/// Returns the members of `cells` that are edge-adjacent to `pos`.
pub fn neighbors_in(pos: Position, cells: &[Position]) -> impl Iterator<Item = Position> + '_ {
    cells.iter().copied().filter(move |&c| is_adjacent(pos, c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn six_distinct_neighbors() {
        let origin = Position::new(3, 4);
        let set: HashSet<Position> = origin.neighbors().into_iter().collect();
        assert_eq!(set.len(), 6);
        for n in set {
            assert!(is_adjacent(origin, n));
        }
    }

    #[test]
    fn adjacency_is_symmetric() {
        let origin = Position::new(0, 0);
        for dr in -2..=2 {
            for dc in -2..=2 {
                let other = Position::new(dr, dc);
                assert_eq!(is_adjacent(origin, other), is_adjacent(other, origin));
            }
        }
    }

    #[test]
    fn no_self_adjacency() {
        let p = Position::new(5, -2);
        assert!(!is_adjacent(p, p));
    }

    #[test]
    fn anti_diagonal_not_adjacent() {
        let origin = Position::new(0, 0);
        assert!(!is_adjacent(origin, Position::new(1, -1)));
        assert!(!is_adjacent(origin, Position::new(-1, 1)));
        assert!(is_adjacent(origin, Position::new(1, 1)));
        assert!(is_adjacent(origin, Position::new(-1, -1)));
    }

    #[test]
    fn distant_cells_not_adjacent() {
        assert!(!is_adjacent(Position::new(0, 0), Position::new(0, 2)));
        assert!(!is_adjacent(Position::new(0, 0), Position::new(2, 2)));
    }

    #[test]
    fn directions_are_axes_both_ways() {
        for (i, axis) in AXES.iter().enumerate() {
            assert_eq!(DIRECTIONS[i], *axis);
            assert_eq!(DIRECTIONS[i + 3], Position::new(0, 0) - *axis);
        }
    }

    #[test]
    fn neighbors_in_filters_cells() {
        let cells = [
            Position::new(0, 1),
            Position::new(2, 2),
            Position::new(-1, -1),
        ];
        let found: Vec<Position> = neighbors_in(Position::new(0, 0), &cells).collect();
        assert_eq!(found, vec![Position::new(0, 1), Position::new(-1, -1)]);
    }

    #[test]
    fn display_format() {
        assert_eq!(Position::new(2, -3).to_string(), "(2,-3)");
    }
}
