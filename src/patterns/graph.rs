//! Same-species adjacency graph.
//!
//! Nodes are token positions of one species; edges join edge-adjacent
//! cells. Built in O(n^2), which is fine for the twenty-odd tokens a board
//! holds.

use crate::board::{is_adjacent, Position};

pub struct SpeciesGraph {
    positions: Vec<Position>,
    adj: Vec<Vec<usize>>,
}

impl SpeciesGraph {
    pub fn new(positions: &[Position]) -> Self {
        let mut adj = vec![Vec::new(); positions.len()];
        for (i, &a) in positions.iter().enumerate() {
            for (j, &b) in positions.iter().enumerate().skip(i + 1) {
                if is_adjacent(a, b) {
                    adj[i].push(j);
                    adj[j].push(i);
                }
            }
        }
        SpeciesGraph {
            positions: positions.to_vec(),
            adj,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, node: usize) -> Position {
        self.positions[node]
    }

    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adj[node]
    }

    /// Number of same-species neighbours.
    pub fn degree(&self, node: usize) -> usize {
        self.adj[node].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_of_a_short_chain() {
        let g = SpeciesGraph::new(&[
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(5, 5),
        ]);
        assert_eq!(g.len(), 4);
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(1), 2);
        assert_eq!(g.degree(2), 1);
        assert_eq!(g.degree(3), 0);
        assert_eq!(g.neighbors(1), &[0, 2]);
    }

    #[test]
    fn empty_graph() {
        let g = SpeciesGraph::new(&[]);
        assert!(g.is_empty());
    }
}
