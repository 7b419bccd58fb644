//! Elk lines.
//!
//! Elk are partitioned into straight lines along the three grid axes, every
//! elk belonging to exactly one line (a lone elk is a line of one). Lines
//! are taken longest first from the elk not yet assigned; equal lengths
//! resolve by smallest starting position, then axis order, so the
//! partition is deterministic.

use std::collections::BTreeSet;

use super::SpeciesScore;
use crate::board::{Position, AXES};
use crate::rules::ScoringTable;

/// Partitions elk positions into straight lines.
pub fn find_lines(positions: &[Position]) -> Vec<Vec<Position>> {
    let mut free: BTreeSet<Position> = positions.iter().copied().collect();
    let mut lines = Vec::new();

    while !free.is_empty() {
        let mut best: Vec<Position> = Vec::new();
        for &start in &free {
            for axis in AXES {
                // Only walk from the first cell of a run.
                if free.contains(&(start - axis)) {
                    continue;
                }
                let mut line = vec![start];
                let mut next = start + axis;
                while free.contains(&next) {
                    line.push(next);
                    next = next + axis;
                }
                if line.len() > best.len() {
                    best = line;
                }
            }
        }
        for p in &best {
            free.remove(p);
        }
        lines.push(best);
    }
    lines
}

/// Scores a list of line lengths.
pub fn score_line_lengths(lengths: &[u32], table: &ScoringTable) -> SpeciesScore {
    let points = lengths
        .iter()
        .map(|&len| table.lookup(len))
        .fold(0, u32::saturating_add);
    SpeciesScore::new(points, format!("Lines: {lengths:?}"))
}

/// Scores elk from their positions.
pub fn score_elk(positions: &[Position], table: &ScoringTable) -> SpeciesScore {
    if positions.is_empty() {
        return SpeciesScore::none("elk");
    }
    let mut lengths: Vec<u32> = find_lines(positions)
        .iter()
        .map(|line| line.len() as u32)
        .collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    score_line_lengths(&lengths, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Species;
    use crate::rules::card_a_table;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn lengths(positions: &[Position]) -> Vec<usize> {
        let mut out: Vec<usize> = find_lines(positions).iter().map(Vec::len).collect();
        out.sort_unstable_by(|a, b| b.cmp(a));
        out
    }

    #[test]
    fn row_line() {
        assert_eq!(lengths(&[p(0, 0), p(0, 1), p(0, 2)]), vec![3]);
    }

    #[test]
    fn column_and_diagonal_lines() {
        assert_eq!(lengths(&[p(0, 0), p(1, 0), p(2, 0)]), vec![3]);
        assert_eq!(lengths(&[p(0, 0), p(1, 1), p(2, 2), p(3, 3)]), vec![4]);
    }

    #[test]
    fn bent_group_splits_into_lines() {
        // L-shape: three along the row, one hanging below the end.
        assert_eq!(lengths(&[p(0, 0), p(0, 1), p(0, 2), p(1, 2)]), vec![3, 1]);
    }

    #[test]
    fn anti_diagonal_is_not_a_line() {
        assert_eq!(lengths(&[p(0, 0), p(1, -1)]), vec![1, 1]);
    }

    #[test]
    fn every_elk_in_exactly_one_line() {
        let elk = [p(0, 0), p(0, 1), p(1, 1), p(1, 2), p(2, 2), p(2, 0), p(3, 3)];
        let lines = find_lines(&elk);
        let mut all: Vec<Position> = lines.into_iter().flatten().collect();
        all.sort();
        let mut expected = elk.to_vec();
        expected.sort();
        assert_eq!(all, expected);
    }

    #[test]
    fn long_line_uses_open_bucket() {
        let table = card_a_table(Species::Elk);
        let elk: Vec<Position> = (0..6).map(|c| p(0, c)).collect();
        let score = score_elk(&elk, &table);
        assert_eq!(score.points, 13);
        assert_eq!(score.explanation, "Lines: [6]");
    }

    #[test]
    fn scores_each_line() {
        let table = card_a_table(Species::Elk);
        // A line of two plus a lone elk: 5 + 2.
        let score = score_elk(&[p(0, 0), p(0, 1), p(5, 5)], &table);
        assert_eq!(score.points, 7);
    }

    #[test]
    fn no_elk() {
        let score = score_elk(&[], &card_a_table(Species::Elk));
        assert_eq!(score.points, 0);
        assert_eq!(score.explanation, "No elk found");
    }
}
