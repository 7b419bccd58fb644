//! Bear pairs.
//!
//! A pair is two bears adjacent to each other and to no other bear. Bears
//! in larger groups, and lone bears, score nothing.

use super::graph::SpeciesGraph;
use super::SpeciesScore;
use crate::board::Position;
use crate::rules::ScoringTable;

/// Table key holding the points for one pair.
pub const PAIR_KEY: &str = "pair";

/// Finds every exclusive bear pair.
pub fn find_pairs(positions: &[Position]) -> Vec<(Position, Position)> {
    let graph = SpeciesGraph::new(positions);
    let mut used = vec![false; graph.len()];
    let mut pairs = Vec::new();

    for i in 0..graph.len() {
        if used[i] || graph.degree(i) != 1 {
            continue;
        }
        let j = graph.neighbors(i)[0];
        if graph.degree(j) == 1 && !used[j] {
            used[i] = true;
            used[j] = true;
            pairs.push((graph.position(i), graph.position(j)));
        }
    }
    pairs
}

/// Scores a known number of pairs.
pub fn score_pair_count(pairs: u32, table: &ScoringTable) -> SpeciesScore {
    let value = table.named(PAIR_KEY).unwrap_or(0);
    SpeciesScore::new(pairs.saturating_mul(value), format!("{pairs} pairs @ {value}pts"))
}

/// Scores bears from their positions.
pub fn score_bears(positions: &[Position], table: &ScoringTable) -> SpeciesScore {
    if positions.is_empty() {
        return SpeciesScore::none("bears");
    }
    let pairs = find_pairs(positions);
    let mut score = score_pair_count(pairs.len() as u32, table);
    for (a, b) in &pairs {
        score.explanation.push_str(&format!("; pair at {a} and {b}"));
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn table() -> ScoringTable {
        ScoringTable::from_entries([(PAIR_KEY, 4)])
    }

    #[test]
    fn isolated_pair_scores_once() {
        let score = score_bears(&[p(0, 0), p(0, 1)], &table());
        assert_eq!(score.points, 4);
        assert!(score.explanation.starts_with("1 pairs"));
    }

    #[test]
    fn triangle_scores_nothing() {
        let score = score_bears(&[p(0, 0), p(0, 1), p(1, 1)], &table());
        assert_eq!(score.points, 0);
    }

    #[test]
    fn chain_of_three_scores_nothing() {
        assert!(find_pairs(&[p(0, 0), p(0, 1), p(0, 2)]).is_empty());
    }

    #[test]
    fn chain_of_four_scores_nothing() {
        // Ends have degree 1 but their partners have degree 2.
        assert!(find_pairs(&[p(0, 0), p(0, 1), p(0, 2), p(0, 3)]).is_empty());
    }

    #[test]
    fn lone_bears_score_nothing() {
        assert!(find_pairs(&[p(0, 0), p(3, 3)]).is_empty());
    }

    #[test]
    fn two_separate_pairs() {
        let pairs = find_pairs(&[p(0, 0), p(1, 0), p(5, 5), p(5, 6), p(9, 0)]);
        assert_eq!(pairs, vec![(p(0, 0), p(1, 0)), (p(5, 5), p(5, 6))]);
        assert_eq!(score_bears(&[p(0, 0), p(1, 0), p(5, 5), p(5, 6)], &table()).points, 8);
    }

    #[test]
    fn no_token_in_two_pairs() {
        let pairs = find_pairs(&[p(0, 0), p(0, 1), p(4, 4), p(4, 5)]);
        let mut seen: Vec<Position> = pairs.iter().flat_map(|&(a, b)| [a, b]).collect();
        let total = seen.len();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), total);
    }

    #[test]
    fn missing_pair_key_scores_zero() {
        let empty = ScoringTable::default();
        assert_eq!(score_bears(&[p(0, 0), p(0, 1)], &empty).points, 0);
    }

    #[test]
    fn huge_pair_count_saturates() {
        assert_eq!(score_pair_count(1 << 30, &table()).points, u32::MAX);
    }

    #[test]
    fn no_bears() {
        let score = score_bears(&[], &table());
        assert_eq!(score.points, 0);
        assert_eq!(score.explanation, "No bears found");
    }
}
