//! Isolated hawks.
//!
//! A hawk is isolated when no other hawk is adjacent to it. The card scores
//! the total number of isolated hawks, not each hawk on its own.

use super::graph::SpeciesGraph;
use super::SpeciesScore;
use crate::board::Position;
use crate::rules::ScoringTable;

/// Returns the positions of hawks with no hawk neighbour.
pub fn isolated_hawks(positions: &[Position]) -> Vec<Position> {
    let graph = SpeciesGraph::new(positions);
    (0..graph.len())
        .filter(|&i| graph.degree(i) == 0)
        .map(|i| graph.position(i))
        .collect()
}

/// Scores a count of isolated hawks. Counts beyond the table's largest
/// key score that key's value.
pub fn score_isolated_count(count: u32, table: &ScoringTable) -> SpeciesScore {
    SpeciesScore::new(table.lookup_capped(count), format!("{count} isolated"))
}

/// Scores hawks from their positions.
pub fn score_hawks(positions: &[Position], table: &ScoringTable) -> SpeciesScore {
    if positions.is_empty() {
        return SpeciesScore::none("hawks");
    }
    let isolated = isolated_hawks(positions);
    score_isolated_count(isolated.len() as u32, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Species;
    use crate::rules::card_a_table;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn adjacent_hawks_are_not_isolated() {
        let hawks = [p(0, 0), p(0, 1), p(4, 4)];
        assert_eq!(isolated_hawks(&hawks), vec![p(4, 4)]);
    }

    #[test]
    fn score_depends_on_count_only() {
        let table = card_a_table(Species::Hawk);
        let spread = score_hawks(&[p(0, 0), p(0, 2), p(2, 0)], &table);
        let far = score_hawks(&[p(10, 10), p(-7, 3), p(0, 20)], &table);
        assert_eq!(spread.points, 8);
        assert_eq!(far.points, spread.points);
        assert_eq!(spread.explanation, "3 isolated");
    }

    #[test]
    fn count_beyond_table_uses_open_bucket() {
        let table = card_a_table(Species::Hawk);
        assert_eq!(score_isolated_count(11, &table).points, 26);
    }

    #[test]
    fn count_beyond_table_without_bucket_is_capped() {
        let table = ScoringTable::from_entries([("1", 2), ("2", 5), ("3", 8)]);
        assert_eq!(score_isolated_count(6, &table).points, 8);
    }

    #[test]
    fn zero_isolated_scores_zero() {
        let table = card_a_table(Species::Hawk);
        assert_eq!(score_hawks(&[p(0, 0), p(1, 1)], &table).points, 0);
    }

    #[test]
    fn no_hawks() {
        let score = score_hawks(&[], &card_a_table(Species::Hawk));
        assert_eq!(score.points, 0);
        assert_eq!(score.explanation, "No hawks found");
    }
}
