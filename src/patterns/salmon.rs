//! Salmon runs.
//!
//! A run is a chain of salmon in which every member touches at most two
//! other salmon. Salmon with three or more salmon neighbours are dropped
//! from run membership entirely, which also splits any chain through them.

use super::graph::SpeciesGraph;
use super::SpeciesScore;
use crate::board::Position;
use crate::rules::ScoringTable;

/// Maximum same-species degree for run membership.
pub const MAX_RUN_DEGREE: usize = 2;

/// Finds every run, as the positions of its members.
pub fn find_runs(positions: &[Position]) -> Vec<Vec<Position>> {
    let graph = SpeciesGraph::new(positions);
    let qualifies: Vec<bool> = (0..graph.len())
        .map(|i| graph.degree(i) <= MAX_RUN_DEGREE)
        .collect();
    let mut visited = vec![false; graph.len()];
    let mut runs = Vec::new();

    for start in 0..graph.len() {
        if visited[start] || !qualifies[start] {
            continue;
        }
        let mut run = Vec::new();
        let mut stack = vec![start];
        visited[start] = true;
        while let Some(node) = stack.pop() {
            run.push(graph.position(node));
            for &next in graph.neighbors(node) {
                if !visited[next] && qualifies[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }
        runs.push(run);
    }
    runs
}

/// Scores a list of run lengths.
pub fn score_run_lengths(lengths: &[u32], table: &ScoringTable) -> SpeciesScore {
    let points = lengths
        .iter()
        .map(|&len| table.lookup(len))
        .fold(0, u32::saturating_add);
    SpeciesScore::new(
        points,
        format!("Found {} run(s): lengths {lengths:?}", lengths.len()),
    )
}

/// Scores salmon from their positions.
pub fn score_salmon(positions: &[Position], table: &ScoringTable) -> SpeciesScore {
    if positions.is_empty() {
        return SpeciesScore::none("salmon");
    }
    let mut lengths: Vec<u32> = find_runs(positions)
        .iter()
        .map(|run| run.len() as u32)
        .collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    score_run_lengths(&lengths, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Species;
    use crate::rules::card_a_table;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn run_lengths(positions: &[Position]) -> Vec<usize> {
        let mut out: Vec<usize> = find_runs(positions).iter().map(Vec::len).collect();
        out.sort_unstable();
        out
    }

    #[test]
    fn simple_chain_is_one_run() {
        assert_eq!(run_lengths(&[p(0, 0), p(0, 1), p(1, 2), p(2, 2)]), vec![4]);
    }

    #[test]
    fn branching_member_is_excluded() {
        // (0,0) touches three salmon that do not touch each other.
        let salmon = [p(0, 0), p(0, 1), p(1, 0), p(-1, -1), p(2, 0)];
        let runs = find_runs(&salmon);
        assert!(runs.iter().all(|r| !r.contains(&p(0, 0))));
        let mut lengths: Vec<usize> = runs.iter().map(Vec::len).collect();
        lengths.sort_unstable();
        assert_eq!(lengths, vec![1, 1, 2]);
    }

    #[test]
    fn separate_runs_score_separately() {
        let table = card_a_table(Species::Salmon);
        // Run of 3 (8 pts) and run of 1 (2 pts).
        let score = score_salmon(&[p(0, 0), p(0, 1), p(0, 2), p(5, 5)], &table);
        assert_eq!(score.points, 10);
        assert_eq!(score.explanation, "Found 2 run(s): lengths [3, 1]");
    }

    #[test]
    fn long_run_uses_open_bucket() {
        let table = card_a_table(Species::Salmon);
        let salmon: Vec<Position> = (0..7).map(|c| p(0, c)).collect();
        assert_eq!(score_salmon(&salmon, &table).points, 14);
    }

    #[test]
    fn length_missing_from_table_scores_zero() {
        let table = ScoringTable::from_entries([("3", 7), ("5+", 14)]);
        assert_eq!(score_salmon(&[p(0, 0), p(0, 1)], &table).points, 0);
    }

    #[test]
    fn no_salmon() {
        let score = score_salmon(&[], &card_a_table(Species::Salmon));
        assert_eq!(score.points, 0);
        assert_eq!(score.explanation, "No salmon found");
    }
}
