//! Wildlife pattern scoring.
//!
//! Each species module finds its pattern in raw token positions and maps
//! pattern sizes to points through the species' `ScoringTable`.
//!
//! Boards reach the scorer in one of two shapes: raw token/tile positions,
//! or a `PatternSummary` already reduced by the perception service. Both go
//! through the `PatternStrategy` trait:
//! - `GraphPatterns` runs the detectors on positions,
//! - `SummaryPatterns` scores the reduced counts directly.
//!
//! For any board expressible both ways the two must agree on points;
//! `summarize` produces the reduced form of a raw board so this can be
//! checked.

pub mod bear;
pub mod elk;
pub mod fox;
pub mod graph;
pub mod hawk;
pub mod salmon;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::board::{
    PatternSummary, PerSpecies, PerTerrain, PlayerBoard, PlayerId, Position, Species,
    WildlifePatterns,
};
use crate::habitat;
use crate::rules::ScoringRules;

/// Points for one species, with a human-readable trace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpeciesScore {
    pub points: u32,
    pub explanation: String,
}

impl SpeciesScore {
    pub fn new(points: u32, explanation: String) -> Self {
        SpeciesScore {
            points,
            explanation,
        }
    }

    /// Zero points, for a species with no tokens on the board.
    pub fn none(what: &str) -> Self {
        SpeciesScore::new(0, format!("No {what} found"))
    }
}

/// Plural noun used in "none found" explanations.
fn plural(species: Species) -> &'static str {
    match species {
        Species::Bear => "bears",
        Species::Elk => "elk",
        Species::Salmon => "salmon",
        Species::Hawk => "hawks",
        Species::Fox => "foxes",
    }
}

/// Errors raised by a pattern strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("player {0}: no pattern summary to score from")]
    MissingSummary(PlayerId),
}

/// Produces per-species pattern scores and habitat sizes for one board.
pub trait PatternStrategy: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn wildlife(
        &self,
        board: &PlayerBoard,
        rules: &ScoringRules,
    ) -> Result<PerSpecies<SpeciesScore>, PatternError>;

    fn largest_habitats(&self, board: &PlayerBoard) -> Result<PerTerrain<u32>, PatternError>;
}

/// Scores boards from raw token and tile positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphPatterns;

impl PatternStrategy for GraphPatterns {
    fn name(&self) -> &'static str {
        "graph"
    }

    fn wildlife(
        &self,
        board: &PlayerBoard,
        rules: &ScoringRules,
    ) -> Result<PerSpecies<SpeciesScore>, PatternError> {
        Ok(PerSpecies::from_fn(|species| {
            let table = rules.table(species);
            let score = match species {
                Species::Bear => bear::score_bears(&board.positions_of(species), table),
                Species::Elk => elk::score_elk(&board.positions_of(species), table),
                Species::Salmon => salmon::score_salmon(&board.positions_of(species), table),
                Species::Hawk => hawk::score_hawks(&board.positions_of(species), table),
                Species::Fox => fox::score_foxes(&board.tokens, table),
            };
            tracing::debug!(
                target: "cascadia::patterns",
                player = board.player_id,
                species = %species,
                points = score.points,
                detail = %score.explanation,
                "species.scored"
            );
            score
        }))
    }

    fn largest_habitats(&self, board: &PlayerBoard) -> Result<PerTerrain<u32>, PatternError> {
        Ok(habitat::largest_habitats(board))
    }
}

/// Scores boards from their pre-reduced `PatternSummary`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryPatterns;

impl SummaryPatterns {
    fn summary(board: &PlayerBoard) -> Result<&PatternSummary, PatternError> {
        board
            .summary
            .as_ref()
            .ok_or(PatternError::MissingSummary(board.player_id))
    }
}

impl PatternStrategy for SummaryPatterns {
    fn name(&self) -> &'static str {
        "summary"
    }

    fn wildlife(
        &self,
        board: &PlayerBoard,
        rules: &ScoringRules,
    ) -> Result<PerSpecies<SpeciesScore>, PatternError> {
        let summary = Self::summary(board)?;
        let p = &summary.wildlife_patterns;
        Ok(PerSpecies::from_fn(|species| {
            let table = rules.table(species);
            let found = match species {
                Species::Bear => p.bear_pairs > 0,
                Species::Elk => !p.elk_lines.is_empty(),
                Species::Salmon => !p.salmon_runs.is_empty(),
                Species::Hawk => p.isolated_hawks > 0,
                Species::Fox => !p.fox_neighbors.is_empty(),
            };
            // A zero pattern with no tokens of the species reads as none found.
            if !found && summary.animals[species] == 0 {
                return SpeciesScore::none(plural(species));
            }
            match species {
                Species::Bear => bear::score_pair_count(p.bear_pairs, table),
                Species::Elk => elk::score_line_lengths(&p.elk_lines, table),
                Species::Salmon => salmon::score_run_lengths(&p.salmon_runs, table),
                Species::Hawk => hawk::score_isolated_count(p.isolated_hawks, table),
                Species::Fox => fox::score_variety_counts(&p.fox_neighbors, table),
            }
        }))
    }

    fn largest_habitats(&self, board: &PlayerBoard) -> Result<PerTerrain<u32>, PatternError> {
        Ok(Self::summary(board)?.largest_habitats.clone())
    }
}

/// Which pattern strategy to use for a board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Graph when the board has positions, summary otherwise.
    #[default]
    Auto,
    Graph,
    Summary,
}

static GRAPH: GraphPatterns = GraphPatterns;
static SUMMARY: SummaryPatterns = SummaryPatterns;

impl Strategy {
    /// Returns the strategy implementation to apply to `board`.
    pub fn for_board(self, board: &PlayerBoard) -> &'static dyn PatternStrategy {
        match self {
            Strategy::Graph => &GRAPH,
            Strategy::Summary => &SUMMARY,
            Strategy::Auto => {
                if board.has_layout() || board.summary.is_none() {
                    &GRAPH
                } else {
                    &SUMMARY
                }
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Auto => "auto",
            Strategy::Graph => "graph",
            Strategy::Summary => "summary",
        })
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Strategy::Auto),
            "graph" => Ok(Strategy::Graph),
            "summary" => Ok(Strategy::Summary),
            other => Err(format!(
                "unknown strategy '{other}' (expected auto, graph or summary)"
            )),
        }
    }
}

/// Reduces a board's raw positions into the summary shape.
pub fn summarize(board: &PlayerBoard) -> PatternSummary {
    let sizes = |groups: Vec<Vec<Position>>| -> Vec<u32> {
        let mut out: Vec<u32> = groups.iter().map(|g| g.len() as u32).collect();
        out.sort_unstable_by(|a, b| b.cmp(a));
        out
    };

    PatternSummary {
        animals: board.animal_counts(),
        largest_habitats: habitat::largest_habitats(board),
        wildlife_patterns: WildlifePatterns {
            bear_pairs: bear::find_pairs(&board.positions_of(Species::Bear)).len() as u32,
            elk_lines: sizes(elk::find_lines(&board.positions_of(Species::Elk))),
            salmon_runs: sizes(salmon::find_runs(&board.positions_of(Species::Salmon))),
            isolated_hawks: hawk::isolated_hawks(&board.positions_of(Species::Hawk)).len() as u32,
            fox_neighbors: fox::neighbor_variety(&board.tokens),
        },
    }
}
