//! Game scoring.
//!
//! `GameScorer` ties the pieces together for a whole table:
//! 1. validate the boards (player count, unique ids, board integrity),
//! 2. score every board independently, in parallel with rayon,
//! 3. resolve habitat majority bonuses across all players,
//! 4. resolve the winner.
//!
//! Step 3 needs every player's habitat sizes, so it only starts once step 2
//! has finished for all boards.

pub mod player;
pub mod report;

use std::collections::HashSet;

use rayon::prelude::*;

use crate::board::{BoardError, PlayerBoard, PlayerId};
use crate::patterns::{PatternError, Strategy};
use crate::resolve::{majority_bonuses, resolve_winner, Standing};
use crate::rules::ScoringRules;

pub use player::PlayerScore;
pub use report::{GameReport, PlayerSummary};

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 4;

/// Errors that stop a game from being scored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("expected 2 to 4 players, got {0}")]
    PlayerCount(usize),

    #[error("player id {0} appears more than once")]
    DuplicatePlayer(PlayerId),

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// Scores games under one set of rules.
#[derive(Debug, Clone, Default)]
pub struct GameScorer {
    rules: ScoringRules,
    strategy: Strategy,
}

impl GameScorer {
    pub fn new(rules: ScoringRules) -> Self {
        GameScorer {
            rules,
            strategy: Strategy::Auto,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Scores one board, without majority bonuses.
    pub fn score_player(&self, board: &PlayerBoard) -> Result<PlayerScore, ScoreError> {
        board.validate()?;
        let strategy = self.strategy.for_board(board);
        let wildlife = strategy.wildlife(board, &self.rules)?;
        let habitats = strategy.largest_habitats(board)?;

        tracing::debug!(
            target: "cascadia::scorer",
            player = board.player_id,
            strategy = strategy.name(),
            animals = wildlife.values().fold(0u32, |acc, s| acc.saturating_add(s.points)),
            habitats = habitats.total(),
            "player.scored"
        );
        Ok(PlayerScore::aggregate(board, wildlife, habitats))
    }

    /// Scores every board and applies majority bonuses.
    ///
    /// The result keeps the input order of `boards`.
    pub fn score_players(&self, boards: &[PlayerBoard]) -> Result<Vec<PlayerScore>, ScoreError> {
        check_table(boards)?;
        let mut scores = boards
            .par_iter()
            .map(|board| self.score_player(board))
            .collect::<Result<Vec<_>, _>>()?;
        apply_majority_bonuses(&mut scores);
        Ok(scores)
    }

    /// Scores a complete game.
    pub fn score_game(&self, boards: &[PlayerBoard]) -> Result<GameReport, ScoreError> {
        let scores = self.score_players(boards)?;
        let standings: Vec<Standing> = scores.iter().map(PlayerScore::standing).collect();
        let winner = resolve_winner(&standings).ok_or(ScoreError::PlayerCount(0))?;

        tracing::info!(
            target: "cascadia::scorer",
            players = scores.len(),
            winner = winner.player_id,
            outcome = ?winner.outcome,
            "game.scored"
        );
        Ok(GameReport::new(winner, scores))
    }
}

/// Checks the player count and that ids are unique.
fn check_table(boards: &[PlayerBoard]) -> Result<(), ScoreError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&boards.len()) {
        return Err(ScoreError::PlayerCount(boards.len()));
    }
    let mut seen = HashSet::with_capacity(boards.len());
    for board in boards {
        if !seen.insert(board.player_id) {
            return Err(ScoreError::DuplicatePlayer(board.player_id));
        }
    }
    Ok(())
}

/// Recomputes every player's majority bonuses from their habitat scores
/// and overwrites the previous ones. Safe to call repeatedly.
pub fn apply_majority_bonuses(scores: &mut [PlayerScore]) {
    let habitats: Vec<_> = scores.iter().map(|s| s.habitat_scores().clone()).collect();
    for (score, bonuses) in scores.iter_mut().zip(majority_bonuses(&habitats)) {
        score.set_majority_bonuses(bonuses);
    }
}
