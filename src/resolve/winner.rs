//! Game winner.
//!
//! Players are ranked by total score, then by nature tokens. A tie that
//! survives the nature-token comparison is reported as a shared victory.

use std::cmp::Reverse;

use serde::Serialize;

use crate::board::PlayerId;

/// One player's final standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    pub player_id: PlayerId,
    pub total_score: u32,
    pub nature_tokens: u32,
}

/// How the winner was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WinOutcome {
    /// Highest total score.
    Outright,
    /// Tied on total, ahead on nature tokens.
    Tiebreak,
    /// Tied on both total and nature tokens.
    Shared,
}

/// The resolved winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Winner {
    pub player_id: PlayerId,
    pub outcome: WinOutcome,
    pub explanation: String,
    /// Other players sharing a `Shared` victory.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shared_with: Vec<PlayerId>,
}

/// Sorts standings best first. Equal entries keep input order.
pub fn rank(standings: &[Standing]) -> Vec<Standing> {
    let mut ranked = standings.to_vec();
    ranked.sort_by_key(|s| Reverse((s.total_score, s.nature_tokens)));
    ranked
}

/// Resolves the winner, or `None` when there are no players.
pub fn resolve_winner(standings: &[Standing]) -> Option<Winner> {
    let ranked = rank(standings);
    let top = *ranked.first()?;

    let runner_up = ranked.get(1);
    let (outcome, explanation) = match runner_up {
        Some(next) if next.total_score == top.total_score => {
            if next.nature_tokens == top.nature_tokens {
                (
                    WinOutcome::Shared,
                    format!("Player {} wins (tied, victory shared)", top.player_id),
                )
            } else {
                (
                    WinOutcome::Tiebreak,
                    format!(
                        "Player {} wins on tiebreaker (nature tokens: {} vs {})",
                        top.player_id, top.nature_tokens, next.nature_tokens
                    ),
                )
            }
        }
        _ => (
            WinOutcome::Outright,
            format!("Player {} wins with {} points", top.player_id, top.total_score),
        ),
    };

    let key = |s: &Standing| (s.total_score, s.nature_tokens);
    let shared_with = if outcome == WinOutcome::Shared {
        ranked[1..]
            .iter()
            .take_while(|s| key(*s) == key(&top))
            .map(|s| s.player_id)
            .collect()
    } else {
        Vec::new()
    };

    Some(Winner {
        player_id: top.player_id,
        outcome,
        explanation,
        shared_with,
    })
}
