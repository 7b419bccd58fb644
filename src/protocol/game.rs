//! Game file decoding.
//!
//! Two JSON shapes are accepted, told apart by their top-level keys:
//!
//! - `{"players": [PlayerBoard, ...]}` with raw tokens, tiles, an optional
//!   summary, or any mix of those.
//! - Board-perception output, `{"player_1": {...}, "player_2": {...}}`,
//!   where each entry is a `PatternSummary` plus `nature_tokens`. The player
//!   id is taken from the key suffix and players are ordered by id. Other
//!   top-level keys are skipped with a warning.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::board::{PatternSummary, PlayerBoard, PlayerId};

const PLAYER_KEY_PREFIX: &str = "player_";

/// Errors raised while reading a game file.
#[derive(Debug, Error)]
pub enum GameFileError {
    #[error("failed to read game from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid game JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object at the top level")]
    NotAnObject,
}

#[derive(Deserialize)]
struct PlayersFile {
    players: Vec<PlayerBoard>,
}

#[derive(Deserialize)]
struct PerceptionEntry {
    #[serde(default)]
    nature_tokens: u32,
    #[serde(flatten)]
    summary: PatternSummary,
}

/// Parses a game from JSON text.
pub fn parse_game(data: &str) -> Result<Vec<PlayerBoard>, GameFileError> {
    let value: Value = serde_json::from_str(data)?;
    let Value::Object(map) = value else {
        return Err(GameFileError::NotAnObject);
    };

    if map.contains_key("players") {
        let file: PlayersFile = serde_json::from_value(Value::Object(map))?;
        return Ok(file.players);
    }
    parse_perception(map)
}

fn parse_perception(map: Map<String, Value>) -> Result<Vec<PlayerBoard>, GameFileError> {
    let mut boards = BTreeMap::new();
    for (key, entry) in map {
        let Some(player_id) = parse_player_key(&key) else {
            tracing::warn!(
                target: "cascadia::protocol",
                key = %key,
                "game.unknown_key_skipped"
            );
            continue;
        };
        let entry: PerceptionEntry = serde_json::from_value(entry)?;
        boards.insert(
            player_id,
            PlayerBoard {
                player_id,
                nature_tokens: entry.nature_tokens,
                summary: Some(entry.summary),
                ..Default::default()
            },
        );
    }
    Ok(boards.into_values().collect())
}

fn parse_player_key(key: &str) -> Option<PlayerId> {
    key.strip_prefix(PLAYER_KEY_PREFIX)?.parse().ok()
}

/// Reads and parses a game file.
pub fn load_game(path: &Path) -> Result<Vec<PlayerBoard>, GameFileError> {
    let data = fs::read_to_string(path).map_err(|source| GameFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let boards = parse_game(&data)?;
    tracing::debug!(
        target: "cascadia::protocol",
        path = %path.display(),
        players = boards.len(),
        "game.loaded"
    );
    Ok(boards)
}
