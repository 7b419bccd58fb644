//! Input and output formats.
//!
//! Game files come either as raw board layouts or as pre-reduced pattern
//! summaries from the board-perception service. See `game` for both shapes.

pub mod game;

pub use game::{load_game, parse_game, GameFileError};
