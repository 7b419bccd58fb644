//! Random board generation.
//!
//! Grows a connected patch of habitat tiles outward from the origin and
//! drops wildlife tokens on a share of them. Used for demos, benchmarks and
//! strategy conformance checks.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::hex::Position;
use super::kind::{ALL_SPECIES, ALL_TERRAINS};
use super::state::{AnimalToken, HabitatTile, PlayerBoard, PlayerId};

/// Shape parameters for a random board.
#[derive(Debug, Clone, Copy)]
pub struct RandomBoardConfig {
    /// Number of habitat tiles to place.
    pub tiles: usize,
    /// Probability that a tile carries a wildlife token.
    pub token_density: f64,
    /// Upper bound (inclusive) on nature tokens.
    pub max_nature_tokens: u32,
}

impl Default for RandomBoardConfig {
    fn default() -> Self {
        RandomBoardConfig {
            tiles: 23,
            token_density: 0.8,
            max_nature_tokens: 4,
        }
    }
}

/// Generates a random, structurally valid board for one player.
pub fn random_board(
    player_id: PlayerId,
    config: &RandomBoardConfig,
    rng: &mut impl Rng,
) -> PlayerBoard {
    let mut board = PlayerBoard::new(player_id);
    if config.tiles == 0 {
        return board;
    }

    let mut occupied: HashSet<Position> = HashSet::with_capacity(config.tiles);
    let mut cells: Vec<Position> = Vec::with_capacity(config.tiles);
    let origin = Position::new(0, 0);
    occupied.insert(origin);
    cells.push(origin);

    while cells.len() < config.tiles {
        let base = cells[rng.gen_range(0..cells.len())];
        let mut options = base.neighbors();
        options.shuffle(rng);
        if let Some(next) = options.into_iter().find(|p| !occupied.contains(p)) {
            occupied.insert(next);
            cells.push(next);
        }
    }

    for &cell in &cells {
        let terrain = ALL_TERRAINS[rng.gen_range(0..ALL_TERRAINS.len())];
        board.tiles.push(HabitatTile {
            terrain,
            position: cell,
        });
        if rng.gen_bool(config.token_density.clamp(0.0, 1.0)) {
            let species = ALL_SPECIES[rng.gen_range(0..ALL_SPECIES.len())];
            board.tokens.push(AnimalToken {
                species,
                position: cell,
            });
        }
    }

    board.nature_tokens = rng.gen_range(0..=config.max_nature_tokens);
    board
}

/// Generates boards for players `1..=players`.
pub fn random_game(
    players: u32,
    config: &RandomBoardConfig,
    rng: &mut impl Rng,
) -> Vec<PlayerBoard> {
    (1..=players).map(|id| random_board(id, config, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::hex::is_adjacent;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn board_has_requested_tile_count_and_is_valid() {
        let mut rng = SmallRng::seed_from_u64(7);
        let config = RandomBoardConfig::default();
        let board = random_board(3, &config, &mut rng);
        assert_eq!(board.player_id, 3);
        assert_eq!(board.tiles.len(), config.tiles);
        assert!(board.tokens.len() <= config.tiles);
        assert!(board.nature_tokens <= config.max_nature_tokens);
        assert!(board.validate().is_ok());
    }

    #[test]
    fn tiles_form_one_connected_patch() {
        let mut rng = SmallRng::seed_from_u64(11);
        let board = random_board(1, &RandomBoardConfig::default(), &mut rng);
        for (i, tile) in board.tiles.iter().enumerate().skip(1) {
            let touches_earlier = board.tiles[..i]
                .iter()
                .any(|t| is_adjacent(t.position, tile.position));
            assert!(touches_earlier, "tile {} is detached", tile.position);
        }
    }

    #[test]
    fn same_seed_same_board() {
        let config = RandomBoardConfig::default();
        let a = random_board(1, &config, &mut SmallRng::seed_from_u64(42));
        let b = random_board(1, &config, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_tiles_gives_empty_board() {
        let config = RandomBoardConfig {
            tiles: 0,
            ..Default::default()
        };
        let board = random_board(1, &config, &mut SmallRng::seed_from_u64(1));
        assert!(!board.has_layout());
    }

    #[test]
    fn game_numbers_players_from_one() {
        let boards = random_game(4, &RandomBoardConfig::default(), &mut SmallRng::seed_from_u64(5));
        let ids: Vec<PlayerId> = boards.iter().map(|b| b.player_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
