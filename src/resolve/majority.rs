//! Habitat majority bonuses.
//!
//! Each terrain is ranked independently by the players' largest-area sizes.
//!
//! Two players: the larger area earns 2; a tie earns 1 each unless both
//! are 0.
//!
//! Three or four players: nothing is awarded when the top size is 0.
//! Otherwise a sole leader earns 3 and a sole runner-up with a non-zero
//! size earns 1 (tied runners-up earn nothing). Two tied leaders earn 2
//! each, three or more tied leaders earn 1 each, and in both tied cases
//! second place is not considered.
//!
//! The resolver is a pure function of the sizes: it returns fresh bonus
//! maps, so running it again cannot stack bonuses.

use crate::board::{PerTerrain, ALL_TERRAINS};

/// Bonus points for one terrain, given each player's size in input order.
///
/// Fewer than two players receive nothing.
pub fn terrain_bonuses(sizes: &[u32]) -> Vec<u32> {
    let mut bonuses = vec![0; sizes.len()];
    match sizes.len() {
        0 | 1 => {}
        2 => two_player(sizes, &mut bonuses),
        _ => multi_player(sizes, &mut bonuses),
    }
    bonuses
}

fn two_player(sizes: &[u32], bonuses: &mut [u32]) {
    let (a, b) = (sizes[0], sizes[1]);
    if a > b {
        bonuses[0] = 2;
    } else if b > a {
        bonuses[1] = 2;
    } else if a > 0 {
        bonuses[0] = 1;
        bonuses[1] = 1;
    }
}

fn multi_player(sizes: &[u32], bonuses: &mut [u32]) {
    let top = sizes.iter().copied().max().unwrap_or(0);
    if top == 0 {
        return;
    }
    let leaders: Vec<usize> = (0..sizes.len()).filter(|&i| sizes[i] == top).collect();
    match leaders.len() {
        1 => {
            bonuses[leaders[0]] = 3;
            let second = sizes.iter().copied().filter(|&s| s < top).max().unwrap_or(0);
            if second > 0 {
                let runners: Vec<usize> =
                    (0..sizes.len()).filter(|&i| sizes[i] == second).collect();
                if let [only] = runners[..] {
                    bonuses[only] = 1;
                }
            }
        }
        2 => {
            for &i in &leaders {
                bonuses[i] = 2;
            }
        }
        _ => {
            for &i in &leaders {
                bonuses[i] = 1;
            }
        }
    }
}

/// Computes every player's majority bonuses from their habitat sizes.
///
/// The result is index-aligned with `habitats`.
pub fn majority_bonuses(habitats: &[PerTerrain<u32>]) -> Vec<PerTerrain<u32>> {
    let mut out = vec![PerTerrain::<u32>::default(); habitats.len()];
    for terrain in ALL_TERRAINS {
        let sizes: Vec<u32> = habitats.iter().map(|h| h[terrain]).collect();
        for (player, bonus) in terrain_bonuses(&sizes).into_iter().enumerate() {
            out[player][terrain] = bonus;
        }
    }
    out
}
