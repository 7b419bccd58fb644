//! Cross-player resolution.
//!
//! Runs after every board has been scored: habitat majority bonuses per
//! terrain, then the winner.

pub mod majority;
pub mod winner;

pub use majority::{majority_bonuses, terrain_bonuses};
pub use winner::{rank, resolve_winner, Standing, WinOutcome, Winner};
