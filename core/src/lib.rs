#![no_std]

extern crate alloc;

use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use coin::*;
pub use driver::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use message::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod coin;
mod driver;
mod engine;
mod error;
mod generator;
mod message;
mod snapshot;
mod tile;
mod types;

/// Width and height of the square board.
pub const GRID_SIZE: Coord = 6;

pub const TILE_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

pub const TILES_PER_PLAYER: usize = TILE_COUNT / 2;

/// Points awarded to the other player when the active player reveals a wrong tile.
pub const WIN_BONUS: u32 = 5;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// How long the coin spins before landing.
    pub coin_flip_delay: Duration,
    /// Pause between announcing the coin result and the first turn.
    pub reveal_delay: Duration,
    /// Fixes every layout and coin flip of a driver when set.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub const DEFAULT_COIN_FLIP_DELAY: Duration = Duration::from_millis(2000);
    pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(1500);

    pub const fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// No pacing at all, for headless play and tests.
    pub const fn instant() -> Self {
        Self {
            coin_flip_delay: Duration::ZERO,
            reveal_delay: Duration::ZERO,
            seed: None,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            coin_flip_delay: Self::DEFAULT_COIN_FLIP_DELAY,
            reveal_delay: Self::DEFAULT_REVEAL_DELAY,
            seed: None,
        }
    }
}
