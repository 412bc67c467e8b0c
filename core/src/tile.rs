use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Hidden label of every tile on the board, fixed for the whole game.
///
/// Always holds exactly [`TILES_PER_PLAYER`] tiles of each player type.
/// Serialized as a flat list in index order and checked again on the way in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PlayerType>", into = "Vec<PlayerType>")]
pub struct TileAssignment {
    labels: Array2<PlayerType>,
}

impl TileAssignment {
    /// Unshuffled layout: all chicken tiles first, then all banana tiles.
    pub fn base() -> Self {
        Self::from_balanced_labels(&base_labels())
    }

    pub fn from_labels(labels: Vec<PlayerType>) -> Result<Self> {
        if labels.len() != TILE_COUNT {
            return Err(GameError::InvalidBoardShape);
        }

        let chicken_count = labels
            .iter()
            .filter(|&&label| label == PlayerType::Chicken)
            .count();
        if chicken_count != TILES_PER_PLAYER {
            return Err(GameError::UnbalancedLayout);
        }

        Ok(Self::from_balanced_labels(&labels))
    }

    /// Callers guarantee `labels` has [`TILE_COUNT`] entries split evenly.
    pub(crate) fn from_balanced_labels(labels: &[PlayerType]) -> Self {
        let size = usize::from(GRID_SIZE);
        let labels = Array2::from_shape_fn((size, size), |(row, col)| labels[row * size + col]);
        Self { labels }
    }

    pub fn label(&self, index: usize) -> Result<PlayerType> {
        let coords = index_to_coords(index)?;
        Ok(self[coords])
    }

    pub fn count(&self, player: PlayerType) -> usize {
        self.labels.iter().filter(|&&label| label == player).count()
    }

    /// Labels in linear index order.
    pub fn iter(&self) -> impl Iterator<Item = PlayerType> + '_ {
        self.labels.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<PlayerType> {
        self.iter().collect()
    }
}

impl Index<Coord2> for TileAssignment {
    type Output = PlayerType;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.labels[coords.to_nd_index()]
    }
}

impl TryFrom<Vec<PlayerType>> for TileAssignment {
    type Error = GameError;

    fn try_from(labels: Vec<PlayerType>) -> Result<Self> {
        Self::from_labels(labels)
    }
}

impl From<TileAssignment> for Vec<PlayerType> {
    fn from(tiles: TileAssignment) -> Self {
        tiles.to_vec()
    }
}

pub(crate) fn base_labels() -> Vec<PlayerType> {
    let mut labels = Vec::with_capacity(TILE_COUNT);
    labels.resize(TILES_PER_PLAYER, PlayerType::Chicken);
    labels.resize(TILE_COUNT, PlayerType::Banana);
    labels
}

/// Which tiles have been uncovered. A tile is revealed at most once and never hidden again.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<bool>", into = "Vec<bool>")]
pub struct RevealedMask {
    revealed: Array2<bool>,
    revealed_count: usize,
}

impl RevealedMask {
    pub fn new() -> Self {
        let size = usize::from(GRID_SIZE);
        Self {
            revealed: Array2::default((size, size)),
            revealed_count: 0,
        }
    }

    pub fn is_revealed(&self, index: usize) -> Result<bool> {
        let coords = index_to_coords(index)?;
        Ok(self.revealed[coords.to_nd_index()])
    }

    /// Marks a tile revealed, returning `false` when it already was.
    pub fn reveal(&mut self, index: usize) -> Result<bool> {
        let coords = index_to_coords(index)?;
        let cell = &mut self.revealed[coords.to_nd_index()];
        if *cell {
            return Ok(false);
        }
        *cell = true;
        self.revealed_count += 1;
        Ok(true)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.revealed.iter().copied()
    }
}

impl TryFrom<Vec<bool>> for RevealedMask {
    type Error = GameError;

    fn try_from(flags: Vec<bool>) -> Result<Self> {
        if flags.len() != TILE_COUNT {
            return Err(GameError::InvalidBoardShape);
        }
        let size = usize::from(GRID_SIZE);
        let revealed = Array2::from_shape_fn((size, size), |(row, col)| flags[row * size + col]);
        let revealed_count = flags.iter().filter(|&&flag| flag).count();
        Ok(Self {
            revealed,
            revealed_count,
        })
    }
}

impl From<RevealedMask> for Vec<bool> {
    fn from(mask: RevealedMask) -> Self {
        mask.iter().collect()
    }
}

impl Default for RevealedMask {
    fn default() -> Self {
        Self::new()
    }
}
