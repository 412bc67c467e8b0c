use core::fmt;
use core::ops::{Index, IndexMut};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Single coordinate axis used for grid rows and columns.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Converts a linear tile index into row-major grid coordinates.
pub fn index_to_coords(index: usize) -> Result<Coord2> {
    if index >= TILE_COUNT {
        return Err(GameError::InvalidIndex(index));
    }
    let size = usize::from(GRID_SIZE);
    // both parts are below GRID_SIZE, which fits in a Coord
    Ok(((index / size) as Coord, (index % size) as Coord))
}

pub fn coords_to_index((row, col): Coord2) -> Result<usize> {
    if row >= GRID_SIZE || col >= GRID_SIZE {
        return Err(GameError::InvalidCoords);
    }
    Ok(usize::from(row) * usize::from(GRID_SIZE) + usize::from(col))
}

/// The two sides of the game. Every tile secretly belongs to one of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    Chicken,
    Banana,
}

impl PlayerType {
    pub const ALL: [PlayerType; 2] = [PlayerType::Chicken, PlayerType::Banana];

    pub const fn opposite(self) -> Self {
        match self {
            Self::Chicken => Self::Banana,
            Self::Banana => Self::Chicken,
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Chicken => "Chicken",
            Self::Banana => "Banana",
        }
    }

    /// Chicken is heads, banana is tails.
    pub const fn coin_face(self) -> CoinFace {
        match self {
            Self::Chicken => CoinFace::Heads,
            Self::Banana => CoinFace::Tails,
        }
    }
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PlayerType {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("chicken") {
            Ok(Self::Chicken)
        } else if s.eq_ignore_ascii_case("banana") {
            Ok(Self::Banana)
        } else {
            Err(GameError::UnknownPlayerType)
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinFace {
    Heads,
    Tails,
}

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Heads => "Heads",
            Self::Tails => "Tails",
        })
    }
}

/// One value per player type, e.g. scores or tiles left.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    pub chicken: T,
    pub banana: T,
}

impl<T: Copy> PlayerMap<T> {
    pub const fn splat(value: T) -> Self {
        Self {
            chicken: value,
            banana: value,
        }
    }
}

impl<T> PlayerMap<T> {
    pub fn iter(&self) -> impl Iterator<Item = (PlayerType, &T)> {
        PlayerType::ALL.into_iter().map(move |player| (player, &self[player]))
    }
}

impl<T> Index<PlayerType> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerType) -> &Self::Output {
        match player {
            PlayerType::Chicken => &self.chicken,
            PlayerType::Banana => &self.banana,
        }
    }
}

impl<T> IndexMut<PlayerType> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerType) -> &mut Self::Output {
        match player {
            PlayerType::Chicken => &mut self.chicken,
            PlayerType::Banana => &mut self.banana,
        }
    }
}
