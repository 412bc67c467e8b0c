use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Tile index {0} is out of range")]
    InvalidIndex(usize),
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Layout does not split tiles evenly between players")]
    UnbalancedLayout,
    #[error("Coin flip failed")]
    CoinFlipFailed,
    #[error("Unknown player type")]
    UnknownPlayerType,
}

pub type Result<T> = core::result::Result<T, GameError>;
