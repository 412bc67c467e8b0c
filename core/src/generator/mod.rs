use crate::*;
pub use random::*;

mod random;

pub trait TileGenerator {
    fn generate(self) -> TileAssignment;
}

/// A prebuilt layout generates itself, which is how fixed boards get injected.
impl TileGenerator for TileAssignment {
    fn generate(self) -> TileAssignment {
        self
    }
}
