use super::*;
use rand::prelude::*;

/// Generation strategy that starts from the base layout and shuffles it uniformly.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleTileGenerator {
    seed: u64,
}

impl ShuffleTileGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TileGenerator for ShuffleTileGenerator {
    fn generate(self) -> TileAssignment {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut labels = crate::tile::base_labels();
        fisher_yates(&mut labels, &mut rng);
        log::debug!("Generated tile layout from seed {}", self.seed);
        log::trace!("Layout: {:?}", labels);
        TileAssignment::from_balanced_labels(&labels)
    }
}

/// In-place uniform shuffle: walk from the last index down to 1, swapping with a
/// uniformly chosen index at or below it.
fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
