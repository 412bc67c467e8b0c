use core::future::Future;
use core::time::Duration;
use rand::prelude::*;

use crate::*;

/// Suspension point supplied by the front end, e.g. a browser timeout or a tokio sleep.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Decides who takes the first turn.
pub trait CoinFlipper {
    fn flip(&mut self) -> impl Future<Output = Result<PlayerType>>;
}

/// Fair coin that spins for a fixed delay before landing.
#[derive(Clone, Debug)]
pub struct RandomCoin<T> {
    rng: SmallRng,
    timer: T,
    delay: Duration,
}

impl<T: Timer> RandomCoin<T> {
    pub fn new(seed: u64, timer: T, delay: Duration) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            timer,
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T: Timer> CoinFlipper for RandomCoin<T> {
    async fn flip(&mut self) -> Result<PlayerType> {
        log::debug!("Coin spinning for {:?}", self.delay);
        self.timer.sleep(self.delay).await;
        let result = if self.rng.random_bool(0.5) {
            PlayerType::Chicken
        } else {
            PlayerType::Banana
        };
        log::debug!("Coin landed on {} ({})", result.coin_face(), result);
        Ok(result)
    }
}
