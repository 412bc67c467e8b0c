use alloc::boxed::Box;
use rand::prelude::*;

use crate::*;

/// Called with the session after every visible change, so a front end can redraw.
pub type Observer = Box<dyn FnMut(&GameSession)>;

/// Owns a session and runs its actions, including the paced coin flip.
///
/// The side choice holds `&mut self` for its whole duration, so only one action is ever in flight.
pub struct GameDriver<C, T> {
    session: GameSession,
    rng: SmallRng,
    coin: C,
    timer: T,
    config: GameConfig,
    observer: Option<Observer>,
}

impl<T: Timer + Clone> GameDriver<RandomCoin<T>, T> {
    /// Driver with a fair coin; `seed` fixes every layout and flip it will produce.
    pub fn with_random_coin(seed: u64, timer: T, config: GameConfig) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let coin = RandomCoin::new(rng.random(), timer.clone(), config.coin_flip_delay);
        Self::from_parts(rng, coin, timer, config)
    }
}

impl<C: CoinFlipper, T: Timer> GameDriver<C, T> {
    pub fn new(seed: u64, coin: C, timer: T, config: GameConfig) -> Self {
        Self::from_parts(SmallRng::seed_from_u64(seed), coin, timer, config)
    }

    fn from_parts(rng: SmallRng, coin: C, timer: T, config: GameConfig) -> Self {
        Self {
            session: GameSession::new(),
            rng,
            coin,
            timer,
            config,
            observer: None,
        }
    }

    pub fn set_observer(&mut self, observer: impl FnMut(&GameSession) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Picks a side, flips the coin and, once it lands and the result has been shown for
    /// the reveal delay, starts the game.
    pub async fn choose_player_type(&mut self, choice: PlayerType) -> ChoiceOutcome {
        if !self.session.choose_player_type(choice).has_update() {
            return ChoiceOutcome::NoChange;
        }
        self.notify();

        let flip = self.coin.flip().await;
        let generator = ShuffleTileGenerator::new(self.rng.random());
        let outcome = self.session.resolve_coin_flip(flip, generator);
        self.notify();
        if outcome != ChoiceOutcome::Resolved {
            return outcome;
        }

        self.timer.sleep(self.config.reveal_delay).await;
        let outcome = self.session.start_playing();
        self.notify();
        outcome
    }

    pub fn click_tile(&mut self, index: usize) -> Result<ClickOutcome> {
        let outcome = self.session.click_tile(index)?;
        if outcome.has_update() {
            self.notify();
        }
        Ok(outcome)
    }

    pub fn reset_game(&mut self) {
        self.session.reset_game();
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.session);
        }
    }
}
