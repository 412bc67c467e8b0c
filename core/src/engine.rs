use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Setup -> CoinFlip
/// - CoinFlip -> Playing
/// - Playing -> Finished
/// - any -> Setup (reset)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    /// Waiting for the player to pick a side
    Setup,
    /// Side picked, coin in the air or just landed
    CoinFlip,
    Playing,
    Finished,
}

impl GamePhase {
    pub const fn is_setup(self) -> bool {
        matches!(self, Self::Setup)
    }

    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::Setup
    }
}

/// Outcome of the steps leading from side selection to the first turn
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChoiceOutcome {
    NoChange,
    Flipping,
    Resolved,
    FlipFailed,
    Started,
}

impl ChoiceOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of clicking a tile
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    NoChange,
    AlreadyRevealed,
    Matched,
    Won,
    WrongTile,
}

impl ClickOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            NoChange => false,
            AlreadyRevealed => true,
            Matched => true,
            Won => true,
            WrongTile => true,
        }
    }

    pub const fn ends_game(self) -> bool {
        matches!(self, Self::Won | Self::WrongTile)
    }
}

/// All state of one game, from side selection until someone wins.
///
/// Only the action methods mutate it. A reset replaces every field, nothing carries over.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSession {
    phase: GamePhase,
    player_choice: Option<PlayerType>,
    current_player: Option<PlayerType>,
    is_flipping: bool,
    coin_result: Option<PlayerType>,
    tiles: Option<TileAssignment>,
    revealed: RevealedMask,
    scores: PlayerMap<u32>,
    tiles_left: PlayerMap<usize>,
    message: StatusMessage,
    winner: Option<PlayerType>,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Setup,
            player_choice: None,
            current_player: None,
            is_flipping: false,
            coin_result: None,
            tiles: None,
            revealed: RevealedMask::new(),
            scores: PlayerMap::splat(0),
            tiles_left: PlayerMap::splat(TILES_PER_PLAYER),
            message: StatusMessage::ChooseSide,
            winner: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Side picked by the human player.
    pub fn player_choice(&self) -> Option<PlayerType> {
        self.player_choice
    }

    pub fn current_player(&self) -> Option<PlayerType> {
        self.current_player
    }

    pub fn is_flipping(&self) -> bool {
        self.is_flipping
    }

    pub fn coin_result(&self) -> Option<PlayerType> {
        self.coin_result
    }

    /// Hidden layout, `None` until the coin lands.
    pub fn tiles(&self) -> Option<&TileAssignment> {
        self.tiles.as_ref()
    }

    pub fn revealed(&self) -> &RevealedMask {
        &self.revealed
    }

    pub fn scores(&self) -> PlayerMap<u32> {
        self.scores
    }

    pub fn score(&self, player: PlayerType) -> u32 {
        self.scores[player]
    }

    pub fn tiles_left(&self) -> PlayerMap<usize> {
        self.tiles_left
    }

    pub fn message(&self) -> StatusMessage {
        self.message
    }

    pub fn message_kind(&self) -> MessageKind {
        self.message.kind(self.is_game_over())
    }

    pub fn is_game_over(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn winner(&self) -> Option<PlayerType> {
        self.winner
    }

    /// Locks in the human player's side and puts the coin in the air.
    ///
    /// Accepted during setup, or again after a failed flip so the player can retry.
    pub fn choose_player_type(&mut self, choice: PlayerType) -> ChoiceOutcome {
        let can_choose = match self.phase {
            GamePhase::Setup => true,
            GamePhase::CoinFlip => !self.is_flipping && self.coin_result.is_none(),
            GamePhase::Playing | GamePhase::Finished => false,
        };
        if !can_choose {
            log::debug!("Ignoring side choice during {:?}", self.phase);
            return ChoiceOutcome::NoChange;
        }

        log::debug!("Player chose {}", choice);
        self.player_choice = Some(choice);
        self.phase = GamePhase::CoinFlip;
        self.is_flipping = true;
        self.message = StatusMessage::Flipping;
        ChoiceOutcome::Flipping
    }

    /// Applies the coin result. The board is only generated once the coin has landed.
    pub fn resolve_coin_flip(
        &mut self,
        result: Result<PlayerType>,
        generator: impl TileGenerator,
    ) -> ChoiceOutcome {
        if !(matches!(self.phase, GamePhase::CoinFlip) && self.is_flipping) {
            log::debug!("No coin in the air, ignoring result");
            return ChoiceOutcome::NoChange;
        }

        self.is_flipping = false;
        match result {
            Ok(first) => {
                self.coin_result = Some(first);
                self.current_player = Some(first);
                self.tiles = Some(generator.generate());
                self.message = StatusMessage::CoinLanded(first);
                log::debug!("{} goes first", first);
                ChoiceOutcome::Resolved
            }
            Err(err) => {
                log::warn!("Coin flip failed: {}", err);
                self.message = StatusMessage::FlipFailed;
                ChoiceOutcome::FlipFailed
            }
        }
    }

    pub fn start_playing(&mut self) -> ChoiceOutcome {
        match (self.phase, self.current_player) {
            (GamePhase::CoinFlip, Some(first)) if !self.is_flipping && self.tiles.is_some() => {
                self.phase = GamePhase::Playing;
                self.message = StatusMessage::Turn(first);
                log::debug!("Game started, {} to move", first);
                ChoiceOutcome::Started
            }
            _ => {
                log::debug!("Cannot start playing during {:?}", self.phase);
                ChoiceOutcome::NoChange
            }
        }
    }

    pub fn click_tile(&mut self, index: usize) -> Result<ClickOutcome> {
        use ClickOutcome::*;

        let coords = index_to_coords(index)?;

        if !self.phase.is_playing() {
            log::debug!("Ignoring click on tile {} during {:?}", index, self.phase);
            return Ok(NoChange);
        }
        let (Some(tiles), Some(active)) = (&self.tiles, self.current_player) else {
            return Ok(NoChange);
        };
        let label = tiles[coords];

        if !self.revealed.reveal(index)? {
            self.message = StatusMessage::AlreadyClicked;
            return Ok(AlreadyRevealed);
        }
        log::trace!("{} revealed tile {} at {:?}: {}", active, index, coords, label);

        if label != active {
            let winner = active.opposite();
            self.scores[winner] += WIN_BONUS;
            self.message = StatusMessage::WrongTile {
                winner,
                bonus: WIN_BONUS,
            };
            self.finish(winner);
            return Ok(WrongTile);
        }

        self.scores[active] += 1;
        self.tiles_left[active] = self.tiles_left[active].saturating_sub(1);

        if self.tiles_left[active] == 0 {
            self.message = StatusMessage::Won(active);
            self.finish(active);
            return Ok(Won);
        }

        let next = active.opposite();
        self.current_player = Some(next);
        self.message = StatusMessage::Turn(next);
        Ok(Matched)
    }

    /// Throws the whole session away and starts over at side selection.
    pub fn reset_game(&mut self) {
        log::debug!("Resetting game from {:?}", self.phase);
        *self = Self::new();
    }

    fn finish(&mut self, winner: PlayerType) {
        self.phase = GamePhase::Finished;
        self.winner = Some(winner);
        log::debug!(
            "Game over, {} wins, scores {}-{}",
            winner,
            self.scores.chicken,
            self.scores.banana
        );
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PlayerType::*;

    fn playing(first: PlayerType, tiles: TileAssignment) -> GameSession {
        let mut session = GameSession::new();
        assert_eq!(session.choose_player_type(first), ChoiceOutcome::Flipping);
        assert_eq!(
            session.resolve_coin_flip(Ok(first), tiles),
            ChoiceOutcome::Resolved
        );
        assert_eq!(session.start_playing(), ChoiceOutcome::Started);
        session
    }

    #[test]
    fn new_session_waits_for_side_choice() {
        let session = GameSession::new();

        assert_eq!(session.phase(), GamePhase::Setup);
        assert_eq!(session.player_choice(), None);
        assert_eq!(session.current_player(), None);
        assert!(!session.is_flipping());
        assert!(session.tiles().is_none());
        assert_eq!(session.scores(), PlayerMap::splat(0));
        assert_eq!(session.tiles_left(), PlayerMap::splat(18));
        assert_eq!(session.message(), StatusMessage::ChooseSide);
        assert!(!session.is_game_over());
    }

    #[test]
    fn choosing_side_flips_without_touching_the_board() {
        let mut session = GameSession::new();

        assert_eq!(session.choose_player_type(Banana), ChoiceOutcome::Flipping);

        assert_eq!(session.phase(), GamePhase::CoinFlip);
        assert_eq!(session.player_choice(), Some(Banana));
        assert!(session.is_flipping());
        assert_eq!(session.current_player(), None);
        assert!(session.tiles().is_none());
        assert_eq!(session.message(), StatusMessage::Flipping);

        // no second choice while the coin is in the air
        assert_eq!(session.choose_player_type(Chicken), ChoiceOutcome::NoChange);
        assert_eq!(session.player_choice(), Some(Banana));
    }

    #[test]
    fn coin_result_sets_first_player_and_board() {
        let mut session = GameSession::new();
        session.choose_player_type(Chicken);

        assert_eq!(
            session.resolve_coin_flip(Ok(Banana), ShuffleTileGenerator::new(8)),
            ChoiceOutcome::Resolved
        );

        assert_eq!(session.phase(), GamePhase::CoinFlip);
        assert!(!session.is_flipping());
        assert_eq!(session.coin_result(), Some(Banana));
        assert_eq!(session.current_player(), Some(Banana));
        assert_eq!(session.tiles().map(|t| t.count(Banana)), Some(18));
        assert_eq!(session.message(), StatusMessage::CoinLanded(Banana));

        // side is locked in once the coin has landed
        assert_eq!(session.choose_player_type(Banana), ChoiceOutcome::NoChange);

        assert_eq!(session.start_playing(), ChoiceOutcome::Started);
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.message(), StatusMessage::Turn(Banana));
    }

    #[test]
    fn failed_flip_stays_recoverable() {
        let mut session = GameSession::new();
        session.choose_player_type(Chicken);

        assert_eq!(
            session.resolve_coin_flip(Err(GameError::CoinFlipFailed), TileAssignment::base()),
            ChoiceOutcome::FlipFailed
        );
        assert_eq!(session.phase(), GamePhase::CoinFlip);
        assert!(!session.is_flipping());
        assert!(session.tiles().is_none());
        assert_eq!(session.message(), StatusMessage::FlipFailed);
        assert_eq!(session.start_playing(), ChoiceOutcome::NoChange);

        assert_eq!(session.choose_player_type(Banana), ChoiceOutcome::Flipping);
        assert_eq!(
            session.resolve_coin_flip(Ok(Chicken), TileAssignment::base()),
            ChoiceOutcome::Resolved
        );
        assert_eq!(session.player_choice(), Some(Banana));
    }

    #[test]
    fn steps_out_of_order_are_ignored() {
        let mut session = GameSession::new();

        assert_eq!(
            session.resolve_coin_flip(Ok(Chicken), TileAssignment::base()),
            ChoiceOutcome::NoChange
        );
        assert_eq!(session.start_playing(), ChoiceOutcome::NoChange);
        assert_eq!(session.click_tile(0), Ok(ClickOutcome::NoChange));
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn scripted_game_follows_turn_rules() {
        let mut session = playing(Chicken, TileAssignment::base());

        assert_eq!(session.click_tile(0), Ok(ClickOutcome::Matched));
        assert_eq!(session.score(Chicken), 1);
        assert_eq!(session.tiles_left().chicken, 17);
        assert_eq!(session.current_player(), Some(Banana));

        assert_eq!(session.click_tile(18), Ok(ClickOutcome::Matched));
        assert_eq!(session.score(Banana), 1);
        assert_eq!(session.tiles_left().banana, 17);
        assert_eq!(session.current_player(), Some(Chicken));
        assert_eq!(session.message(), StatusMessage::Turn(Chicken));

        // chicken to move, tile 19 is banana
        assert_eq!(session.click_tile(19), Ok(ClickOutcome::WrongTile));
        assert!(session.is_game_over());
        assert_eq!(session.phase(), GamePhase::Finished);
        assert_eq!(session.score(Banana), 1 + WIN_BONUS);
        assert_eq!(session.score(Chicken), 1);
        assert_eq!(session.winner(), Some(Banana));
        assert_eq!(
            session.message(),
            StatusMessage::WrongTile {
                winner: Banana,
                bonus: 5
            }
        );
        assert_eq!(session.message_kind(), MessageKind::Success);
    }

    #[test]
    fn mismatched_label_ends_game_with_bonus_for_opponent() {
        let mut labels = crate::tile::base_labels();
        labels.swap(1, 18);
        let tiles = TileAssignment::from_labels(labels).unwrap();
        let mut session = playing(Chicken, tiles);

        session.click_tile(0).unwrap();
        session.click_tile(19).unwrap();
        let before = session.scores();

        // index 1 now holds banana while chicken is to move
        assert_eq!(session.click_tile(1), Ok(ClickOutcome::WrongTile));
        assert_eq!(session.score(Chicken), before.chicken);
        assert_eq!(session.score(Banana), before.banana + 5);
        assert!(session.revealed().is_revealed(1).unwrap());
    }

    #[test]
    fn already_revealed_tile_only_changes_message() {
        let mut session = playing(Chicken, TileAssignment::base());
        session.click_tile(0).unwrap();
        let scores = session.scores();
        let tiles_left = session.tiles_left();

        assert_eq!(session.click_tile(0), Ok(ClickOutcome::AlreadyRevealed));

        assert_eq!(session.scores(), scores);
        assert_eq!(session.tiles_left(), tiles_left);
        assert_eq!(session.current_player(), Some(Banana));
        assert_eq!(session.message(), StatusMessage::AlreadyClicked);
        assert_eq!(session.message_kind(), MessageKind::Warning);
        assert_eq!(session.revealed().revealed_count(), 1);
    }

    #[test]
    fn last_own_tile_wins_without_bonus() {
        let mut session = playing(Chicken, TileAssignment::base());

        for i in 0..17 {
            assert_eq!(session.click_tile(i), Ok(ClickOutcome::Matched));
            assert_eq!(session.click_tile(18 + i), Ok(ClickOutcome::Matched));
        }
        assert_eq!(session.tiles_left(), PlayerMap::splat(1));

        assert_eq!(session.click_tile(17), Ok(ClickOutcome::Won));

        assert!(session.is_game_over());
        assert_eq!(session.winner(), Some(Chicken));
        assert_eq!(session.score(Chicken), 18);
        assert_eq!(session.score(Banana), 17);
        assert_eq!(session.tiles_left().chicken, 0);
        assert_eq!(session.current_player(), Some(Chicken));
        assert_eq!(session.message(), StatusMessage::Won(Chicken));

        let finished = session.clone();
        assert_eq!(session.choose_player_type(Banana), ChoiceOutcome::NoChange);
        assert_eq!(session, finished);
    }

    #[test]
    fn finished_game_ignores_clicks() {
        let mut session = playing(Banana, TileAssignment::base());
        session.click_tile(0).unwrap();
        let finished = session.clone();

        assert_eq!(session.click_tile(20), Ok(ClickOutcome::NoChange));
        assert_eq!(session.click_tile(0), Ok(ClickOutcome::NoChange));
        assert_eq!(session, finished);
    }

    #[test]
    fn out_of_range_click_is_rejected() {
        let mut session = playing(Chicken, TileAssignment::base());

        assert_eq!(session.click_tile(36), Err(GameError::InvalidIndex(36)));
        assert_eq!(session.revealed().revealed_count(), 0);
        assert_eq!(session.current_player(), Some(Chicken));
    }

    #[test]
    fn reset_discards_everything() {
        let mut sessions = [
            GameSession::new(),
            playing(Chicken, TileAssignment::base()),
            playing(Banana, TileAssignment::base()),
        ];
        sessions[0].choose_player_type(Banana);
        sessions[1].click_tile(0).unwrap();
        sessions[2].click_tile(0).unwrap();

        for mut session in sessions {
            session.reset_game();

            assert_eq!(session.phase(), GamePhase::Setup);
            assert_eq!(session.scores(), PlayerMap::splat(0));
            assert_eq!(session.tiles_left(), PlayerMap::splat(18));
            assert_eq!(session.revealed().revealed_count(), 0);
            assert_eq!(session.current_player(), None);
            assert_eq!(session.message(), StatusMessage::ChooseSide);
            assert_eq!(session, GameSession::new());
        }
    }
}
