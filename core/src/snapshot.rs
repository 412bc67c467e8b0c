use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a presentation layer may observe about a session, flattened for the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub game_state: GamePhase,
    pub player_choice: Option<PlayerType>,
    pub current_player: Option<PlayerType>,
    pub is_flipping: bool,
    pub coin_result: Option<PlayerType>,
    /// Empty until the coin lands.
    pub tiles: Vec<PlayerType>,
    pub clicked_tiles: Vec<bool>,
    pub scores: PlayerMap<u32>,
    pub tiles_left: PlayerMap<usize>,
    pub message: String,
    pub message_kind: MessageKind,
    pub is_game_over: bool,
    pub winner: Option<PlayerType>,
}

impl GameSnapshot {
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            game_state: session.phase(),
            player_choice: session.player_choice(),
            current_player: session.current_player(),
            is_flipping: session.is_flipping(),
            coin_result: session.coin_result(),
            tiles: session
                .tiles()
                .map(TileAssignment::to_vec)
                .unwrap_or_default(),
            clicked_tiles: session.revealed().iter().collect(),
            scores: session.scores(),
            tiles_left: session.tiles_left(),
            message: session.message().to_string(),
            message_kind: session.message_kind(),
            is_game_over: session.is_game_over(),
            winner: session.winner(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl GameSession {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_session(self)
    }
}
