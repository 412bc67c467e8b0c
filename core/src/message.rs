use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Last user-facing status line of a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusMessage {
    ChooseSide,
    Flipping,
    CoinLanded(PlayerType),
    Turn(PlayerType),
    AlreadyClicked,
    WrongTile { winner: PlayerType, bonus: u32 },
    Won(PlayerType),
    FlipFailed,
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use StatusMessage::*;
        match *self {
            ChooseSide => f.write_str("Choose your side to begin!"),
            Flipping => f.write_str("Flipping the coin..."),
            CoinLanded(player) => write!(
                f,
                "{} ({})! {} player goes first!",
                player.coin_face(),
                player,
                player
            ),
            Turn(player) => write!(f, "{} player's turn!", player),
            AlreadyClicked => f.write_str("Tile already clicked!"),
            WrongTile { winner, bonus } => {
                write!(f, "Wrong tile! {} player wins! +{} points", winner, bonus)
            }
            Won(player) => write!(f, "{} player wins!", player),
            FlipFailed => f.write_str("Error occurred. Please try again."),
        }
    }
}

/// How a message banner should be styled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Info,
    Turn,
    Warning,
    Error,
    Success,
}

impl StatusMessage {
    /// Game over wins over everything else, so a wrong tile that ends the game reads as success.
    pub const fn kind(self, is_game_over: bool) -> MessageKind {
        use StatusMessage::*;
        if is_game_over {
            return MessageKind::Success;
        }
        match self {
            WrongTile { .. } => MessageKind::Error,
            AlreadyClicked => MessageKind::Warning,
            Turn(_) => MessageKind::Turn,
            ChooseSide | Flipping | CoinLanded(_) | Won(_) | FlipFailed => MessageKind::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn renders_original_wording() {
        use PlayerType::*;
        use StatusMessage::*;

        assert_eq!(ChooseSide.to_string(), "Choose your side to begin!");
        assert_eq!(Flipping.to_string(), "Flipping the coin...");
        assert_eq!(
            CoinLanded(Chicken).to_string(),
            "Heads (Chicken)! Chicken player goes first!"
        );
        assert_eq!(
            CoinLanded(Banana).to_string(),
            "Tails (Banana)! Banana player goes first!"
        );
        assert_eq!(Turn(Banana).to_string(), "Banana player's turn!");
        assert_eq!(AlreadyClicked.to_string(), "Tile already clicked!");
        assert_eq!(
            WrongTile {
                winner: Banana,
                bonus: WIN_BONUS
            }
            .to_string(),
            "Wrong tile! Banana player wins! +5 points"
        );
        assert_eq!(Won(Chicken).to_string(), "Chicken player wins!");
        assert_eq!(FlipFailed.to_string(), "Error occurred. Please try again.");
    }

    #[test]
    fn kind_follows_banner_precedence() {
        use StatusMessage::*;

        let wrong = WrongTile {
            winner: PlayerType::Chicken,
            bonus: WIN_BONUS,
        };
        assert_eq!(wrong.kind(true), MessageKind::Success);
        assert_eq!(wrong.kind(false), MessageKind::Error);
        assert_eq!(AlreadyClicked.kind(false), MessageKind::Warning);
        assert_eq!(Turn(PlayerType::Banana).kind(false), MessageKind::Turn);
        assert_eq!(ChooseSide.kind(false), MessageKind::Info);
        assert_eq!(Won(PlayerType::Banana).kind(true), MessageKind::Success);
    }
}
