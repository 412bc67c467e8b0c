use chicken_banana_core::*;
use std::fmt::Write;

fn label_glyph(player: PlayerType) -> &'static str {
    match player {
        PlayerType::Chicken => "C",
        PlayerType::Banana => "B",
    }
}

fn kind_prefix(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "",
        MessageKind::Turn => "> ",
        MessageKind::Warning => "! ",
        MessageKind::Error => "!! ",
        MessageKind::Success => "** ",
    }
}

/// Hidden tiles show their index, revealed ones their label. Everything is shown once the game is over.
pub(crate) fn board(session: &GameSession) -> String {
    let mut out = String::new();
    let Some(tiles) = session.tiles() else {
        return out;
    };
    let reveal_all = session.is_game_over();

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let label = tiles[(row, col)];
            // row and col are in range by construction
            let index = coords_to_index((row, col)).unwrap_or_default();
            let revealed = session.revealed().is_revealed(index).unwrap_or(false);
            if revealed || reveal_all {
                let marker = if revealed { ' ' } else { '.' };
                let _ = write!(out, " {}{} ", marker, label_glyph(label));
            } else {
                let _ = write!(out, " {:>2} ", index);
            }
        }
        out.push('\n');
    }
    out
}

pub(crate) fn scoreboard(session: &GameSession) -> String {
    let mut out = String::new();
    let scores = session.scores();
    let tiles_left = session.tiles_left();
    for (player, score) in scores.iter() {
        let you = if session.player_choice() == Some(player) {
            " (you)"
        } else {
            ""
        };
        let turn = if session.current_player() == Some(player) && !session.is_game_over() {
            " <- turn"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "{}{}: score {}, tiles left {}{}",
            player, you, score, tiles_left[player], turn
        );
    }
    out
}

pub(crate) fn session(session: &GameSession) -> String {
    let mut out = String::new();
    if !session.phase().is_setup() {
        out.push_str(&board(session));
        out.push_str(&scoreboard(session));
    }
    let _ = writeln!(
        out,
        "{}{}",
        kind_prefix(session.message_kind()),
        session.message()
    );
    out
}
