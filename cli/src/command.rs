use anyhow::{Context, bail};
use chicken_banana_core::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Side(PlayerType),
    Tile(usize),
    NewGame,
    Quit,
}

impl Command {
    /// Accepts a side name, a tile index, a `row,col` pair, `new` or `quit`.
    pub fn parse(line: &str) -> anyhow::Result<Self> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "new" | "n" | "reset" => return Ok(Self::NewGame),
            "quit" | "q" | "exit" => return Ok(Self::Quit),
            _ => {}
        }

        if let Ok(side) = line.parse::<PlayerType>() {
            return Ok(Self::Side(side));
        }

        if let Some((row, col)) = line.split_once(',') {
            let row = row.trim().parse().context("Row is not a number")?;
            let col = col.trim().parse().context("Column is not a number")?;
            return Ok(Self::Tile(coords_to_index((row, col))?));
        }

        match line.parse() {
            Ok(index) => Ok(Self::Tile(index)),
            Err(_) => bail!("Expected chicken, banana, a tile index, row,col, new or quit"),
        }
    }
}
