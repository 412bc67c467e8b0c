use chicken_banana_core::*;
use clap::Parser;
use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

mod command;
mod render;
mod settings;

use command::Command;
use settings::Settings;

#[derive(Parser, Debug)]
#[command(version, about = "Find all your tiles before your opponent does", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with pacing and seed settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pick a side up front instead of being asked
    #[arg(long)]
    side: Option<PlayerType>,

    /// Print every state change as JSON instead of a board
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, Debug)]
struct TokioTimer;

impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

fn print_session(session: &GameSession, json: bool) {
    if json {
        match session.snapshot().to_json() {
            Ok(line) => println!("{}", line),
            Err(err) => log::error!("Could not serialize state: {}", err),
        }
    } else {
        print!("{}", render::session(session));
    }
}

fn prompt(session: &GameSession) -> std::io::Result<()> {
    let hint = match session.phase() {
        GamePhase::Setup | GamePhase::CoinFlip => "side (chicken/banana)",
        GamePhase::Playing => "tile (index or row,col)",
        GamePhase::Finished => "new or quit",
    };
    print!("{}> ", hint);
    std::io::stdout().flush()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let config = settings.game_config();
    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let json = args.json;
    let mut driver = GameDriver::with_random_coin(seed, TokioTimer, config);
    driver.set_observer(move |session| print_session(session, json));
    print_session(driver.session(), json);

    if let Some(side) = args.side {
        driver.choose_player_type(side).await;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt(driver.session())?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::NewGame) => {
                driver.reset_game();
                if let Some(side) = args.side {
                    driver.choose_player_type(side).await;
                }
            }
            Ok(Command::Side(side)) => {
                if driver.choose_player_type(side).await == ChoiceOutcome::NoChange {
                    println!("Side is already chosen, type new to start over");
                }
            }
            Ok(Command::Tile(index)) => match driver.click_tile(index) {
                Ok(ClickOutcome::NoChange) => println!("No game in progress"),
                Ok(_) => {}
                Err(err) => println!("{}", err),
            },
            Err(err) => println!("{:#}", err),
        }
    }

    log::debug!("Bye");
    Ok(())
}
