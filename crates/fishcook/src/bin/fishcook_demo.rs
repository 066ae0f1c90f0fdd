//! Headless FishCook table.
//!
//! Usage: `fishcook_demo [config.toml]`
//!
//! Stocks both markets, deals one recipe per player and prints the boards.
//! Logs go to stderr; `RUST_LOG` overrides the configured filter.

use std::path::PathBuf;
use std::process::ExitCode;

use fishcook::market::{Market, Produce};
use fishcook::{GameConfig, GameResult, GameSession};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => GameConfig::from_path(&path),
        None => Ok(GameConfig::default()),
    };

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("fishcook_demo: {err}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.log_filter);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Game aborted");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(config: &GameConfig) -> GameResult<()> {
    let mut session = GameSession::from_config(config)?;

    for seat in 0..session.roster().len() {
        session.deal_recipe(seat)?;
    }

    println!("FishCook: {} players, {} days", session.roster().len(), session.days());
    for player in session.roster().iter() {
        let hand: Vec<String> = player.recipes().iter().map(ToString::to_string).collect();
        println!("  {} ({} coins): {}", player.name(), player.money(), hand.join(", "));
    }

    println!("\nFish market (rows = tiers 6..1):");
    print!("{}", session.fish_market().inventory());
    println!("allocation: {}", session.fish_market().allocation());

    println!("\nFarmers market:");
    let header: Vec<&str> = Produce::ALL.iter().map(|p| p.name()).collect();
    println!("{}", header.join("\t"));
    print!("{}", session.farmers_market().inventory());

    info!(recipes_left = session.deck().remaining(), "Demo finished");
    Ok(())
}
