//! Rewind - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rewind_games::{
    Config, DEFAULT_CONFIG_PATH, init_tracing, parse_moves, render_text, replay, run_tui,
};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;
    init_tracing(&config)?;

    match cli.command.unwrap_or(Command::Play { descending: false }) {
        Command::Play { descending } => run_tui(&config.with_descending(descending)),
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => run_replay(&config.with_descending(descending), &moves, jump, json),
    }
}

/// Resolves the config path from the flag, `REWIND_CONFIG`, or the default.
fn load_config(flag: Option<PathBuf>) -> Result<Config> {
    let path = flag
        .or_else(|| std::env::var_os("REWIND_CONFIG").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    Config::load_or_default(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Run a scripted game and print the final view
#[instrument(skip(config))]
fn run_replay(config: &Config, moves: &str, jump: Option<usize>, json: bool) -> Result<()> {
    let moves = parse_moves(moves)?;
    let report = replay(&moves, jump, config.initial_order())?;

    for (cell, reason) in report.rejected() {
        warn!(cell, %reason, "Move ignored during replay");
        eprintln!("ignored move {}: {}", cell, reason);
    }

    let view = report.game().view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_text(&view));
    }

    info!(status = %view.status(), "Replay printed");
    Ok(())
}
