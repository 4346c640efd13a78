//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (falls back to $REWIND_CONFIG, then rewind.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Show the move list latest-first
        #[arg(long)]
        descending: bool,
    },

    /// Apply a move list without the UI and print the result
    Replay {
        /// Cell indices 0-8, comma separated (e.g. "0,3,1,4,2")
        moves: String,

        /// Jump to this history step after the moves
        #[arg(short, long)]
        jump: Option<usize>,

        /// Show the move list latest-first
        #[arg(long)]
        descending: bool,

        /// Print the game view as JSON
        #[arg(long)]
        json: bool,
    },
}
