//! Terminal front end for time-travel tic-tac-toe.
//!
//! # Architecture
//!
//! - **Config**: TOML settings plus `.env` overrides
//! - **Logging**: tracing to a log file so the TUI stays clean
//! - **Replay**: non-interactive play from a move list
//! - **TUI**: ratatui board, status line and move list driven by key events

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod logging;
mod replay;
mod tui;

pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH};
pub use logging::init_tracing;
pub use replay::{ReplayError, ReplayReport, parse_moves, render_text, replay};
pub use tui::{App, Focus, draw, move_cursor, run_tui};
