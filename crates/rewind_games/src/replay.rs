//! Non-interactive replay of a move list.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::{GameState, GameView, MoveOutcome, RejectReason, SortOrder};
use tracing::{debug, info, instrument};

/// Errors from parsing or replaying a move list.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A token is not a cell index 0-8.
    #[display("invalid move {token:?}: expected a cell index 0-8")]
    InvalidMove {
        /// Offending token.
        token: String,
    },
    /// The requested step is past the end of history.
    #[display("cannot jump to step {step}: history has {len} entries")]
    JumpOutOfRange {
        /// Requested step.
        step: usize,
        /// History length after replay.
        len: usize,
    },
}

/// Game produced by a replay plus the moves it ignored.
#[derive(Debug, Clone, Getters)]
pub struct ReplayReport {
    /// Final game state.
    game: GameState,
    /// Cells that were ignored, with the reason.
    rejected: Vec<(usize, RejectReason)>,
}

/// Parses a comma- or whitespace-separated list of cell indices.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<usize>, ReplayError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<usize>()
                .ok()
                .filter(|cell| *cell < 9)
                .ok_or_else(|| ReplayError::InvalidMove {
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Plays `moves` in order, then optionally jumps to `jump`.
///
/// Moves the game would ignore are collected in the report instead of
/// aborting the replay.
#[instrument]
pub fn replay(
    moves: &[usize],
    jump: Option<usize>,
    order: SortOrder,
) -> Result<ReplayReport, ReplayError> {
    let mut game = GameState::with_order(order);
    let mut rejected = Vec::new();

    for &cell in moves {
        match game.apply_move(cell) {
            MoveOutcome::Placed { .. } => {}
            MoveOutcome::Rejected(reason) => {
                debug!(cell, %reason, "Replay move ignored");
                rejected.push((cell, reason));
            }
        }
    }

    if let Some(step) = jump {
        let len = game.history().len();
        if step >= len {
            return Err(ReplayError::JumpOutOfRange { step, len });
        }
        game.jump_to(step);
    }

    info!(
        step = game.step(),
        rejected = rejected.len(),
        "Replay finished"
    );
    Ok(ReplayReport { game, rejected })
}

/// Renders a view as plain text: board, status, toggle label and move list.
pub fn render_text(view: &GameView) -> String {
    let mut out = view.board().display();
    out.push_str("\n\n");
    out.push_str(&view.status().to_string());
    out.push_str("\n\n");
    for item in view.moves() {
        let marker = if *item.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{} {:>2}. {}\n", marker, item.step(), item.label()));
    }
    out.push_str(&format!("[{}]\n", view.toggle_label()));
    out
}
