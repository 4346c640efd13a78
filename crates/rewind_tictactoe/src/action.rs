//! First-class user intents and move outcomes.
//!
//! The UI never mutates game state directly. It forwards one of three
//! intents into [`GameState::dispatch`](super::GameState::dispatch).

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A user action forwarded from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Intent {
    /// A board cell (0-8) was clicked.
    #[display("cell {_0} clicked")]
    CellClicked(usize),
    /// A move-list entry was clicked.
    #[display("history step {_0} clicked")]
    HistoryStepClicked(usize),
    /// The sort-order toggle was clicked.
    #[display("order toggle clicked")]
    OrderToggleClicked,
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RejectReason {
    /// The active snapshot already has a winner.
    #[display("game is already won")]
    GameOver,
    /// The square at the position is already occupied.
    #[display("square {_0} is already occupied")]
    SquareOccupied(Position),
    /// The index is not a board cell.
    #[display("index {_0} is off the board")]
    OutOfBounds(usize),
}

/// Result of [`GameState::apply_move`](super::GameState::apply_move).
///
/// Rejections are silent no-ops for the player; the outcome exists so callers
/// can log or assert on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveOutcome {
    /// The mark was placed and a new history entry appended.
    #[display("{player} placed at {position}")]
    Placed {
        /// Player who moved.
        player: Player,
        /// Where the mark went.
        position: Position,
    },
    /// The move was ignored.
    #[display("move rejected: {_0}")]
    Rejected(RejectReason),
}

impl MoveOutcome {
    /// Returns true if the move changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}
