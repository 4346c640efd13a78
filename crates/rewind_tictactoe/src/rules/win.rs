//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, in evaluation order.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of scanning a board for a completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Evaluation {
    /// Player owning the first completed line, if any.
    pub winner: Option<Player>,
    /// The completed line itself.
    pub line: Option<[Position; 3]>,
}

/// Scans the board for a completed line.
///
/// Lines are checked in [`WINNING_LINES`] order and the first match wins.
/// Works on any board, including ones no legal game could produce.
#[instrument]
pub fn evaluate(board: &Board) -> Evaluation {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return Evaluation {
                winner: sq.player(),
                line: Some(line),
            };
        }
    }

    Evaluation::default()
}
