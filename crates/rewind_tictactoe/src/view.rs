//! Read-only views handed to the presentation layer.

use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Status line derived from the active snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A line is complete on the active snapshot.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// All nine moves made without a winner.
    #[display("No winner, it's a draw")]
    Draw,
    /// Game continues.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

impl GameStatus {
    /// Returns true when no further moves are accepted from this snapshot.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }
}

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Text of the button that switches away from this order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Show in descending order",
            Self::Descending => "Show in ascending order",
        }
    }
}

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new, Serialize, Deserialize)]
pub struct MoveListItem {
    /// History step this item jumps to.
    step: usize,
    /// Button text, e.g. `"Go to move row 1, col 1"`.
    label: String,
    /// True for the entry at the current step pointer.
    is_current: bool,
}

/// Label for the move-list entry at `step`.
pub fn move_list_label(step: usize, position: Option<Position>) -> String {
    match position {
        Some(pos) if step > 0 => format!("Go to move {}", pos.label()),
        _ => "Go to game start".to_string(),
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Active snapshot.
    board: Board,
    /// Completed line on the active snapshot, for highlighting.
    winning_line: Option<[Position; 3]>,
    /// Status line.
    status: GameStatus,
    /// Move list in display order.
    moves: Vec<MoveListItem>,
    /// Current sort order.
    order: SortOrder,
    /// Current step pointer.
    step: usize,
}

impl GameView {
    pub(crate) fn new(
        board: Board,
        winning_line: Option<[Position; 3]>,
        status: GameStatus,
        moves: Vec<MoveListItem>,
        order: SortOrder,
        step: usize,
    ) -> Self {
        Self {
            board,
            winning_line,
            status,
            moves,
            order,
            step,
        }
    }

    /// Text for the sort-order toggle.
    pub fn toggle_label(&self) -> &'static str {
        self.order.toggle_label()
    }

    /// Returns true if `pos` is part of the winning line.
    pub fn is_winning_square(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&pos))
    }
}
