//! History entries: immutable board snapshots and the move that made them.

use super::{Board, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One snapshot in the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, derive_new::new, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Move that produced this board, `None` for the game start.
    position: Option<Position>,
}

impl HistoryEntry {
    /// The entry every game starts from: empty board, no move.
    pub fn initial() -> Self {
        Self::new(Board::new(), None)
    }

    /// Index (0-8) of the move that produced this entry.
    pub fn move_index(&self) -> Option<usize> {
        self.position.map(Position::to_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_initial_entry_has_no_move() {
        let entry = HistoryEntry::initial();
        assert_eq!(entry.board(), &Board::new());
        assert_eq!(entry.move_index(), None);
        assert_eq!(entry.position(), &None);
    }

    #[test]
    fn test_entry_records_move_position() {
        let board = Board::new().with_mark(Position::TopRight, Player::X);
        let entry = HistoryEntry::new(board, Some(Position::TopRight));
        assert_eq!(entry.move_index(), Some(2));
        assert_eq!(entry.position(), &Some(Position::TopRight));
    }
}
