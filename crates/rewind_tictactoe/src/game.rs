//! The authoritative game state: history, step pointer, turn and sort order.

use super::action::{Intent, MoveOutcome, RejectReason};
use super::history::HistoryEntry;
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{Evaluation, evaluate, is_draw_step};
use super::view::{GameStatus, GameView, MoveListItem, SortOrder, move_list_label};
use super::{Board, Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Tic-tac-toe game with time travel.
///
/// History always holds at least the initial entry and the step pointer
/// always indexes into it. All mutations go through [`GameState::apply_move`],
/// [`GameState::jump_to`] and [`GameState::toggle_order`]. Deserialized states
/// are checked against [`GameInvariants`] and rejected if any fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRecord")]
pub struct GameState {
    history: Vec<HistoryEntry>,
    step: usize,
    x_is_next: bool,
    order: SortOrder,
}

impl GameState {
    /// Creates a new game: one empty entry, X to move, ascending order.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(SortOrder::Ascending)
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_order(order: SortOrder) -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            step: 0,
            x_is_next: true,
            order,
        }
    }

    /// Plays the current player's mark at cell `index` (0-8).
    ///
    /// The move is ignored, leaving the state untouched, if the active
    /// snapshot already has a winner or the cell is occupied. An accepted move
    /// discards history beyond the step pointer, so moving after a jump back
    /// abandons the old future.
    #[instrument(skip(self), fields(step = self.step, x_is_next = self.x_is_next))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        let Some(position) = Position::from_index(index) else {
            warn!(index, "Ignoring move off the board");
            return MoveOutcome::Rejected(RejectReason::OutOfBounds(index));
        };

        let board = *self.current_entry().board();

        if evaluate(&board).winner.is_some() {
            debug!(%position, "Ignoring move after win");
            return MoveOutcome::Rejected(RejectReason::GameOver);
        }
        if !board.is_empty(position) {
            debug!(%position, "Ignoring move on occupied square");
            return MoveOutcome::Rejected(RejectReason::SquareOccupied(position));
        }

        let player = self.to_move();
        self.history.truncate(self.step + 1);
        self.history
            .push(HistoryEntry::new(board.with_mark(position, player), Some(position)));
        self.step = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;

        debug_assert!(GameInvariants::check_all(self).is_ok());
        debug!(%player, %position, step = self.step, "Move placed");
        MoveOutcome::Placed { player, position }
    }

    /// Makes history entry `step` the active one.
    ///
    /// History is left intact; only a later move truncates it. Steps past the
    /// end of history are ignored.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) {
        if step >= self.history.len() {
            warn!(step, len = self.history.len(), "Ignoring jump past end of history");
            return;
        }

        self.step = step;
        self.x_is_next = step % 2 == 0;

        debug_assert!(GameInvariants::check_all(self).is_ok());
        debug!(step, "Jumped to step");
    }

    /// Flips the move-list order.
    #[instrument(skip(self), fields(order = ?self.order))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = ?self.order, "Move order toggled");
    }

    /// Routes a UI intent to the matching operation.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Option<MoveOutcome> {
        match intent {
            Intent::CellClicked(index) => Some(self.apply_move(index)),
            Intent::HistoryStepClicked(step) => {
                self.jump_to(step);
                None
            }
            Intent::OrderToggleClicked => {
                self.toggle_order();
                None
            }
        }
    }

    /// Full history, game start first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Current step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Turn flag: true when X moves next.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Player whose mark the next move places.
    pub fn to_move(&self) -> Player {
        Player::from_turn_flag(self.x_is_next)
    }

    /// Current move-list order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Entry at the step pointer.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.step]
    }

    /// Active snapshot.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Win evaluation of the active snapshot.
    pub fn evaluation(&self) -> Evaluation {
        evaluate(self.current_board())
    }

    /// Winning line on the active snapshot.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.evaluation().line
    }

    /// Status derived from the active snapshot.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.evaluation().winner {
            GameStatus::Winner(winner)
        } else if is_draw_step(self.step) {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(self.to_move())
        }
    }

    /// Move list in display order.
    pub fn move_list(&self) -> Vec<MoveListItem> {
        let mut moves: Vec<_> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, entry)| {
                MoveListItem::new(
                    step,
                    move_list_label(step, *entry.position()),
                    step == self.step,
                )
            })
            .collect();

        if self.order == SortOrder::Descending {
            moves.reverse();
        }
        moves
    }

    /// Snapshot of everything the renderer needs.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        let evaluation = self.evaluation();
        GameView::new(
            *self.current_board(),
            evaluation.line,
            self.status(),
            self.move_list(),
            self.order,
            self.step,
        )
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// A serialized game that breaks one or more history invariants.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid game state: {message}")]
pub struct InvalidGameState {
    /// Descriptions of the violated invariants, joined with `; `.
    pub message: String,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct GameStateRecord {
    history: Vec<HistoryEntry>,
    step: usize,
    x_is_next: bool,
    order: SortOrder,
}

impl TryFrom<GameStateRecord> for GameState {
    type Error = InvalidGameState;

    fn try_from(record: GameStateRecord) -> Result<Self, Self::Error> {
        let game = Self {
            history: record.history,
            step: record.step,
            x_is_next: record.x_is_next,
            order: record.order,
        };

        GameInvariants::check_all(&game).map_err(|violations| {
            let message = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%message, "Rejecting deserialized game state");
            InvalidGameState { message }
        })?;
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(moves: &[usize]) -> GameState {
        let mut game = GameState::new();
        for &m in moves {
            assert!(game.apply_move(m).is_placed(), "move {m} should be legal");
        }
        game
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step(), 0);
        assert!(game.x_is_next());
        assert_eq!(game.order(), SortOrder::Ascending);
        assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
    }

    #[test]
    fn test_moves_alternate() {
        let game = play(&[4, 0]);
        let board = game.current_board();
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
    }

    #[test]
    fn test_rejection_reasons() {
        let mut game = play(&[4]);
        assert_eq!(
            game.apply_move(4),
            MoveOutcome::Rejected(RejectReason::SquareOccupied(Position::Center))
        );
        assert_eq!(
            game.apply_move(9),
            MoveOutcome::Rejected(RejectReason::OutOfBounds(9))
        );

        let mut won = play(&[0, 3, 1, 4, 2]);
        assert_eq!(won.apply_move(5), MoveOutcome::Rejected(RejectReason::GameOver));
    }

    #[test]
    fn test_stored_snapshots_are_not_mutated() {
        let mut game = play(&[0]);
        let first = *game.history()[1].board();
        game.apply_move(1);
        assert_eq!(game.history()[1].board(), &first);
    }

    #[test]
    fn test_dispatch_routes_intents() {
        let mut game = GameState::new();
        assert!(game.dispatch(Intent::CellClicked(0)).is_some());
        assert_eq!(game.dispatch(Intent::HistoryStepClicked(0)), None);
        assert_eq!(game.step(), 0);
        assert_eq!(game.dispatch(Intent::OrderToggleClicked), None);
        assert_eq!(game.order(), SortOrder::Descending);
    }

    #[test]
    fn test_jump_past_end_is_ignored() {
        let mut game = play(&[0, 1]);
        game.jump_to(7);
        assert_eq!(game.step(), 2);
        assert!(game.x_is_next());
    }

    #[test]
    fn test_deserialize_checks_invariants() {
        let game = play(&[4, 0]);
        let json = serde_json::to_value(&game).unwrap();
        let restored: GameState = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(restored, game);

        let mut bad_step = json.clone();
        bad_step["step"] = serde_json::json!(5);
        let err = serde_json::from_value::<GameState>(bad_step).unwrap_err();
        assert!(err.to_string().contains("Step pointer is within history"));

        let mut bad_turn = json;
        bad_turn["x_is_next"] = serde_json::json!(false);
        assert!(serde_json::from_value::<GameState>(bad_turn).is_err());
    }

    #[test]
    fn test_view_matches_state() {
        let game = play(&[0, 3, 1, 4, 2]);
        let view = game.view();
        assert_eq!(view.board(), game.current_board());
        assert_eq!(*view.status(), GameStatus::Winner(Player::X));
        assert!(view.is_winning_square(Position::TopCenter));
        assert!(!view.is_winning_square(Position::Center));
        assert_eq!(view.moves().len(), 6);
        assert_eq!(*view.step(), 5);
    }
}
