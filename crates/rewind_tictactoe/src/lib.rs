//! Tic-tac-toe with move history and time travel.
//!
//! [`GameState`] owns the game: a history of immutable board snapshots, a
//! step pointer into that history, the turn flag and the move-list order.
//! The presentation layer reads [`GameView`]s and sends [`Intent`]s back.
//!
//! ```
//! use rewind_tictactoe::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     game.apply_move(cell);
//! }
//! assert_eq!(game.status(), GameStatus::Winner(Player::X));
//!
//! game.jump_to(0);
//! assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
//! assert_eq!(game.history().len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Intent, MoveOutcome, RejectReason};
pub use game::{GameState, InvalidGameState};
pub use history::HistoryEntry;
pub use position::Position;
pub use rules::{Evaluation, FULL_BOARD_STEP, WINNING_LINES, evaluate};
pub use types::{Board, Player, Square};
pub use view::{GameStatus, GameView, MoveListItem, SortOrder, move_list_label};
