//! Turn parity invariant: the turn flag follows the step pointer.

use super::super::GameState;
use super::Invariant;

/// Invariant: the step pointer is inside history and X is next exactly on
/// even steps.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(game: &GameState) -> bool {
        game.step() < game.history().len() && game.x_is_next() == (game.step() % 2 == 0)
    }

    fn description() -> &'static str {
        "Step pointer is within history and X moves on even steps"
    }
}
