//! Single-cell step invariant: each entry adds exactly one mark.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: consecutive history entries differ in exactly one square.
///
/// Entry 0 is the empty board with no move. Entry k fills one square that was
/// empty in entry k-1, and records that square as its move.
pub struct SingleCellStepInvariant;

impl Invariant<GameState> for SingleCellStepInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return false;
        };
        if first.board().occupied() != 0 || first.position().is_some() {
            return false;
        }

        history.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let changed: Vec<usize> = (0..9)
                .filter(|&i| before.squares()[i] != after.squares()[i])
                .collect();

            match changed.as_slice() {
                [i] => {
                    before.squares()[*i] == Square::Empty
                        && after.squares()[*i] != Square::Empty
                        && pair[1].move_index() == Some(*i)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry fills exactly one previously empty square"
    }
}
