//! Alternating mark invariant: X, O, X, O, ... down the history.

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: the mark added by entry k is X for odd k and O for even k.
pub struct AlternatingMarkInvariant;

impl Invariant<GameState> for AlternatingMarkInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().iter().enumerate().skip(1).all(|(k, entry)| {
            let expected = if k % 2 == 1 { Player::X } else { Player::O };
            entry
                .move_index()
                .and_then(|i| entry.board().squares().get(i).copied())
                == Some(Square::Occupied(expected))
        })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, O, ... starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_rewrite() {
        let mut game = GameState::new();
        for m in [0, 1, 2] {
            game.apply_move(m);
        }
        game.jump_to(1);
        game.apply_move(5);
        game.apply_move(6);
        assert!(AlternatingMarkInvariant::holds(&game));
        assert_eq!(game.history().len(), 4);
    }
}
