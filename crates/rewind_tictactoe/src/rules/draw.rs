//! Draw detection for tic-tac-toe.

/// Step number at which every square has been played.
///
/// Tied to the 3x3 board: the draw check compares the step pointer against
/// this constant instead of scanning the board.
pub const FULL_BOARD_STEP: usize = 9;

/// Returns true if `step` is the full-board step.
///
/// Only meaningful when the snapshot at `step` has no winner.
pub fn is_draw_step(step: usize) -> bool {
    step == FULL_BOARD_STEP
}
