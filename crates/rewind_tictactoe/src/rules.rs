//! Game rules for tic-tac-toe: win detection and the draw condition.

pub mod draw;
pub mod win;

pub use draw::{FULL_BOARD_STEP, is_draw_step};
pub use win::{Evaluation, WINNING_LINES, evaluate};
