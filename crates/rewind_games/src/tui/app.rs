//! Application state and key handling.

use super::input::{digit_cell, move_cursor};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use derive_getters::Getters;
use rewind_tictactoe::{GameState, GameView, Intent, MoveOutcome, Position, SortOrder};
use tracing::{debug, info, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move the move-list selection.
    Moves,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
///
/// Owns the [`GameState`]; rendering only ever sees [`GameView`]s.
#[derive(Debug, Getters)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    /// History step highlighted in the move list.
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with an empty game.
    #[instrument]
    pub fn new(order: SortOrder) -> Self {
        Self {
            game: GameState::with_order(order),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        }
    }

    /// Render input for the current frame.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Handles a key event, forwarding any resulting intent to the game.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Skip key release events (crossterm fires both press and release).
        if key.kind == KeyEventKind::Release {
            return;
        }

        if let Some(intent) = self.intent_for(key.code) {
            self.dispatch(intent);
        }
    }

    /// Applies an intent and keeps the move-list selection valid.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) {
        match self.game.dispatch(intent) {
            Some(outcome @ MoveOutcome::Placed { .. }) => info!(%outcome, "Move applied"),
            Some(outcome) => debug!(%outcome, "Move ignored"),
            None => debug!(step = self.game.step(), "Intent applied"),
        }
        self.selected = self.game.step();
    }

    /// Translates a key into an intent, updating UI-only state on the way.
    fn intent_for(&mut self, code: KeyCode) -> Option<Intent> {
        let last = self.game.history().len() - 1;
        let step = self.game.step();

        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
                None
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected = step;
                None
            }
            KeyCode::Char('s') => Some(Intent::OrderToggleClicked),
            KeyCode::Char('[') if step > 0 => Some(Intent::HistoryStepClicked(step - 1)),
            KeyCode::Char(']') if step < last => Some(Intent::HistoryStepClicked(step + 1)),
            KeyCode::Home => Some(Intent::HistoryStepClicked(0)),
            KeyCode::End => Some(Intent::HistoryStepClicked(last)),
            code if digit_cell(code).is_some() => {
                let cell = digit_cell(code)?;
                self.cursor = Position::from_index(cell)?;
                Some(Intent::CellClicked(cell))
            }
            code => match self.focus {
                Focus::Board => self.board_key(code),
                Focus::Moves => self.moves_key(code),
            },
        }
    }

    fn board_key(&mut self, code: KeyCode) -> Option<Intent> {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                Some(Intent::CellClicked(self.cursor.to_index()))
            }
            code => {
                self.cursor = move_cursor(self.cursor, code);
                None
            }
        }
    }

    fn moves_key(&mut self, code: KeyCode) -> Option<Intent> {
        let moves = self.game.move_list();
        let index = moves
            .iter()
            .position(|item| *item.step() == self.selected)
            .unwrap_or(0);

        match code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::HistoryStepClicked(self.selected)),
            KeyCode::Up if index > 0 => {
                self.selected = *moves[index - 1].step();
                None
            }
            KeyCode::Down if index + 1 < moves.len() => {
                self.selected = *moves[index + 1].step();
                None
            }
            _ => None,
        }
    }
}
