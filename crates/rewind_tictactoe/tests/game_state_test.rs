//! Tests for game state transitions, history and time travel.

use rewind_tictactoe::{
    Board, GameState, GameStatus, Intent, MoveOutcome, Player, Position, SortOrder,
};

fn play(moves: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &m in moves {
        assert!(game.apply_move(m).is_placed(), "move {m} should be legal");
    }
    game
}

#[test]
fn test_top_row_win() {
    let mut game = play(&[0, 3, 1, 4, 2]);

    let eval = game.evaluation();
    assert_eq!(eval.winner, Some(Player::X));
    assert_eq!(
        eval.line.map(|line| line.map(Position::to_index)),
        Some([0, 1, 2])
    );
    assert_eq!(game.status().to_string(), "Winner: X");

    let before = *game.current_board();
    assert!(!game.apply_move(5).is_placed());
    assert_eq!(game.current_board(), &before);
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_every_move_after_win_is_ignored() {
    let mut game = play(&[0, 3, 1, 4, 2]);
    let before = game.clone();
    for cell in 0..9 {
        game.apply_move(cell);
    }
    assert_eq!(game, before);
}

#[test]
fn test_draw_after_nine_moves() {
    // X O X / X O O / O X X
    let mut game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "No winner, it's a draw");
    assert_eq!(game.evaluation().winner, None);

    let before = game.clone();
    for cell in 0..9 {
        assert!(!game.apply_move(cell).is_placed());
    }
    assert_eq!(game, before);
}

#[test]
fn test_occupied_square_never_changes() {
    let mut game = play(&[4]);
    let before = *game.current_board();
    assert!(matches!(game.apply_move(4), MoveOutcome::Rejected(_)));
    assert_eq!(game.current_board(), &before);
    assert!(!game.x_is_next());
}

#[test]
fn test_move_after_jump_discards_future() {
    let mut game = play(&[0, 1, 2, 3, 4]);
    assert_eq!(game.history().len(), 6);

    game.jump_to(2);
    assert_eq!(game.history().len(), 6);

    assert!(game.apply_move(8).is_placed());
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.step(), 3);
    assert_eq!(game.current_entry().position(), &Some(Position::BottomRight));
    assert!(game.current_board().is_empty(Position::TopRight));
}

#[test]
fn test_rejected_move_after_jump_keeps_history() {
    let mut game = play(&[0, 3, 1, 4]);
    game.jump_to(2);
    let before = game.clone();

    assert!(matches!(game.apply_move(0), MoveOutcome::Rejected(_)));
    assert_eq!(game.history().len(), 5);
    assert_eq!(game, before);

    game.jump_to(4);
    assert_eq!(game.current_entry().position(), &Some(Position::Center));
}

#[test]
fn test_rejected_move_keeps_path_to_win() {
    let mut game = play(&[0, 3, 1, 4, 2]);
    assert_eq!(game.history().len(), 6);

    // Occupied cell on an earlier snapshot.
    game.jump_to(2);
    let before = game.clone();
    assert!(!game.apply_move(3).is_placed());
    assert_eq!(game, before);

    // Any cell on the won snapshot, reached by jumping forward.
    game.jump_to(5);
    let before = game.clone();
    assert!(!game.apply_move(8).is_placed());
    assert_eq!(game, before);
    assert_eq!(game.history().len(), 6);

    game.jump_to(0);
    game.jump_to(5);
    assert_eq!(game.status(), GameStatus::Winner(Player::X));
}

#[test]
fn test_deserialized_state_is_validated() {
    let game = play(&[0, 3, 1]);
    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(serde_json::from_value::<GameState>(json.clone()).unwrap(), game);

    let mut past_end = json.clone();
    past_end["step"] = serde_json::json!(4);
    assert!(serde_json::from_value::<GameState>(past_end).is_err());

    let mut no_history = json;
    no_history["history"] = serde_json::json!([]);
    no_history["step"] = serde_json::json!(0);
    no_history["x_is_next"] = serde_json::json!(true);
    assert!(serde_json::from_value::<GameState>(no_history).is_err());
}

#[test]
fn test_turn_flag_follows_jump_parity() {
    let mut game = play(&[0, 1, 2, 3, 4, 5]);
    for step in [3, 0, 5, 2, 6, 1, 4] {
        game.jump_to(step);
        assert_eq!(game.x_is_next(), step % 2 == 0, "step {step}");
    }
}

#[test]
fn test_jump_to_start_resets_board() {
    let mut game = play(&[4, 0, 8]);
    game.jump_to(0);
    assert_eq!(game.current_board(), &Board::new());
    assert!(game.x_is_next());
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
}

#[test]
fn test_jump_back_from_win_allows_play_again() {
    let mut game = play(&[0, 3, 1, 4, 2]);
    game.jump_to(4);
    assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
    assert!(game.apply_move(8).is_placed());
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.status(), GameStatus::NextPlayer(Player::O));
}

#[test]
fn test_position_labels() {
    assert_eq!(Position::Center.label(), "row 2, col 2");
    assert_eq!(Position::TopLeft.label(), "row 1, col 1");
    assert_eq!(Position::BottomRight.label(), "row 3, col 3");
    assert_eq!(Position::from_index(4).map(Position::label), Some("row 2, col 2"));
}

#[test]
fn test_move_list_ascending_and_descending() {
    let mut game = play(&[4, 0]);
    game.jump_to(1);

    let labels: Vec<_> = game.move_list().iter().map(|m| m.label().clone()).collect();
    assert_eq!(
        labels,
        vec![
            "Go to game start",
            "Go to move row 2, col 2",
            "Go to move row 1, col 1",
        ]
    );
    let current: Vec<_> = game.move_list().iter().map(|m| *m.is_current()).collect();
    assert_eq!(current, vec![false, true, false]);

    game.dispatch(Intent::OrderToggleClicked);
    assert_eq!(game.order(), SortOrder::Descending);
    let steps: Vec<_> = game.move_list().iter().map(|m| *m.step()).collect();
    assert_eq!(steps, vec![2, 1, 0]);
    assert_eq!(game.view().toggle_label(), "Show in ascending order");

    // Order has no effect on game logic.
    assert_eq!(game.step(), 1);
    assert_eq!(game.history().len(), 3);
}

#[test]
fn test_initial_order_is_configurable() {
    let game = GameState::with_order(SortOrder::Descending);
    assert_eq!(game.order(), SortOrder::Descending);
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_view_serializes_to_json() {
    let game = play(&[0, 3, 1, 4, 2]);
    let json = serde_json::to_value(game.view()).expect("view serializes");
    assert_eq!(json["step"], 5);
    assert_eq!(json["status"]["Winner"], "X");
    assert_eq!(json["moves"][5]["label"], "Go to move row 1, col 3");
}
