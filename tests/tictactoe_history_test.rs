//! Scenario tests for the move history.

use timeline_tictactoe::{
    History, HistoryInvariants, InvariantSet, JumpError, MoveError, Outcome, Player, Position,
    Square, Status,
};

#[test]
fn test_double_play_changes_state_once() {
    let mut history = History::new();
    assert!(history.play(4).is_ok());
    let after_first = history.clone();

    assert_eq!(history.play(4), Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(history, after_first);
    assert_eq!(history.len(), 2);
}

#[test]
fn test_jump_back_then_play_truncates() {
    let mut history = History::replay(&[4, 0, 1, 7]).unwrap();
    assert_eq!(history.len(), 5);

    history.jump_to(1).unwrap();
    history.play(8).unwrap();

    assert_eq!(history.len(), 3);
    assert_eq!(history.current_move(), 2);
    assert_eq!(history.snapshots()[1].placed(), Some(Position::Center));
    assert_eq!(history.snapshots()[2].placed(), Some(Position::BottomRight));
    assert!(HistoryInvariants::check_all(&history).is_ok());
}

#[test]
fn test_jump_round_trip() {
    let mut history = History::replay(&[4, 0, 1, 7, 2]).unwrap();
    let snapshots = history.snapshots().to_vec();

    for m in 0..snapshots.len() {
        history.jump_to(m).unwrap();
        assert_eq!(history.current_board(), snapshots[m].board());
        assert_eq!(history.x_is_next(), m % 2 == 0);
        assert_eq!(history.snapshots(), snapshots.as_slice());
    }
}

#[test]
fn test_jump_out_of_range_keeps_cursor() {
    let mut history = History::replay(&[4, 0]).unwrap();
    history.jump_to(1).unwrap();
    assert_eq!(
        history.jump_to(3),
        Err(JumpError::OutOfRange { requested: 3, len: 3 })
    );
    assert_eq!(history.current_move(), 1);
}

#[test]
fn test_center_opening_sequence() {
    let mut history = History::new();
    for cell in [4, 0, 1, 7, 2] {
        history.play(cell).unwrap();
    }

    let board = history.current_board();
    for pos in [Position::Center, Position::TopCenter, Position::TopRight] {
        assert_eq!(board.get(pos), Square::Occupied(Player::X));
    }
    for pos in [Position::TopLeft, Position::BottomCenter] {
        assert_eq!(board.get(pos), Square::Occupied(Player::O));
    }
    assert_eq!(history.outcome(), Outcome::NoWinner);
    assert_eq!(history.status(), Status::NextPlayer(Player::O));
}

#[test]
fn test_top_row_win_ends_game() {
    let mut history = History::replay(&[0, 4, 1, 7, 2]).unwrap();
    assert_eq!(
        history.outcome(),
        Outcome::Win(
            Player::X,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        )
    );
    assert_eq!(history.status().to_string(), "Winner: X");
    assert_eq!(history.play(8), Err(MoveError::GameOver));

    // Going back re-opens the game from that point.
    history.jump_to(4).unwrap();
    assert_eq!(history.status().to_string(), "Next player: X");
    history.play(8).unwrap();
    assert_eq!(history.len(), 6);
    assert_eq!(history.outcome(), Outcome::NoWinner);
}

#[test]
fn test_draw_game() {
    // X O X
    // X O O
    // O X X
    let history = History::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
    assert_eq!(history.outcome(), Outcome::Draw);
    assert_eq!(history.status().to_string(), "Draw!");
}

#[test]
fn test_move_descriptions() {
    let history = History::replay(&[4, 2]).unwrap();
    let labels: Vec<String> = history
        .move_descriptions()
        .iter()
        .map(|entry| entry.label().clone())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Go to game start",
            "Go to move #1 (1, 1)",
            "You are at move #2 (0, 2)",
        ]
    );
}
