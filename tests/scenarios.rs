//! End-to-end games on the default 6x7 board.
//!
//! Each test drives a session purely through `submit_move`, the same way a
//! front end would.

use connect_four::game::{Cell, GameSession, GameStatus, Player, Rejection, Seat};

fn new_session() -> GameSession {
    GameSession::new(
        6,
        7,
        Player::new("red").unwrap(),
        Player::new("yellow").unwrap(),
    )
    .unwrap()
}

#[test]
fn test_vertical_win_in_first_column() {
    let mut session = new_session();
    let columns = [0, 1, 0, 1, 0, 1];
    for col in columns {
        let outcome = session.submit_move(col);
        assert_eq!(outcome.status(), GameStatus::InProgress);
    }

    let outcome = session.submit_move(0);
    let mv = outcome.placed().unwrap();
    assert_eq!((mv.row, mv.col), (2, 0));
    assert_eq!(outcome.status(), GameStatus::Won(Seat::First));
    assert_eq!(session.winner().map(Player::color), Some("red"));
}

#[test]
fn test_checkerboard_fill_is_a_tie() {
    let mut session = new_session();
    let columns = [
        0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, 4, 5, 4, 5, 4, 5,
        5, 4, 5, 4, 5, 4, 6, 6, 6, 6, 6, 6,
    ];
    let (last, rest) = columns.split_last().unwrap();
    for &col in rest {
        let outcome = session.submit_move(col);
        assert!(outcome.accepted());
        assert_eq!(outcome.status(), GameStatus::InProgress);
    }

    let outcome = session.submit_move(*last);
    assert!(outcome.accepted());
    assert_eq!(outcome.status(), GameStatus::Tied);
    assert!(session.board().is_full());
    assert_eq!(session.winner(), None);
}

#[test]
fn test_horizontal_win_on_bottom_row() {
    let mut session = new_session();
    // Second seat stacks on top of the first seat's pieces and never blocks
    for col in 0..3 {
        session.submit_move(col);
        session.submit_move(col);
    }

    let outcome = session.submit_move(3);
    assert_eq!(outcome.placed().map(|mv| mv.row), Some(5));
    assert_eq!(outcome.status(), GameStatus::Won(Seat::First));
    for col in 0..4 {
        assert_eq!(session.board().get(5, col), Cell::Taken(Seat::First));
    }
}

// First seat climbs the staircase built in columns 0..=3
const RISING_DIAGONAL: [usize; 11] = [0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3];

#[test]
fn test_rising_diagonal_win() {
    let mut session = new_session();
    let (last, rest) = RISING_DIAGONAL.split_last().unwrap();
    for &col in rest {
        assert_eq!(session.submit_move(col).status(), GameStatus::InProgress);
    }

    let outcome = session.submit_move(*last);
    assert_eq!(outcome.placed().map(|mv| (mv.row, mv.col)), Some((2, 3)));
    assert_eq!(outcome.status(), GameStatus::Won(Seat::First));
    for (row, col) in [(5, 0), (4, 1), (3, 2), (2, 3)] {
        assert_eq!(session.board().get(row, col), Cell::Taken(Seat::First));
    }
}

#[test]
fn test_falling_diagonal_win() {
    let mut session = new_session();
    let mirrored: Vec<usize> = RISING_DIAGONAL.iter().map(|&col| 6 - col).collect();
    let (last, rest) = mirrored.split_last().unwrap();
    for &col in rest {
        assert_eq!(session.submit_move(col).status(), GameStatus::InProgress);
    }

    let outcome = session.submit_move(*last);
    assert_eq!(outcome.placed().map(|mv| (mv.row, mv.col)), Some((2, 3)));
    assert_eq!(outcome.status(), GameStatus::Won(Seat::First));
    for (row, col) in [(2, 3), (3, 4), (4, 5), (5, 6)] {
        assert_eq!(session.board().get(row, col), Cell::Taken(Seat::First));
    }
}

#[test]
fn test_drop_into_full_column_changes_nothing() {
    let mut session = new_session();
    for _ in 0..6 {
        assert!(session.submit_move(4).accepted());
    }
    let board = session.board().clone();
    let seat = session.current_seat();

    let outcome = session.submit_move(4);
    assert!(!outcome.accepted());
    assert_eq!(outcome.placed(), None);
    assert_eq!(outcome.rejection(), Some(Rejection::ColumnFull(4)));
    assert_eq!(session.board(), &board);
    assert_eq!(session.current_seat(), seat);
}

#[test]
fn test_replay_matches_incremental_play() {
    let columns = [3, 3, 4, 2, 5, 6, 1, 0, 0, 9, 2];
    let mut session = new_session();
    for col in columns {
        session.submit_move(col);
    }

    let replayed = GameSession::replay(
        6,
        7,
        4,
        Player::new("red").unwrap(),
        Player::new("yellow").unwrap(),
        columns,
    )
    .unwrap();
    assert_eq!(replayed.board(), session.board());
    assert_eq!(replayed.status(), session.status());
    assert_eq!(replayed.current_seat(), session.current_seat());
    assert_eq!(replayed.moves_played(), 10);
}
