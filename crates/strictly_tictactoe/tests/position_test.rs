//! Tests for tic-tac-toe position enum.

use strictly_tictactoe::{Board, Player, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_row_and_column() {
    for pos in Position::ALL {
        assert_eq!(pos.row(), pos.to_index() / 3);
        assert_eq!(pos.column(), pos.to_index() % 3);
    }
    assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.column()), (1, 2));
}

#[test]
fn test_from_label_or_number() {
    assert_eq!(Position::from_label_or_number("4"), Some(Position::Center));
    assert_eq!(Position::from_label_or_number(" center "), Some(Position::Center));
    assert_eq!(Position::from_label_or_number("Top-Center"), Some(Position::TopCenter));
    assert_eq!(Position::from_label_or_number("bottom right"), Some(Position::BottomRight));
    assert_eq!(Position::from_label_or_number("12"), None);
    assert_eq!(Position::from_label_or_number("middle"), None);
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    assert_eq!(Position::valid_moves(&board).len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.place(Position::TopLeft, Player::X);
    board.place(Position::Center, Player::O);

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_corners() {
    let corners: Vec<usize> = Position::CORNERS.iter().map(|p| p.to_index()).collect();
    assert_eq!(corners, vec![0, 2, 6, 8]);
    assert!(!Position::CENTER.is_corner());
}
