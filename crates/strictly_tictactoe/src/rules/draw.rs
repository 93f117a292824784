//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::evaluate;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks for a draw: full board and nobody holding a line.
///
/// A full board that also contains a completed line is a win, not a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && evaluate(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.place(pos, Player::X);
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXX OO_ ___".parse().unwrap();
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // X O X / O X O / O X X completes the main diagonal.
        let board: Board = "XOX OXO OXX".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
