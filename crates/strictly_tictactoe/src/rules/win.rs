//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight lines whose full occupation by one mark wins the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Line {
    /// Squares 0, 1, 2.
    TopRow,
    /// Squares 3, 4, 5.
    MiddleRow,
    /// Squares 6, 7, 8.
    BottomRow,
    /// Squares 0, 3, 6.
    LeftColumn,
    /// Squares 1, 4, 7.
    CenterColumn,
    /// Squares 2, 5, 8.
    RightColumn,
    /// Squares 0, 4, 8.
    MainDiagonal,
    /// Squares 2, 4, 6.
    AntiDiagonal,
}

impl Line {
    /// All lines in canonical check order: rows, columns, diagonals.
    pub const ALL: [Line; 8] = [
        Line::TopRow,
        Line::MiddleRow,
        Line::BottomRow,
        Line::LeftColumn,
        Line::CenterColumn,
        Line::RightColumn,
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// The three positions making up this line.
    pub fn positions(self) -> [Position; 3] {
        match self {
            Line::TopRow => [Position::TopLeft, Position::TopCenter, Position::TopRight],
            Line::MiddleRow => [
                Position::MiddleLeft,
                Position::Center,
                Position::MiddleRight,
            ],
            Line::BottomRow => [
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
            Line::LeftColumn => [
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
            Line::CenterColumn => [
                Position::TopCenter,
                Position::Center,
                Position::BottomCenter,
            ],
            Line::RightColumn => [
                Position::TopRight,
                Position::MiddleRight,
                Position::BottomRight,
            ],
            Line::MainDiagonal => [Position::TopLeft, Position::Center, Position::BottomRight],
            Line::AntiDiagonal => [Position::TopRight, Position::Center, Position::BottomLeft],
        }
    }

    /// The board indices of this line.
    pub fn indices(self) -> [usize; 3] {
        self.positions().map(Position::to_index)
    }

    /// Returns true if the position lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}

/// A completed line: who owns it and which one it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The player holding all three squares.
    pub player: Player,
    /// The completed line.
    pub line: Line,
}

/// Finds the first completed line in canonical order.
///
/// On a board with several completed lines (unreachable by legal play) the
/// earliest line in [`Line::ALL`] wins the tie.
pub fn evaluate(board: &Board) -> Option<Win> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(Win { player, line })
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).map(|win| win.player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(evaluate(&board), None);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X);
        board.place(Position::TopCenter, Player::X);
        board.place(Position::TopRight, Player::X);
        assert_eq!(
            evaluate(&board),
            Some(Win {
                player: Player::X,
                line: Line::TopRow
            })
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::O);
        board.place(Position::Center, Player::O);
        board.place(Position::BottomRight, Player::O);
        assert_eq!(check_winner(&board), Some(Player::O));
        assert_eq!(evaluate(&board).map(|w| w.line), Some(Line::MainDiagonal));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X);
        board.place(Position::TopCenter, Player::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XXO______".parse().unwrap();
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_every_line_detected_for_both_players() {
        for player in [Player::X, Player::O] {
            for line in Line::ALL {
                let mut board = Board::new();
                for pos in line.positions() {
                    board.place(pos, player);
                }
                assert_eq!(evaluate(&board), Some(Win { player, line }), "{line}");
            }
        }
    }

    #[test]
    fn test_first_line_in_canonical_order_wins_ties() {
        // Top row and left column both complete.
        let board: Board = "XXXX__X__".parse().unwrap();
        assert_eq!(evaluate(&board).map(|w| w.line), Some(Line::TopRow));

        // Middle column and anti-diagonal both complete for O.
        let board: Board = "_OO_O_OO_".parse().unwrap();
        assert_eq!(evaluate(&board).map(|w| w.line), Some(Line::CenterColumn));
    }

    #[test]
    fn test_line_contains() {
        assert!(Line::AntiDiagonal.contains(Position::BottomLeft));
        assert!(!Line::AntiDiagonal.contains(Position::TopLeft));
        let through_center = Line::ALL
            .iter()
            .filter(|line| line.contains(Position::Center))
            .count();
        assert_eq!(through_center, 4);
        let through_edge = Line::ALL
            .iter()
            .filter(|line| line.contains(Position::TopCenter))
            .count();
        assert_eq!(through_edge, 2);
    }

    #[test]
    fn test_line_indices() {
        assert_eq!(Line::TopRow.indices(), [0, 1, 2]);
        assert_eq!(Line::CenterColumn.indices(), [1, 4, 7]);
        assert_eq!(Line::AntiDiagonal.indices(), [2, 4, 6]);
    }
}
