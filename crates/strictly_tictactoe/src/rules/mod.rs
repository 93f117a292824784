//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the move engine and the game typestate share one
//! definition of a win.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, Win, check_winner, evaluate};

use super::{Board, Outcome};

/// Derives the outcome of a board, or `None` while the game is undecided.
///
/// A completed line takes precedence over a full board.
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(Win { player, line }) = evaluate(board) {
        Some(Outcome::Winner { player, line })
    } else if is_full(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}
