//! Exhaustive minimax search.
//!
//! A finished position scores `10 - depth` for the side we search for and
//! `depth - 10` against it, so among equally won lines the engine takes the
//! quickest win and among lost lines it holds out the longest. Draws are 0.
//!
//! The tree is at most nine plies deep, so there is no pruning and no
//! transposition table.

use super::random::{RandomSource, choose};
use crate::rules::{evaluate, is_full};
use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score offset for a finished game; a win at depth `d` is worth `WIN_SCORE - d`.
pub const WIN_SCORE: i32 = 10;

/// A root move and its minimax value for the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The candidate square.
    pub position: Position,
    /// Minimax value after playing it.
    pub score: i32,
}

/// Minimax value of `board` with `current` to move, seen from `perspective`.
///
/// Mutates `board` while searching but restores every square it touches
/// before returning.
pub fn minimax(board: &mut Board, current: Player, perspective: Player, depth: i32) -> i32 {
    if let Some(win) = evaluate(board) {
        return if win.player == perspective {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }
    if is_full(board) {
        return 0;
    }

    let maximizing = current == perspective;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        board.place(pos, current);
        let score = minimax(board, current.opponent(), perspective, depth + 1);
        board.set(pos, Square::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Scores every empty square for `player` in index order.
///
/// Searches a private copy; the caller's board is untouched.
#[instrument(skip(board), fields(board = %board))]
pub fn score_moves(board: &Board, player: Player) -> Vec<ScoredMove> {
    let mut scratch = *board;

    Position::ALL
        .into_iter()
        .filter(|pos| board.is_empty(*pos))
        .map(|position| {
            scratch.place(position, player);
            let score = minimax(&mut scratch, player.opponent(), player, 0);
            scratch.set(position, Square::Empty);
            ScoredMove { position, score }
        })
        .collect()
}

/// Picks an optimal move, breaking ties uniformly at random.
///
/// Returns `None` only when the board has no empty square.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn best_move(
    board: &Board,
    player: Player,
    rng: &mut (impl RandomSource + ?Sized),
) -> Option<Position> {
    let scored = score_moves(board, player);
    let best_score = scored.iter().map(|m| m.score).max()?;

    let optimal: Vec<Position> = scored
        .iter()
        .filter(|m| m.score == best_score)
        .map(|m| m.position)
        .collect();

    let chosen = choose(&optimal, rng);
    debug!(best_score, ties = optimal.len(), ?chosen, "Minimax move selected");
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::random::seeded_rng;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_scores() {
        let mut won = board("XXX OO_ ___");
        assert_eq!(minimax(&mut won, Player::O, Player::X, 3), 7);
        assert_eq!(minimax(&mut won, Player::O, Player::O, 3), -7);

        let mut drawn = board("XOX OXO OXO");
        assert_eq!(minimax(&mut drawn, Player::X, Player::X, 9), 0);
    }

    #[test]
    fn test_search_restores_board() {
        let original = board("X___O____");
        let mut scratch = original;
        minimax(&mut scratch, Player::X, Player::X, 0);
        assert_eq!(scratch, original);

        let _ = score_moves(&original, Player::X);
        assert_eq!(original, board("X___O____"));
    }

    #[test]
    fn test_immediate_win_scores_highest() {
        let scored = score_moves(&board("XX_ OO_ ___"), Player::X);
        let win = scored
            .iter()
            .find(|m| m.position == Position::TopRight)
            .unwrap();
        assert_eq!(win.score, WIN_SCORE);
        assert!(scored.iter().all(|m| m.score <= win.score));
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let scored = score_moves(&Board::new(), Player::X);
        assert_eq!(scored.len(), 9);
        assert!(scored.iter().all(|m| m.score == 0));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut rng = seeded_rng(0);
        assert_eq!(best_move(&board("XOX OXO OXO"), Player::X, &mut rng), None);
    }

    #[test]
    fn test_prefers_faster_win() {
        // X can win now on 2, or set up wins elsewhere; the immediate one
        // scores 10 and nothing else does.
        let b = board("XX_ O__ O__");
        let mut rng = seeded_rng(3);
        for _ in 0..10 {
            assert_eq!(best_move(&b, Player::X, &mut rng), Some(Position::TopRight));
        }
    }
}
