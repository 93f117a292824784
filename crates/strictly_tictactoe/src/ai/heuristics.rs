//! Cheap move rules for the easy and medium tiers.

use super::random::{RandomSource, choose};
use crate::rules::evaluate;
use crate::{Board, Player, Position, Square};
use tracing::{debug, instrument};

/// First empty square (index order) that completes a line for `player`.
pub fn winning_move(board: &Board, player: Player) -> Option<Position> {
    let mut scratch = *board;
    Position::valid_moves(board).into_iter().find(|&pos| {
        scratch.place(pos, player);
        let wins = evaluate(&scratch).is_some_and(|win| win.player == player);
        scratch.set(pos, Square::Empty);
        wins
    })
}

/// Uniformly random empty square.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn easy_move(board: &Board, rng: &mut (impl RandomSource + ?Sized)) -> Option<Position> {
    choose(&Position::valid_moves(board), rng)
}

/// Win if possible, else block, else center, else a corner, else anything.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn medium_move(
    board: &Board,
    player: Player,
    rng: &mut (impl RandomSource + ?Sized),
) -> Option<Position> {
    if let Some(pos) = winning_move(board, player) {
        debug!(%pos, "Taking winning square");
        return Some(pos);
    }

    if let Some(pos) = winning_move(board, player.opponent()) {
        debug!(%pos, "Blocking opponent");
        return Some(pos);
    }

    if board.is_empty(Position::CENTER) {
        return Some(Position::CENTER);
    }

    let corners: Vec<Position> = Position::CORNERS
        .into_iter()
        .filter(|pos| board.is_empty(*pos))
        .collect();
    if let Some(pos) = choose(&corners, rng) {
        return Some(pos);
    }

    easy_move(board, rng)
}
