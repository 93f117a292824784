//! Move selection for AI players.
//!
//! [`choose_move`] is the single entry point: given a board, the player to
//! move and a [`Difficulty`], it returns the square to play. The board is
//! only read; the caller applies the move to its own board.

mod difficulty;
mod heuristics;
mod minimax;
mod random;

pub use difficulty::Difficulty;
pub use heuristics::{easy_move, medium_move, winning_move};
pub use minimax::{ScoredMove, WIN_SCORE, best_move, minimax, score_moves};
pub use random::{RandomSource, choose, entropy_rng, seeded_rng};

use crate::{Board, Player, Position};
use rand_chacha::ChaCha8Rng;
use tracing::instrument;

/// Selects a move for `player` at the given difficulty.
///
/// Returns `None` iff the board has no empty square.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn choose_move(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut (impl RandomSource + ?Sized),
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => easy_move(board, rng),
        Difficulty::Medium => medium_move(board, player, rng),
        Difficulty::Hard => best_move(board, player, rng),
    }
}

/// Move selector that owns its random source.
///
/// Holds no game configuration: board, player and difficulty arrive with
/// every call.
#[derive(Debug, Clone)]
pub struct MoveEngine<R = ChaCha8Rng> {
    rng: R,
}

impl<R: RandomSource> MoveEngine<R> {
    /// Creates an engine drawing tie-breaks from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Selects a move; see [`choose_move`].
    pub fn select_move(
        &mut self,
        board: &Board,
        player: Player,
        difficulty: Difficulty,
    ) -> Option<Position> {
        choose_move(board, player, difficulty, &mut self.rng)
    }
}

impl MoveEngine<ChaCha8Rng> {
    /// Engine with a reproducible tie-break sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(seeded_rng(seed))
    }

    /// Engine seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(entropy_rng())
    }
}
