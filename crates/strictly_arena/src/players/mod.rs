//! Player trait and implementations.

mod ai;
mod human;

pub use ai::AiPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use strictly_tictactoe::{GameInProgress, Position};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Chooses the next move for the player to move in `game`.
    async fn choose(&mut self, game: &GameInProgress) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True when the player computes its move rather than waiting on input.
    fn is_ai(&self) -> bool {
        false
    }
}
