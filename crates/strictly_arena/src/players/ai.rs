//! Engine-backed AI player.

use super::Player;
use anyhow::Result;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use strictly_tictactoe::{Difficulty, GameInProgress, MoveEngine, Position};
use tracing::{debug, instrument};

/// AI that pauses for a think delay, then asks the engine for a move.
pub struct AiPlayer {
    name: String,
    difficulty: Difficulty,
    engine: MoveEngine<ChaCha8Rng>,
    think_delay: Duration,
}

impl AiPlayer {
    /// Creates a new AI player.
    pub fn new(
        name: impl Into<String>,
        difficulty: Difficulty,
        engine: MoveEngine<ChaCha8Rng>,
        think_delay: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            difficulty,
            engine,
            think_delay,
        }
    }

    /// The tier this player plays at.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

#[async_trait::async_trait]
impl Player for AiPlayer {
    #[instrument(skip(self, game), fields(ai = %self.name, difficulty = %self.difficulty))]
    async fn choose(&mut self, game: &GameInProgress) -> Result<Position> {
        if !self.think_delay.is_zero() {
            tokio::time::sleep(self.think_delay).await;
        }

        let position = self
            .engine
            .select_move(game.board(), game.to_move(), self.difficulty)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;

        debug!(%position, "AI chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_ai(&self) -> bool {
        true
    }
}
