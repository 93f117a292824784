//! Human player fed by lines of text input.

use super::Player;
use anyhow::Result;
use strictly_tictactoe::{GameInProgress, Position};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Human player reading moves from a line channel.
///
/// Each line is a square number (0-8) or label such as `"center"`.
/// Invalid or occupied squares are reported and the next line is read.
pub struct HumanPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<String>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn choose(&mut self, game: &GameInProgress) -> Result<Position> {
        println!("\n{}\n{} ({}), your move:", game.board().display(), self.name, game.to_move());

        while let Some(line) = self.input_rx.recv().await {
            match Position::from_label_or_number(&line) {
                Some(pos) if game.board().is_empty(pos) => {
                    debug!(player = %self.name, %pos, "Human chose position");
                    return Ok(pos);
                }
                Some(pos) => {
                    warn!(%pos, "Square already occupied");
                    println!("{} is taken, pick another square:", pos);
                }
                None => {
                    println!("Enter a square 0-8 or a name like \"center\":");
                }
            }
        }

        anyhow::bail!("Input channel closed")
    }

    fn name(&self) -> &str {
        &self.name
    }
}
