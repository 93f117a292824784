//! Outcome of a finished game.

use super::{Line, Player};
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
///
/// Always derived from the board by [`crate::rules::outcome`], never stored
/// on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// Board filled with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Winner { line, .. } => Some(*line),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { player, line } => write!(f, "Player {} wins ({})", player, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
