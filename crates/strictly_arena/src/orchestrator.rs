//! Game orchestration between players.

use crate::players::Player;
use anyhow::{Context, Result};
use strictly_tictactoe::{Board, GameInProgress, GameResult, GameSetup, Mark, Outcome, Position};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A player has been asked for a move.
    Thinking {
        /// Name of the player.
        player: String,
        /// Mark being played.
        mark: Mark,
    },
    /// Move was applied to the board.
    MoveMade {
        /// Name of the player.
        player: String,
        /// Mark placed.
        mark: Mark,
        /// Square played.
        position: Position,
        /// Board after the move.
        board: Board,
    },
    /// Game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Winner's name, `None` on a draw.
        winner: Option<String>,
    },
}

/// How a call to [`Orchestrator::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// Played to a win or draw.
    Finished(Outcome),
    /// Reset while a move was pending; nothing was applied for it.
    Abandoned,
}

/// Orchestrates gameplay between two players.
///
/// The orchestrator owns the canonical game. Players only see it by
/// reference and return a position, which is applied here through the
/// typestate contracts.
pub struct Orchestrator {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Name of the player seated at `mark`.
    pub fn player_name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.player_x.name(),
            Mark::O => self.player_o.name(),
        }
    }

    /// Plays one game from an empty board, X first.
    ///
    /// Any change on `reset` while a move is pending abandons the game.
    /// A dropped reset sender is not a reset.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn run(&mut self, reset: &mut watch::Receiver<bool>) -> Result<GameEnd> {
        info!("Starting game orchestration");
        reset.borrow_and_update();

        let mut game: GameInProgress = GameSetup::new().start(Mark::X);

        loop {
            let mark = game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let player_name = player.name().to_string();

            if player.is_ai() {
                self.event_tx.send(GameEvent::Thinking {
                    player: player_name.clone(),
                    mark,
                })?;
            }

            debug!(player = %player_name, %mark, "Waiting for move");
            let position = tokio::select! {
                biased;
                Ok(()) = reset.changed() => {
                    info!(player = %player_name, "Reset while move pending, abandoning game");
                    return Ok(GameEnd::Abandoned);
                }
                chosen = player.choose(&game) => {
                    chosen.with_context(|| format!("{} failed to choose a move", player_name))?
                }
            };

            match game.play(position)? {
                GameResult::InProgress(next) => {
                    self.event_tx.send(GameEvent::MoveMade {
                        player: player_name,
                        mark,
                        position,
                        board: *next.board(),
                    })?;
                    game = next;
                }
                GameResult::Finished(finished) => {
                    self.event_tx.send(GameEvent::MoveMade {
                        player: player_name,
                        mark,
                        position,
                        board: *finished.board(),
                    })?;

                    let outcome = *finished.outcome();
                    let winner = outcome.winner().map(|m| self.player_name(m).to_string());
                    info!(%outcome, "Game over");
                    self.event_tx.send(GameEvent::GameOver { outcome, winner })?;
                    return Ok(GameEnd::Finished(outcome));
                }
            }
        }
    }
}
