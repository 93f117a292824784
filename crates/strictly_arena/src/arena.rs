//! Multi-game matches with optional betting.

use crate::bankroll::{Bankroll, Settlement};
use crate::config::{ArenaConfig, BettingConfig, Controller, SeatConfig};
use crate::orchestrator::{GameEnd, GameEvent, Orchestrator};
use crate::players::{AiPlayer, HumanPlayer, Player};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strictly_tictactoe::{Mark, MoveEngine, Outcome};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

/// Tally of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
    /// Games reset before they finished.
    pub abandoned: u32,
    /// Bankroll after the last game.
    pub final_balance: u64,
}

impl MatchSummary {
    /// Games played to a result.
    pub fn finished(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, outcome: &Outcome) {
        match outcome.winner() {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }
}

impl std::fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, draws: {}, abandoned: {}, balance: {}",
            self.x_wins, self.o_wins, self.draws, self.abandoned, self.final_balance
        )
    }
}

/// Builds the engine-backed player for an AI seat.
///
/// With a seed, X and O get distinct but reproducible tie-break streams.
pub fn ai_player(
    seat: &SeatConfig,
    mark: Mark,
    seed: Option<u64>,
    think_delay: Duration,
) -> AiPlayer {
    let engine = match seed {
        Some(seed) => MoveEngine::seeded(seed.wrapping_add(seed_offset(mark))),
        None => MoveEngine::from_entropy(),
    };
    AiPlayer::new(seat.name().clone(), *seat.difficulty(), engine, think_delay)
}

fn seed_offset(mark: Mark) -> u64 {
    match mark {
        Mark::X => 0,
        Mark::O => 1,
    }
}

/// Builds the player for a seat.
///
/// Human seats take their moves from `input`; it is an error to seat a
/// human without one.
pub fn build_player(
    config: &ArenaConfig,
    mark: Mark,
    input: Option<mpsc::UnboundedReceiver<String>>,
) -> Result<Box<dyn Player>> {
    let seat = config.seat(mark);
    match seat.controller() {
        Controller::Ai => Ok(Box::new(ai_player(
            seat,
            mark,
            *config.seed(),
            config.think_delay(),
        ))),
        Controller::Human => {
            let input = input.with_context(|| {
                format!("Seat {} ({}) is human but no input is attached", mark, seat.name())
            })?;
            Ok(Box::new(HumanPlayer::new(seat.name().clone(), input)))
        }
    }
}

/// A sequence of games between two seated players, settled against a bankroll.
pub struct Arena {
    orchestrator: Orchestrator,
    bankroll: Bankroll,
    betting: Option<BettingConfig>,
    summary: MatchSummary,
}

impl Arena {
    /// Seats two players under the given config's bankroll and betting.
    pub fn new(
        config: &ArenaConfig,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        let bankroll = Bankroll::new(*config.starting_balance());
        Self {
            orchestrator: Orchestrator::new(player_x, player_o, event_tx),
            bankroll,
            betting: *config.betting(),
            summary: MatchSummary {
                final_balance: bankroll.balance(),
                ..MatchSummary::default()
            },
        }
    }

    /// Current bankroll.
    pub fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }

    /// Running tally.
    pub fn summary(&self) -> &MatchSummary {
        &self.summary
    }

    /// Plays one game, placing and settling the standing bet around it.
    ///
    /// Returns the settlement when a bet was riding on a finished game. If
    /// the game fails, the stake is refunded before the error is returned.
    #[instrument(skip_all, fields(balance = self.bankroll.balance()))]
    pub async fn play_game(
        &mut self,
        reset: &mut watch::Receiver<bool>,
    ) -> Result<(GameEnd, Option<Settlement>)> {
        let bet = match self.betting {
            Some(betting) => match self.bankroll.place(*betting.back(), *betting.stake()) {
                Ok(bet) => Some(bet),
                Err(e) => {
                    warn!(error = %e, "Skipping bet");
                    None
                }
            },
            None => None,
        };

        let end = match self.orchestrator.run(reset).await {
            Ok(end) => end,
            Err(e) => {
                // A game that errored out never settles; its stake comes back.
                if let Some(bet) = bet {
                    self.bankroll.refund(bet);
                }
                self.summary.final_balance = self.bankroll.balance();
                warn!(error = %e, balance = self.bankroll.balance(), "Game failed");
                return Err(e);
            }
        };

        let settlement = match (end, bet) {
            (GameEnd::Finished(outcome), Some(bet)) => Some(self.bankroll.settle(bet, &outcome)),
            (GameEnd::Abandoned, Some(bet)) => {
                self.bankroll.refund(bet);
                None
            }
            (_, None) => None,
        };

        match end {
            GameEnd::Finished(outcome) => self.summary.record(&outcome),
            GameEnd::Abandoned => self.summary.abandoned += 1,
        }
        self.summary.final_balance = self.bankroll.balance();

        debug!(?end, balance = self.bankroll.balance(), "Game recorded");
        Ok((end, settlement))
    }

    /// Ends the match, returning the tally.
    pub fn finish(self) -> MatchSummary {
        self.summary
    }
}

/// Plays `games` AI-vs-AI games from `config`, X always first.
///
/// Events are traced at debug level. Both seats must be AI-controlled.
#[instrument(skip(config), fields(x = %config.player_x().name(), o = %config.player_o().name()))]
pub async fn run_match(config: &ArenaConfig, games: u32) -> Result<MatchSummary> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let logger = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            debug!(?event, "Game event");
        }
    });

    // Kept alive for the whole match so the orchestrator sees no reset.
    let (_reset_tx, mut reset_rx) = watch::channel(false);

    let player_x = build_player(config, Mark::X, None)?;
    let player_o = build_player(config, Mark::O, None)?;
    let mut arena = Arena::new(config, player_x, player_o, event_tx);

    for game in 1..=games {
        let (end, settlement) = arena.play_game(&mut reset_rx).await?;
        info!(game, ?end, settlement = ?settlement, "Game complete");
    }

    let summary = arena.finish();
    logger.await.context("Event logger task failed")?;
    info!(%summary, "Match complete");
    Ok(summary)
}
