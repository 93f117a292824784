//! Turn orchestration, players and betting around `strictly_tictactoe`.
//!
//! # Architecture
//!
//! - **Players**: async [`Player`] trait with AI and human implementations
//! - **Orchestrator**: owns the canonical game and alternates the players
//! - **Bankroll**: places and settles a standing bet per game
//! - **Arena**: multi-game matches built from an [`ArenaConfig`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
mod bankroll;
mod config;
mod orchestrator;
pub mod players;

pub use arena::{Arena, MatchSummary, ai_player, build_player, run_match};
pub use bankroll::{Bankroll, BankrollError, Bet, Settlement};
pub use config::{ArenaConfig, BettingConfig, ConfigError, Controller, SeatConfig};
pub use orchestrator::{GameEnd, GameEvent, Orchestrator};
pub use players::{AiPlayer, HumanPlayer, Player};
