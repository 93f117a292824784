//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Rules**: outcome evaluation over the eight fixed lines
//! - **AI**: move selection by difficulty, minimax at the top tier
//! - **Typestate**: a game that only accepts moves while in progress
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Difficulty, Player, Position, choose_move, seeded_rng};
//!
//! let board: Board = "XX_ OO_ ___".parse().unwrap();
//! let mut rng = seeded_rng(42);
//! let pos = choose_move(&board, Player::X, Difficulty::Hard, &mut rng);
//! assert_eq!(pos, Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod ai;
mod contracts;
mod phases;
mod position;
pub mod rules;
mod types;
mod typestate;

pub use action::{Move, MoveError};
pub use ai::{Difficulty, MoveEngine, RandomSource, ScoredMove, choose_move, seeded_rng};
pub use contracts::{Contract, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};
pub use phases::Outcome;
pub use position::Position;
pub use rules::{Line, Win, evaluate, is_full};
pub use types::{Board, BoardParseError, Player, Square};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};

/// Alias for clarity when talking about what sits on a square.
pub type Mark = Player;
