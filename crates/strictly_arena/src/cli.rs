//! Command-line interface for strictly_arena.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{Board, Difficulty, Mark};

/// Strictly Arena - tic-tac-toe against a minimax engine
#[derive(Parser, Debug)]
#[command(name = "strictly_arena")]
#[command(about = "Play tic-tac-toe against tiered AI opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the AI in the terminal
    Play {
        /// Path to arena config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// AI difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Which mark the human plays (X moves first)
        #[arg(long, default_value = "x")]
        human: Mark,

        /// Stake to bet on the human each game
        #[arg(long)]
        stake: Option<u64>,

        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,
    },

    /// Watch two AIs play each other
    Autoplay {
        /// Path to arena config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of games to play
        #[arg(short, long, default_value = "10")]
        games: u32,

        /// Difficulty for X
        #[arg(long)]
        x: Option<Difficulty>,

        /// Difficulty for O
        #[arg(long)]
        o: Option<Difficulty>,

        /// Seed for reproducible tie-breaks
        #[arg(long)]
        seed: Option<u64>,

        /// Think delay per AI move in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Mark to bet on each game
        #[arg(long)]
        back: Option<Mark>,

        /// Stake per game (requires --back)
        #[arg(long, requires = "back")]
        stake: Option<u64>,
    },

    /// Ask the engine for a move on a given board
    Hint {
        /// Board notation, e.g. "XX_ OO_ ___"
        #[arg(short, long)]
        board: Board,

        /// Player to move
        #[arg(short, long)]
        player: Mark,

        /// Engine difficulty
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Seed for the tie-break
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
