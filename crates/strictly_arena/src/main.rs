//! Strictly Arena - CLI
//!
//! Human-vs-AI play, AI-vs-AI autoplay with betting, and one-shot hints.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use std::io::BufRead;
use std::path::PathBuf;
use strictly_arena::{
    Arena, ArenaConfig, BettingConfig, GameEnd, GameEvent, MatchSummary, SeatConfig, build_player,
    run_match,
};
use strictly_tictactoe::{
    Board, Difficulty, Mark, Position, ScoredMove, ai::score_moves, choose_move, seeded_rng,
};
use tokio::sync::{mpsc, watch};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            difficulty,
            human,
            stake,
            games,
        } => run_play(config, difficulty, human, stake, games).await,
        Command::Autoplay {
            config,
            games,
            x,
            o,
            seed,
            delay_ms,
            back,
            stake,
        } => {
            let mut config = load_config(config)?;
            if let Some(d) = x {
                config = config.with_difficulty(Mark::X, d);
            }
            if let Some(d) = o {
                config = config.with_difficulty(Mark::O, d);
            }
            if seed.is_some() {
                config = config.with_seed(seed);
            }
            if let Some(ms) = delay_ms {
                config = config.with_think_delay_ms(ms);
            }
            if let (Some(back), Some(stake)) = (back, stake) {
                config = config.with_betting(Some(BettingConfig::new(back, stake)));
            }
            config.validate()?;

            let summary = run_match(&config, games).await?;
            print_summary(&summary);
            Ok(())
        }
        Command::Hint {
            board,
            player,
            difficulty,
            seed,
            json,
        } => run_hint(board, player, difficulty, seed, json),
    }
}

/// Loads the config file if given, defaults otherwise.
fn load_config(path: Option<PathBuf>) -> Result<ArenaConfig> {
    match path {
        Some(path) => Ok(ArenaConfig::from_file(&path)?),
        None => Ok(ArenaConfig::default()),
    }
}

/// Human vs AI in the terminal.
#[instrument(skip(config_path))]
async fn run_play(
    config_path: Option<PathBuf>,
    difficulty: Option<Difficulty>,
    human: Mark,
    stake: Option<u64>,
    games: u32,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    let ai = human.opponent();

    if config.seat(human).controller() != &strictly_arena::Controller::Human {
        config = config.with_seat(human, SeatConfig::human("You"));
    }
    if let Some(d) = difficulty {
        config = config.with_difficulty(ai, d);
    }
    if let Some(stake) = stake {
        config = config.with_betting(Some(BettingConfig::new(human, stake)));
    }
    config.validate()?;

    // Stdin lines feed the human seat from a plain thread, off the runtime.
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(line).is_err() {
                break;
            }
        }
    });

    let (player_x, player_o) = match human {
        Mark::X => (
            build_player(&config, Mark::X, Some(input_rx))?,
            build_player(&config, Mark::O, None)?,
        ),
        Mark::O => (
            build_player(&config, Mark::X, None)?,
            build_player(&config, Mark::O, Some(input_rx))?,
        ),
    };

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            match event {
                GameEvent::Thinking { player, mark } => {
                    println!("{} ({}) is thinking...", player, mark)
                }
                GameEvent::MoveMade {
                    player,
                    position,
                    board,
                    ..
                } => println!("\n{} played {}\n{}", player, position, board.display()),
                GameEvent::GameOver { outcome, winner } => match winner {
                    Some(name) => println!("\n{} - {} wins!", outcome, name),
                    None => println!("\n{}", outcome),
                },
            }
        }
    });

    // Ctrl-C abandons the game in progress.
    let (reset_tx, mut reset_rx) = watch::channel(false);
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if reset_tx.send(true).is_err() {
                break;
            }
        }
    });

    let mut arena = Arena::new(&config, player_x, player_o, event_tx);
    info!(%human, games, "Starting play session");

    for game in 1..=games {
        println!("\n=== Game {} of {} ===", game, games);
        let (end, settlement) = arena.play_game(&mut reset_rx).await?;
        if let Some(settlement) = settlement {
            println!("Bet {} - balance {}", settlement, arena.bankroll().balance());
        }
        if end == GameEnd::Abandoned {
            warn!("Game abandoned");
            break;
        }
    }

    let summary = arena.finish();
    printer.await.context("Event printer task failed")?;
    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &MatchSummary) {
    println!("\n{}", summary);
}

/// Engine answer for `hint`.
#[derive(Debug, Serialize)]
struct HintReport {
    board: String,
    player: Mark,
    difficulty: Difficulty,
    position: Option<Position>,
    index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scores: Option<Vec<ScoredMove>>,
}

fn run_hint(
    board: Board,
    player: Mark,
    difficulty: Difficulty,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut rng = seeded_rng(seed.unwrap_or_default());
    let position = choose_move(&board, player, difficulty, &mut rng);
    let scores = (difficulty == Difficulty::Hard).then(|| score_moves(&board, player));

    let report = HintReport {
        board: board.to_string(),
        player,
        difficulty,
        position,
        index: position.map(Position::to_index),
        scores,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", board.display());
    match report.position {
        Some(pos) => println!(
            "{} ({}) should play {} ({})",
            player,
            difficulty,
            pos,
            pos.to_index()
        ),
        None => println!("No moves left"),
    }
    if let Some(scores) = &report.scores {
        for scored in scores {
            println!("  {:>13}  {:>3}", scored.position.label(), scored.score);
        }
    }
    Ok(())
}
