//! Matches, betting and config files.

use anyhow::Result;
use std::io::Write;
use std::time::Duration;
use strictly_arena::{
    AiPlayer, Arena, ArenaConfig, BettingConfig, GameEnd, Player, SeatConfig, Settlement,
    run_match,
};
use strictly_tictactoe::{Difficulty, GameInProgress, Mark, MoveEngine, Position};
use tempfile::NamedTempFile;
use tokio::sync::{mpsc, watch};

fn quick_config() -> ArenaConfig {
    ArenaConfig::default().with_think_delay_ms(0).with_seed(Some(11))
}

#[tokio::test]
async fn test_hard_match_all_draws_and_pushes() {
    let config = quick_config().with_betting(Some(BettingConfig::new(Mark::X, 100)));

    let summary = run_match(&config, 3).await.unwrap();
    assert_eq!(summary.draws, 3);
    assert_eq!(summary.x_wins + summary.o_wins, 0);
    assert_eq!(summary.abandoned, 0);
    assert_eq!(summary.final_balance, 1000);
}

#[tokio::test]
async fn test_backing_the_easy_side_never_profits() {
    let config = quick_config()
        .with_seat(Mark::O, SeatConfig::ai("Rookie", Difficulty::Easy))
        .with_betting(Some(BettingConfig::new(Mark::O, 10)));

    let summary = run_match(&config, 4).await.unwrap();
    assert_eq!(summary.o_wins, 0);
    assert_eq!(summary.finished(), 4);
    assert_eq!(
        summary.final_balance,
        1000 - 10 * u64::from(summary.x_wins)
    );
}

#[tokio::test]
async fn test_run_match_rejects_human_seat() {
    let config = quick_config().with_seat(Mark::X, SeatConfig::human("Alice"));
    assert!(run_match(&config, 1).await.is_err());
}

#[tokio::test]
async fn test_match_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
think_delay_ms = 0
seed = 3
starting_balance = 500

[player_x]
name = "Max"
difficulty = "hard"

[player_o]
name = "Min"
difficulty = "medium"

[betting]
back = "X"
stake = 50
"#
    )
    .unwrap();

    let config = ArenaConfig::from_file(file.path()).unwrap();
    assert_eq!(config.player_o().difficulty(), &Difficulty::Medium);
    assert_eq!(config.think_delay(), Duration::ZERO);

    let summary = run_match(&config, 2).await.unwrap();
    assert_eq!(summary.finished(), 2);
    // Hard X cannot lose, so the balance never drops.
    assert_eq!(summary.o_wins, 0);
    assert_eq!(
        summary.final_balance,
        500 + 50 * u64::from(summary.x_wins)
    );
}

#[test]
fn test_missing_config_file() {
    let err = ArenaConfig::from_file("/nonexistent/arena.toml").unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

/// Never answers.
struct Stall;

#[async_trait::async_trait]
impl Player for Stall {
    async fn choose(&mut self, _game: &GameInProgress) -> Result<Position> {
        std::future::pending().await
    }

    fn name(&self) -> &str {
        "Stall"
    }
}

#[tokio::test]
async fn test_abandoned_game_refunds_bet() {
    let config = quick_config().with_betting(Some(BettingConfig::new(Mark::O, 200)));
    let (event_tx, _event_rx) = mpsc::unbounded_channel();
    let (reset_tx, mut reset_rx) = watch::channel(false);

    let o = AiPlayer::new("O-bot", Difficulty::Hard, MoveEngine::seeded(0), Duration::ZERO);
    let mut arena = Arena::new(&config, Box::new(Stall), Box::new(o), event_tx);

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        reset_tx.send(true).unwrap();
    });

    let (end, settlement) = arena.play_game(&mut reset_rx).await.unwrap();
    assert_eq!(end, GameEnd::Abandoned);
    assert!(settlement.is_none());
    assert_eq!(arena.bankroll().balance(), 1000);

    let summary = arena.finish();
    assert_eq!(summary.abandoned, 1);
    assert_eq!(summary.finished(), 0);
}

/// Fails on every turn.
struct Broken;

#[async_trait::async_trait]
impl Player for Broken {
    async fn choose(&mut self, _game: &GameInProgress) -> Result<Position> {
        anyhow::bail!("player disconnected")
    }

    fn name(&self) -> &str {
        "Broken"
    }
}

#[tokio::test]
async fn test_failed_game_refunds_bet() {
    let config = quick_config().with_betting(Some(BettingConfig::new(Mark::X, 100)));
    let (event_tx, _event_rx) = mpsc::unbounded_channel();
    let (_reset_tx, mut reset_rx) = watch::channel(false);

    let mut arena = Arena::new(&config, Box::new(Broken), Box::new(Broken), event_tx);

    assert!(arena.play_game(&mut reset_rx).await.is_err());
    assert_eq!(arena.bankroll().balance(), 1000);
    assert_eq!(arena.summary().final_balance, 1000);
    assert_eq!(arena.summary().finished(), 0);
    assert_eq!(arena.summary().abandoned, 0);
}

#[tokio::test]
async fn test_arena_settles_each_game() {
    let config = quick_config().with_betting(Some(BettingConfig::new(Mark::X, 250)));
    let (event_tx, _event_rx) = mpsc::unbounded_channel();
    let (_reset_tx, mut reset_rx) = watch::channel(false);

    let x = AiPlayer::new("X-bot", Difficulty::Hard, MoveEngine::seeded(1), Duration::ZERO);
    let o = AiPlayer::new("O-bot", Difficulty::Hard, MoveEngine::seeded(2), Duration::ZERO);
    let mut arena = Arena::new(&config, Box::new(x), Box::new(o), event_tx);

    let (end, settlement) = arena.play_game(&mut reset_rx).await.unwrap();
    assert!(matches!(end, GameEnd::Finished(outcome) if outcome.is_draw()));
    assert_eq!(settlement, Some(Settlement::Push { stake: 250 }));
    assert_eq!(arena.summary().final_balance, 1000);
}
