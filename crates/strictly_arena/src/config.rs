//! Arena configuration loaded from TOML.
//!
//! ```toml
//! think_delay_ms = 600
//! seed = 42
//! starting_balance = 1000
//!
//! [player_x]
//! name = "Alice"
//! controller = "human"
//!
//! [player_o]
//! name = "Minimax"
//! controller = "ai"
//! difficulty = "hard"
//!
//! [betting]
//! back = "X"
//! stake = 50
//! ```

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_tictactoe::{Difficulty, Player};
use tracing::{debug, info, instrument};

/// Who drives a seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Controller {
    /// Moves typed on stdin.
    Human,
    /// Moves chosen by the engine.
    #[default]
    Ai,
}

/// One seat (X or O).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Display name.
    name: String,

    /// Human or AI.
    #[serde(default)]
    controller: Controller,

    /// Engine tier when the seat is AI-controlled.
    #[serde(default)]
    difficulty: Difficulty,
}

impl SeatConfig {
    /// Creates an AI seat.
    pub fn ai(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Ai,
            difficulty,
        }
    }

    /// Creates a human seat.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Human,
            difficulty: Difficulty::default(),
        }
    }
}

/// A standing bet placed before every game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BettingConfig {
    /// The mark the bet is on.
    back: Player,
    /// Amount staked per game.
    stake: u64,
}

impl BettingConfig {
    /// Creates a betting config.
    pub fn new(back: Player, stake: u64) -> Self {
        Self { back, stake }
    }
}

/// Configuration for a match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Seat playing X (moves first).
    #[serde(default = "default_player_x")]
    player_x: SeatConfig,

    /// Seat playing O.
    #[serde(default = "default_player_o")]
    player_o: SeatConfig,

    /// Pause before each AI move, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Seed for reproducible AI tie-breaks; OS entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Bankroll at the start of a match.
    #[serde(default = "default_starting_balance")]
    starting_balance: u64,

    /// Standing bet, if any.
    #[serde(default)]
    betting: Option<BettingConfig>,
}

fn default_player_x() -> SeatConfig {
    SeatConfig::ai("Minimax X", Difficulty::Hard)
}

fn default_player_o() -> SeatConfig {
    SeatConfig::ai("Minimax O", Difficulty::Hard)
}

fn default_think_delay_ms() -> u64 {
    600
}

fn default_starting_balance() -> u64 {
    1000
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            player_x: default_player_x(),
            player_o: default_player_o(),
            think_delay_ms: default_think_delay_ms(),
            seed: None,
            starting_balance: default_starting_balance(),
            betting: None,
        }
    }
}

impl ArenaConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            x = %config.player_x.name,
            o = %config.player_o.name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(betting) = &self.betting {
            if betting.stake == 0 {
                return Err(ConfigError::new("Stake must be greater than zero".to_string()));
            }
            if betting.stake > self.starting_balance {
                return Err(ConfigError::new(format!(
                    "Stake {} exceeds starting balance {}",
                    betting.stake, self.starting_balance
                )));
            }
            if self.starting_balance.checked_add(betting.stake).is_none() {
                return Err(ConfigError::new(format!(
                    "Stake {} on starting balance {} would overflow the payout",
                    betting.stake, self.starting_balance
                )));
            }
        }
        Ok(())
    }

    /// Returns the seat for a mark.
    pub fn seat(&self, mark: Player) -> &SeatConfig {
        match mark {
            Player::X => &self.player_x,
            Player::O => &self.player_o,
        }
    }

    /// Think delay as a [`Duration`].
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// Replaces the seat for a mark.
    pub fn with_seat(mut self, mark: Player, seat: SeatConfig) -> Self {
        match mark {
            Player::X => self.player_x = seat,
            Player::O => self.player_o = seat,
        }
        self
    }

    /// Sets the AI difficulty of a seat.
    pub fn with_difficulty(mut self, mark: Player, difficulty: Difficulty) -> Self {
        match mark {
            Player::X => self.player_x.difficulty = difficulty,
            Player::O => self.player_o.difficulty = difficulty,
        }
        self
    }

    /// Sets the think delay.
    pub fn with_think_delay_ms(mut self, think_delay_ms: u64) -> Self {
        self.think_delay_ms = think_delay_ms;
        self
    }

    /// Sets the tie-break seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the standing bet.
    pub fn with_betting(mut self, betting: Option<BettingConfig>) -> Self {
        self.betting = betting;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
