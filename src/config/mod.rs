//! @acp:module "Configuration"
//! @acp:summary "Thresholds and limits loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{NumtrioError, Result};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".numtrio.config.json";

fn default_prime_threshold() -> u64 {
    1000
}

fn default_palindrome_threshold() -> u64 {
    100_000
}

fn default_max_bound() -> u64 {
    10_000_000
}

/// @acp:summary "Main numtrio configuration structure"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Largest bound still enumerated by trial division; also the witness seed limit
    #[serde(default = "default_prime_threshold")]
    pub prime_threshold: u64,

    /// Bounds above this use digit-reversal method 1, others method 2
    #[serde(default = "default_palindrome_threshold")]
    pub palindrome_threshold: u64,

    /// Bounds above this are rejected instead of enumerated
    #[serde(default = "default_max_bound")]
    pub max_bound: u64,

    /// Guessing game range
    #[serde(default)]
    pub game: GameConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prime_threshold: default_prime_threshold(),
            palindrome_threshold: default_palindrome_threshold(),
            max_bound: default_max_bound(),
            game: GameConfig::default(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load config if the file exists, defaults otherwise"
    ///
    /// A file that exists but does not parse or validate is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject settings the algorithms cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.prime_threshold < 2 {
            return Err(NumtrioError::InvalidConfig(format!(
                "primeThreshold must be at least 2, got {}",
                self.prime_threshold
            )));
        }
        if self.max_bound > i64::MAX as u64 {
            return Err(NumtrioError::InvalidConfig(format!(
                "maxBound {} does not fit a signed 64-bit bound",
                self.max_bound
            )));
        }
        if self.game.low > self.game.high {
            return Err(NumtrioError::InvalidConfig(format!(
                "game range is empty: low {} > high {}",
                self.game.low, self.game.high
            )));
        }
        Ok(())
    }
}

fn default_game_low() -> i64 {
    1
}

fn default_game_high() -> i64 {
    100
}

/// @acp:summary "Guessing game search range"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Smallest number the player may think of
    #[serde(default = "default_game_low")]
    pub low: i64,

    /// Largest number the player may think of
    #[serde(default = "default_game_high")]
    pub high: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            low: default_game_low(),
            high: default_game_high(),
        }
    }
}
