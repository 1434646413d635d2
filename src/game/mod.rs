//! @acp:module "Guessing Game"
//! @acp:summary "Binary search over a number range driven by a yes/no oracle"
//! @acp:domain core
//! @acp:layer service
//!
//! The player thinks of a number; the game halves the candidate range with
//! each pair of questions. An oracle that contradicts itself empties the
//! range, which ends the game as [`GameOutcome::Exhausted`] instead of
//! looping or guessing.

mod oracle;

pub use oracle::{oracle_fn, FnOracle, Oracle, ScriptedOracle, TruthfulOracle};

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::GameConfig;
use crate::error::Result;

/// A yes/no question put to the oracle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    /// "Is your number n?"
    IsIt(i64),
    /// "Is your number greater than n?"
    IsGreaterThan(i64),
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Question::IsIt(n) => write!(f, "Is your number {}?", n),
            Question::IsGreaterThan(n) => write!(f, "Is your number greater than {}?", n),
        }
    }
}

/// @acp:summary "How a game ended"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum GameOutcome {
    /// The oracle confirmed a guess
    Found { number: i64, guesses: u32 },
    /// The range emptied without a confirmation: the answers were inconsistent
    Exhausted { guesses: u32 },
}

impl GameOutcome {
    pub fn number(&self) -> Option<i64> {
        match self {
            GameOutcome::Found { number, .. } => Some(*number),
            GameOutcome::Exhausted { .. } => None,
        }
    }

    pub fn guesses(&self) -> u32 {
        match self {
            GameOutcome::Found { guesses, .. } | GameOutcome::Exhausted { guesses } => *guesses,
        }
    }
}

/// @acp:summary "Binary search state over an inclusive range"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessingGame {
    low: i64,
    high: i64,
}

impl Default for GuessingGame {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl GuessingGame {
    pub fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.low, config.high)
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    /// Guesses needed in the worst case against a truthful oracle
    pub fn worst_case_guesses(&self) -> u32 {
        if self.low > self.high {
            return 0;
        }
        let size = u128::from(self.high.abs_diff(self.low)) + 1;
        u128::BITS - size.leading_zeros()
    }

    /// Play until the oracle confirms a guess or the range is empty
    pub fn play<O: Oracle + ?Sized>(&self, oracle: &mut O) -> Result<GameOutcome> {
        let (mut low, mut high) = (self.low, self.high);
        let mut guesses = 0;

        while low <= high {
            // i128 keeps the sum exact at the ends of the i64 range
            let mid = (i128::from(low) + i128::from(high)).div_euclid(2) as i64;
            guesses += 1;
            debug!(low, high, mid, guesses, "guessing");

            if oracle.answer(&Question::IsIt(mid))? {
                return Ok(GameOutcome::Found {
                    number: mid,
                    guesses,
                });
            }

            let narrowed = if oracle.answer(&Question::IsGreaterThan(mid))? {
                mid.checked_add(1).map(|next| (next, high))
            } else {
                mid.checked_sub(1).map(|next| (low, next))
            };
            // nothing lies beyond i64::MIN or i64::MAX
            match narrowed {
                Some(range) => (low, high) = range,
                None => break,
            }
        }

        warn!(guesses, "range exhausted without a confirmed guess");
        Ok(GameOutcome::Exhausted { guesses })
    }
}

/// Play the default [1, 100] game against `oracle`
pub fn run_guessing_game<O: Oracle + ?Sized>(oracle: &mut O) -> Result<GameOutcome> {
    GuessingGame::default().play(oracle)
}
