//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod guess;
pub mod menu;
pub mod output;
pub mod palindromes;
pub mod primes;

pub use guess::{answer_from_key, execute_guess, GuessOptions, PromptOracle};
pub use menu::{execute_menu, HomeAction, MenuChoice};
pub use output::{terminal_width, wrap_numbers};
pub use palindromes::{execute_palindromes, PalindromesOptions};
pub use primes::{execute_primes, PrimesOptions};
