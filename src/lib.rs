#![forbid(unsafe_code)]

//! @acp:module "numtrio Library"
//! @acp:summary "Prime numbers, mirror numbers and a binary-search guessing game"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # numtrio
//!
//! Three small numeric programs behind one console menu.
//!
//! ## Features
//!
//! - **Primes**: trial division for small bounds, a witness list of known
//!   primes for large ones; both variants return the same sequence
//! - **Mirror numbers**: base-10 palindromes by digit reversal
//! - **Guessing game**: binary search over [1, 100] against any [`Oracle`]
//!
//! ## Example
//!
//! ```rust
//! use numtrio::{enumerate_palindromes, enumerate_primes, run_guessing_game, TruthfulOracle};
//!
//! fn main() -> numtrio::Result<()> {
//!     assert_eq!(enumerate_primes(10)?, vec![2, 3, 5, 7]);
//!     assert_eq!(enumerate_palindromes(12)?.last(), Some(&11));
//!
//!     let outcome = run_guessing_game(&mut TruthfulOracle::new(42))?;
//!     assert_eq!(outcome.number(), Some(42));
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod game;
pub mod numeric;
pub mod palindrome;
pub mod primes;

// Re-exports
pub use config::{Config, GameConfig};
pub use error::{NumtrioError, Result};
pub use game::{
    oracle_fn, run_guessing_game, GameOutcome, GuessingGame, Oracle, Question, ScriptedOracle,
    TruthfulOracle,
};
pub use numeric::{isqrt, reverse_digits, validate_bound};
pub use palindrome::{
    choose_method, enumerate_palindromes, is_palindrome, run_palindromes, PalindromeMethod,
    PalindromeReport,
};
pub use primes::{
    choose_algorithm, enumerate_primes, run_primes, trial_division, witness_list,
    AlgorithmChoice, PrimeAlgorithm, PrimeReport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
