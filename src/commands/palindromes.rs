//! @acp:module "Palindromes Command"
//! @acp:summary "List mirror numbers up to a bound"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;

use super::output::print_numbers;
use crate::config::Config;
use crate::palindrome::run_palindromes;

/// Options for the palindromes command
#[derive(Debug, Clone)]
pub struct PalindromesOptions {
    /// Inclusive upper bound
    pub bound: i64,
    /// Output as JSON
    pub json: bool,
}

/// Execute the palindromes command
pub fn execute_palindromes(options: PalindromesOptions, config: &Config) -> Result<()> {
    let report = run_palindromes(options.bound, config)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_numbers(report.method.label(), &report.palindromes);
    }
    Ok(())
}
