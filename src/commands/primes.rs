//! @acp:module "Primes Command"
//! @acp:summary "List prime numbers up to a bound"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use super::output::print_numbers;
use crate::config::Config;
use crate::primes::{run_primes, PrimeAlgorithm};

/// Options for the primes command
#[derive(Debug, Clone)]
pub struct PrimesOptions {
    /// Inclusive upper bound
    pub bound: i64,
    /// Force a variant instead of choosing by threshold
    pub algorithm: Option<PrimeAlgorithm>,
    /// Output as JSON
    pub json: bool,
}

/// Execute the primes command
pub fn execute_primes(options: PrimesOptions, config: &Config) -> Result<()> {
    let report = run_primes(options.bound, config, options.algorithm)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_numbers(report.algorithm.label(), &report.primes);
    println!(
        "{} Execution time: {}ms",
        style("✓").green(),
        report.elapsed_ms
    );
    Ok(())
}
