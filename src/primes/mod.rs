//! @acp:module "Prime Enumerator"
//! @acp:summary "Primes up to a bound via trial division or a witness list"
//! @acp:domain core
//! @acp:layer service
//!
//! Two interchangeable algorithms that return identical sequences:
//!
//! - **Trial division** tests every candidate against every divisor up to
//!   its square root.
//! - **Witness list** seeds a prime list by trial division up to a seed
//!   limit, then tests larger candidates only against known primes no
//!   greater than their square root.
//!
//! [`choose_algorithm`] maps a bound to a variant using the configured
//! threshold so each variant can also be driven directly.

use std::fmt;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::numeric::{isqrt, validate_bound};

/// @acp:summary "Prime enumeration algorithm variant"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimeAlgorithm {
    /// Divide by every integer up to sqrt(i)
    TrialDivision,
    /// Divide only by already discovered primes up to sqrt(i)
    WitnessList,
}

impl PrimeAlgorithm {
    /// Heading shown before the numbers
    pub fn label(&self) -> &'static str {
        match self {
            PrimeAlgorithm::TrialDivision => "Simple Prime Method",
            PrimeAlgorithm::WitnessList => "Optimized Prime Method",
        }
    }
}

impl fmt::Display for PrimeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimeAlgorithm::TrialDivision => write!(f, "trial-division"),
            PrimeAlgorithm::WitnessList => write!(f, "witness-list"),
        }
    }
}

impl std::str::FromStr for PrimeAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trial-division" | "naive" | "simple" => Ok(PrimeAlgorithm::TrialDivision),
            "witness-list" | "optimized" => Ok(PrimeAlgorithm::WitnessList),
            _ => Err(format!("Unknown prime algorithm: {}", s)),
        }
    }
}

/// Algorithm requested on the command line: a fixed variant or threshold-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlgorithmChoice {
    #[default]
    Auto,
    Fixed(PrimeAlgorithm),
}

impl AlgorithmChoice {
    /// The forced variant, or `None` to choose by threshold
    pub fn forced(self) -> Option<PrimeAlgorithm> {
        match self {
            AlgorithmChoice::Auto => None,
            AlgorithmChoice::Fixed(algorithm) => Some(algorithm),
        }
    }
}

impl std::str::FromStr for AlgorithmChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            Ok(AlgorithmChoice::Auto)
        } else {
            s.parse().map(AlgorithmChoice::Fixed)
        }
    }
}

/// Bounds up to `threshold` use trial division, larger ones the witness list
pub fn choose_algorithm(bound: u64, threshold: u64) -> PrimeAlgorithm {
    if bound <= threshold {
        PrimeAlgorithm::TrialDivision
    } else {
        PrimeAlgorithm::WitnessList
    }
}

/// Trial-division primality check
fn is_prime_by_trial(candidate: u64) -> bool {
    if candidate < 2 {
        return false;
    }
    let limit = isqrt(candidate);
    (2..=limit).all(|divisor| candidate % divisor != 0)
}

/// All primes in [2, bound] by plain trial division
pub fn trial_division(bound: u64) -> Vec<u64> {
    (2..=bound).filter(|&i| is_prime_by_trial(i)).collect()
}

/// All primes in [2, bound], seeding the witness list by trial division up
/// to `seed_limit`.
///
/// Every prime found past the seed is appended to the list, so candidates
/// beyond `seed_limit²` still see every witness they need.
pub fn witness_list(bound: u64, seed_limit: u64) -> Vec<u64> {
    let mut primes = trial_division(bound.min(seed_limit));

    let start = seed_limit.saturating_add(1).max(2);
    for candidate in start..=bound {
        let limit = isqrt(candidate);
        let composite = primes
            .iter()
            .take_while(|&&witness| witness <= limit)
            .any(|&witness| candidate % witness == 0);
        if !composite {
            primes.push(candidate);
        }
    }

    primes
}

/// Run a specific variant with the seed limit taken from `config`
pub fn enumerate_with(algorithm: PrimeAlgorithm, bound: u64, config: &Config) -> Vec<u64> {
    match algorithm {
        PrimeAlgorithm::TrialDivision => trial_division(bound),
        PrimeAlgorithm::WitnessList => witness_list(bound, config.prime_threshold),
    }
}

/// All primes p with 2 <= p <= bound, ascending, using default settings.
///
/// Bounds below 2 give an empty list; negative or oversized bounds are
/// rejected.
pub fn enumerate_primes(bound: i64) -> Result<Vec<u64>> {
    Ok(run_primes(bound, &Config::default(), None)?.primes)
}

/// @acp:summary "Outcome of one prime enumeration"
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimeReport {
    pub bound: u64,
    pub algorithm: PrimeAlgorithm,
    pub primes: Vec<u64>,
    pub elapsed_ms: u64,
}

/// Validate, select (unless `forced`), enumerate and time
pub fn run_primes(
    bound: i64,
    config: &Config,
    forced: Option<PrimeAlgorithm>,
) -> Result<PrimeReport> {
    let bound = validate_bound(bound, config.max_bound)?;
    let algorithm = forced.unwrap_or_else(|| choose_algorithm(bound, config.prime_threshold));
    debug!(bound, %algorithm, "enumerating primes");

    let timer = Instant::now();
    let primes = enumerate_with(algorithm, bound, config);
    let elapsed_ms = timer.elapsed().as_millis() as u64;

    debug!(count = primes.len(), elapsed_ms, "prime enumeration finished");
    Ok(PrimeReport {
        bound,
        algorithm,
        primes,
        elapsed_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_choose_algorithm_threshold() {
        assert_eq!(choose_algorithm(0, 1000), PrimeAlgorithm::TrialDivision);
        assert_eq!(choose_algorithm(1000, 1000), PrimeAlgorithm::TrialDivision);
        assert_eq!(choose_algorithm(1001, 1000), PrimeAlgorithm::WitnessList);
    }

    #[test]
    fn test_trial_division_small() {
        assert_eq!(trial_division(10), vec![2, 3, 5, 7]);
        assert_eq!(trial_division(2), vec![2]);
        assert!(trial_division(1).is_empty());
        assert!(trial_division(0).is_empty());
    }

    #[test]
    fn test_witness_list_includes_seed_primes() {
        let primes = witness_list(1013, 1000);
        assert_eq!(primes.first(), Some(&2));
        assert_eq!(&primes[primes.len() - 3..], &[997, 1009, 1013]);
    }

    #[test]
    fn test_witness_list_past_seed_square() {
        // seed 10 only knows 2, 3, 5, 7; 121 and 169 need 11 and 13
        assert_eq!(witness_list(200, 10), trial_division(200));
    }

    #[test]
    fn test_variants_agree_across_threshold() {
        for bound in [0, 1, 2, 3, 999, 1000, 1001, 1009, 5000] {
            assert_eq!(
                trial_division(bound),
                witness_list(bound, 1000),
                "bound {}",
                bound
            );
        }
    }

    #[test]
    fn test_prime_count_below_ten_thousand() {
        assert_eq!(witness_list(10_000, 1000).len(), 1229);
    }

    #[test]
    fn test_run_primes_picks_variant() {
        let config = Config::default();
        let small = run_primes(100, &config, None).unwrap();
        assert_eq!(small.algorithm, PrimeAlgorithm::TrialDivision);
        assert_eq!(small.primes.len(), 25);

        let large = run_primes(2000, &config, None).unwrap();
        assert_eq!(large.algorithm, PrimeAlgorithm::WitnessList);
        assert_eq!(large.primes.len(), 303);
    }

    #[test]
    fn test_run_primes_forced_variant() {
        let report = run_primes(50, &Config::default(), Some(PrimeAlgorithm::WitnessList)).unwrap();
        assert_eq!(report.algorithm, PrimeAlgorithm::WitnessList);
        assert_eq!(report.primes, trial_division(50));
    }

    #[test]
    fn test_parse_algorithm_names() {
        assert_eq!("naive".parse::<PrimeAlgorithm>(), Ok(PrimeAlgorithm::TrialDivision));
        assert_eq!("Witness-List".parse::<PrimeAlgorithm>(), Ok(PrimeAlgorithm::WitnessList));
        assert!("sieve".parse::<PrimeAlgorithm>().is_err());
    }

    #[test]
    fn test_parse_algorithm_choice() {
        assert_eq!("auto".parse::<AlgorithmChoice>(), Ok(AlgorithmChoice::Auto));
        assert_eq!("AUTO".parse::<AlgorithmChoice>().unwrap().forced(), None);
        assert_eq!(
            "witness-list".parse::<AlgorithmChoice>().unwrap().forced(),
            Some(PrimeAlgorithm::WitnessList)
        );
        assert!("sieve".parse::<AlgorithmChoice>().is_err());
    }

    #[test]
    fn test_auto_choice_selects_by_threshold() {
        let config = Config::default();
        let report = run_primes(1500, &config, AlgorithmChoice::Auto.forced()).unwrap();
        assert_eq!(report.algorithm, PrimeAlgorithm::WitnessList);
    }
}
