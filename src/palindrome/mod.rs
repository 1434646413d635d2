//! @acp:module "Palindrome Finder"
//! @acp:summary "Mirror numbers up to a bound"
//! @acp:domain core
//! @acp:layer service

use std::fmt;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::numeric::{reverse_digits, validate_bound};

/// @acp:summary "Mirror number method selected by bound size"
///
/// Both methods run the same digit-reversal check; the split only changes
/// the heading shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PalindromeMethod {
    /// "Method 1", used above the threshold
    DigitReversal,
    /// "Method 2", used up to the threshold
    MirrorCheck,
}

impl PalindromeMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PalindromeMethod::DigitReversal => "Mirror Numbers Method 1",
            PalindromeMethod::MirrorCheck => "Mirror Numbers Method 2",
        }
    }
}

impl fmt::Display for PalindromeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PalindromeMethod::DigitReversal => write!(f, "digit-reversal"),
            PalindromeMethod::MirrorCheck => write!(f, "mirror-check"),
        }
    }
}

pub fn choose_method(bound: u64, threshold: u64) -> PalindromeMethod {
    if bound > threshold {
        PalindromeMethod::DigitReversal
    } else {
        PalindromeMethod::MirrorCheck
    }
}

/// True when `n` reads the same forwards and backwards in base 10
pub fn is_palindrome(n: u64) -> bool {
    reverse_digits(n) == Some(n)
}

fn enumerate_with(method: PalindromeMethod, bound: u64) -> Vec<u64> {
    match method {
        PalindromeMethod::DigitReversal | PalindromeMethod::MirrorCheck => {
            (1..=bound).filter(|&k| is_palindrome(k)).collect()
        }
    }
}

/// All palindromic k with 1 <= k <= bound, ascending
pub fn enumerate_palindromes(bound: i64) -> Result<Vec<u64>> {
    Ok(run_palindromes(bound, &Config::default())?.palindromes)
}

/// @acp:summary "Outcome of one mirror number enumeration"
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PalindromeReport {
    pub bound: u64,
    pub method: PalindromeMethod,
    pub palindromes: Vec<u64>,
    pub elapsed_ms: u64,
}

pub fn run_palindromes(bound: i64, config: &Config) -> Result<PalindromeReport> {
    let bound = validate_bound(bound, config.max_bound)?;
    let method = choose_method(bound, config.palindrome_threshold);
    debug!(bound, %method, "enumerating mirror numbers");

    let timer = Instant::now();
    let palindromes = enumerate_with(method, bound);
    let elapsed_ms = timer.elapsed().as_millis() as u64;

    Ok(PalindromeReport {
        bound,
        method,
        palindromes,
        elapsed_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_digits_are_palindromes() {
        assert!((1..=9).all(is_palindrome));
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome(11));
        assert!(is_palindrome(12321));
        assert!(!is_palindrome(10));
        assert!(!is_palindrome(123));
    }

    #[test]
    fn test_u64_max_is_not_a_palindrome() {
        assert!(!is_palindrome(u64::MAX));
        assert!(!is_palindrome(u64::MAX - 5));
    }

    #[test]
    fn test_choose_method_threshold() {
        assert_eq!(choose_method(100_000, 100_000), PalindromeMethod::MirrorCheck);
        assert_eq!(choose_method(100_001, 100_000), PalindromeMethod::DigitReversal);
    }

    #[test]
    fn test_methods_agree() {
        assert_eq!(
            enumerate_with(PalindromeMethod::DigitReversal, 5000),
            enumerate_with(PalindromeMethod::MirrorCheck, 5000)
        );
    }

    #[test]
    fn test_enumerate_palindromes_up_to_twenty() {
        assert_eq!(
            enumerate_palindromes(20).unwrap(),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 11]
        );
    }

    #[test]
    fn test_enumerate_palindromes_empty_below_one() {
        assert!(enumerate_palindromes(0).unwrap().is_empty());
        assert!(enumerate_palindromes(-1).unwrap_err().is_invalid_bound());
    }

    #[test]
    fn test_run_palindromes_large_bound_uses_method_one() {
        let report = run_palindromes(100_001, &Config::default()).unwrap();
        assert_eq!(report.method, PalindromeMethod::DigitReversal);
        assert_eq!(report.palindromes.last(), Some(&100_001));
        // 9 + 9 + 90 + 90 + 900, then 100001 itself
        assert_eq!(report.palindromes.len(), 1099);
    }
}
