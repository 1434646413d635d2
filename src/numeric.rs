//! @acp:module "Numeric Helpers"
//! @acp:summary "Bound validation, integer square root and digit reversal"
//! @acp:domain core
//! @acp:layer utility

use tracing::warn;

use crate::error::{NumtrioError, Result};

/// Check a caller-supplied bound and convert it to the unsigned range used
/// by the enumerators.
///
/// Negative bounds and bounds above `max` are rejected; 0 and 1 pass through
/// and simply produce empty enumerations.
pub fn validate_bound(bound: i64, max: u64) -> Result<u64> {
    if bound < 0 {
        warn!(bound, "rejected negative bound");
        return Err(NumtrioError::NegativeBound { bound });
    }
    let bound = bound as u64;
    if bound > max {
        warn!(bound, max, "rejected oversized bound");
        return Err(NumtrioError::BoundTooLarge {
            bound: bound as i64,
            max,
        });
    }
    Ok(bound)
}

/// floor(sqrt(n)), exact for every `u64`
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut root = (n as f64).sqrt() as u64;
    // f64 rounding can land one off in either direction near perfect squares
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }
    root
}

/// Reverse the base-10 digits of `n` (trailing zeros are dropped: 120 -> 21).
///
/// `None` when the reversal does not fit in a `u64`; such a number cannot
/// be a palindrome, since a palindrome reverses to itself.
pub fn reverse_digits(mut n: u64) -> Option<u64> {
    let mut reversed: u64 = 0;
    while n > 0 {
        let remainder = n % 10;
        reversed = reversed.checked_mul(10)?.checked_add(remainder)?;
        n /= 10;
    }
    Some(reversed)
}
