//! Prime generation with the Sieve of Eratosthenes.
//!
//! The sieve keeps one flag per candidate in `0..=limit` and crosses out the
//! multiples of every prime `i` with `i * i <= limit`, starting at `i * i`.
//! Time is O(n log log n), space O(n).

use crate::domain::model::PrimeSequence;
use crate::utils::error::{PlotError, Result};

/// Returns every prime `p` with `2 <= p <= limit`, ascending.
///
/// Limits of 0 and 1 yield an empty sequence. A negative limit, or one whose
/// flag table cannot be allocated, is rejected with
/// [`PlotError::InvalidArgument`].
pub fn generate_primes(limit: i64) -> Result<PrimeSequence> {
    if limit < 0 {
        return Err(PlotError::invalid_argument(
            "limit",
            limit,
            "limit must be non-negative",
        ));
    }

    let n = usize::try_from(limit).map_err(|_| {
        PlotError::invalid_argument("limit", limit, "limit exceeds addressable memory")
    })?;

    let flags = sieve(n).ok_or_else(|| {
        PlotError::invalid_argument("limit", limit, "limit exceeds addressable memory")
    })?;
    let primes: PrimeSequence = flags
        .iter()
        .enumerate()
        .filter(|(_, &is_prime)| is_prime)
        .map(|(value, _)| value as u64)
        .collect();

    tracing::debug!(limit, count = primes.len(), "sieve complete");
    Ok(primes)
}

/// Primality flags for `0..=n`, or `None` when the table cannot be allocated.
fn sieve(n: usize) -> Option<Vec<bool>> {
    // Only overflows on targets where `usize` is narrower than `i64`.
    let len = n.checked_add(1)?;

    let mut is_prime = Vec::new();
    is_prime.try_reserve_exact(len).ok()?;
    is_prime.resize(len, true);
    is_prime[0] = false;
    if n >= 1 {
        is_prime[1] = false;
    }

    // `i <= n / i` is `i * i <= n` without overflow or float rounding.
    let mut i = 2;
    while i <= n / i {
        if is_prime[i] {
            for multiple in (i * i..=n).step_by(i) {
                is_prime[multiple] = false;
            }
        }
        i += 1;
    }

    Some(is_prime)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_prime_by_trial_division(n: u64) -> bool {
        n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn test_small_limits() {
        assert!(generate_primes(0).unwrap().is_empty());
        assert!(generate_primes(1).unwrap().is_empty());
        assert_eq!(generate_primes(2).unwrap(), vec![2]);
        assert_eq!(generate_primes(3).unwrap(), vec![2, 3]);
        assert_eq!(generate_primes(10).unwrap(), vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_default_limits() {
        let primes = generate_primes(110).unwrap();
        assert_eq!(primes.len(), 29);
        assert_eq!(primes.last(), Some(&109));

        let primes = generate_primes(150).unwrap();
        assert_eq!(primes.len(), 35);
        assert_eq!(primes.last(), Some(&149));
    }

    #[test]
    fn test_perfect_squares_are_crossed_out() {
        // Limits sitting exactly on a square of a prime.
        for (limit, square) in [(4, 4), (9, 9), (25, 25), (49, 49), (121, 121), (169, 169)] {
            let primes = generate_primes(limit).unwrap();
            assert!(!primes.contains(&square), "{} reported prime", square);
        }
    }

    #[test]
    fn test_prime_limit_is_inclusive() {
        assert_eq!(generate_primes(109).unwrap().last(), Some(&109));
        assert_eq!(generate_primes(108).unwrap().last(), Some(&107));
    }

    #[test]
    fn test_negative_limit_is_rejected() {
        let err = generate_primes(-1).unwrap_err();
        assert!(matches!(err, PlotError::InvalidArgument { ref name, .. } if name == "limit"));
        assert!(generate_primes(i64::MIN).is_err());
    }

    #[test]
    fn test_unallocatable_limit_is_rejected() {
        let err = generate_primes(i64::MAX).unwrap_err();
        assert!(matches!(
            err,
            PlotError::InvalidArgument { ref reason, .. } if reason.contains("addressable memory")
        ));
    }

    #[test]
    fn test_matches_trial_division() {
        let limit = 1_000;
        let primes = generate_primes(limit).unwrap();
        let expected: Vec<u64> = (0..=limit as u64)
            .filter(|&n| is_prime_by_trial_division(n))
            .collect();
        assert_eq!(primes, expected);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        assert_eq!(generate_primes(500).unwrap(), generate_primes(500).unwrap());
    }
}
