//! Sieve of Eratosthenes over a bit array.
//!
//! One bit per candidate number: a set bit at position `p` means `p` has not
//! been struck out. Every bit starts set, 0 and 1 are cleared, and the
//! multiples of each `i` with `i * i <= n` are cleared from `i * i` onwards.

use anyhow::{Context, Result};
use bitarray_core::BitArray;

/// Runs the sieve for all numbers in `[0, n]`.
///
/// # Arguments
///
/// * `n` - Inclusive upper limit of the search
///
/// # Returns
///
/// A bit array of size `n + 1` whose set positions are exactly the primes
/// up to `n`.
pub fn sieve(n: usize) -> Result<BitArray> {
    let size = n
        .checked_add(1)
        .with_context(|| format!("limit {} is too large to sieve", n))?;
    let mut candidates = BitArray::new(size)?;
    candidates.set_all();
    candidates.clear_range(0..size.min(2))?;

    let mut i = 2;
    while i <= n / i {
        for multiple in (i * i..=n).step_by(i) {
            candidates.clear(multiple)?;
        }
        i += 1;
    }

    Ok(candidates)
}

/// Counts the primes in `[0, n]`.
pub fn count_primes(n: usize) -> Result<usize> {
    Ok(sieve(n)?.cardinality())
}
