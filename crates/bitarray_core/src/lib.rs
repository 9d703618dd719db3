//! Fixed-size, bit-packed boolean arrays.
//!
//! This crate provides a compact container that stores one bit per logical
//! boolean element in a byte-oriented backing store, together with the
//! per-unit helpers it is built on. The container is sized once at
//! construction and never grows or shrinks. The crate is `no_std` and only
//! needs `alloc` for the backing store.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use core::fmt;

/// The bit array container.
///
/// Owns a boxed slice of 8-bit storage units and exposes per-bit, ranged,
/// and whole-array get/set/clear/flip operations plus cardinality and
/// emptiness queries. Every positional operation is bounds checked against
/// the logical size and reports violations as [`BitArrayError`] values.
pub mod bit_array;

/// Bit manipulation utilities for packed byte storage.
///
/// Maps logical positions onto a storage unit and an intra-unit offset and
/// applies the OR/AND/XOR masks. Shared by the container and its iterators.
pub mod bit_utils;

/// Iterators over a bit array.
///
/// [`iter::Iter`] walks every logical position and yields its value, while
/// [`iter::Ones`] skips whole zero units and yields only the positions of set
/// bits. Both borrow the array, so it cannot change underneath them.
pub mod iter;

pub use bit_array::BitArray;

/// Result alias used by every fallible bit array operation.
pub type Result<T> = core::result::Result<T, BitArrayError>;

/// Error types returned by bit array operations.
///
/// All of them describe caller mistakes. They are raised at the point of
/// violation and nothing is retried or repaired internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitArrayError {
    /// The array was constructed with a size of zero.
    ///
    /// A bit array must hold at least one logical bit.
    InvalidSize,

    /// A positional operation addressed a bit outside `[0, size)`.
    ///
    /// Ranged operations report the first position of the sweep that falls
    /// outside the array. Positions before it have already been applied.
    IndexOutOfRange { index: usize, size: usize },

    /// A ranged operation was given a start greater than its end.
    InvalidRange { from: usize, to: usize },
}

impl fmt::Display for BitArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitArrayError::InvalidSize => f.write_str("bit array size must be greater than 0"),
            BitArrayError::IndexOutOfRange { index, size } => {
                write!(f, "index {} out of range for bit array of size {}", index, size)
            }
            BitArrayError::InvalidRange { from, to } => {
                write!(f, "range start {} is greater than range end {}", from, to)
            }
        }
    }
}

impl core::error::Error for BitArrayError {}
