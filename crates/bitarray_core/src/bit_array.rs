//! Fixed-size boolean array packed one bit per element.
//!
//! Bits are stored in a boxed slice of `u8` units. The final unit may carry
//! padding bits beyond the logical size; positional operations never reach
//! them, while the whole-array operations (`set_all`, `clear_all`,
//! `flip_all`) rewrite entire units and therefore touch them too. Every
//! query that summarises the array masks the padding out.

use alloc::boxed::Box;
use alloc::vec;
use core::fmt;
use core::ops::Range;

use crate::bit_utils::BitPack;
use crate::iter::{Iter, Ones};
use crate::{BitArrayError, Result};

/// A fixed-length sequence of booleans stored at one-bit granularity.
///
/// The size is chosen at construction and never changes, and the backing
/// store is allocated exactly once. Cloning produces a deep copy that shares
/// no storage with the original.
#[derive(Clone)]
pub struct BitArray {
    /// Packed storage, `ceil(size / 8)` units long.
    store: Box<[u8]>,

    /// Number of logical bits.
    size: usize,
}

impl BitArray {
    /// Creates a bit array of `size` bits, all cleared.
    ///
    /// # Arguments
    ///
    /// * `size` - Number of logical bits, must be at least 1
    ///
    /// # Returns
    ///
    /// The new array, or `InvalidSize` if `size` is zero.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(BitArrayError::InvalidSize);
        }
        Ok(Self {
            store: vec![0u8; BitPack::unit_count(size)].into_boxed_slice(),
            size,
        })
    }

    /// Creates an independent copy of `other` with the same size and bits.
    pub fn copy_of(other: &BitArray) -> Self {
        other.clone()
    }

    #[inline(always)]
    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.size {
            return Err(BitArrayError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Returns whether the bit at `index` is set.
    #[inline]
    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(BitPack::get(&self.store, index))
    }

    /// Sets the bit at `index` to 1.
    #[inline]
    pub fn set(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        BitPack::set(&mut self.store, index, true);
        Ok(())
    }

    /// Clears the bit at `index` to 0.
    #[inline]
    pub fn clear(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        BitPack::set(&mut self.store, index, false);
        Ok(())
    }

    /// Toggles the bit at `index`.
    #[inline]
    pub fn flip(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        BitPack::toggle(&mut self.store, index);
        Ok(())
    }

    /// Sets every bit in the half-open `range`.
    ///
    /// Positions are applied in ascending order and each one is bounds
    /// checked as it is reached. A range whose end runs past the array sets
    /// the in-range prefix and then fails with `IndexOutOfRange` at the
    /// first position outside it.
    ///
    /// # Arguments
    ///
    /// * `range` - Positions to set; `from == to` is a no-op
    ///
    /// # Returns
    ///
    /// `InvalidRange` if the range start exceeds its end, `IndexOutOfRange`
    /// for the first position past the array, otherwise `Ok`.
    pub fn set_range(&mut self, range: Range<usize>) -> Result<()> {
        self.apply_range(range, Self::set)
    }

    /// Clears every bit in the half-open `range`.
    ///
    /// Same ordering and failure behavior as [`BitArray::set_range`].
    pub fn clear_range(&mut self, range: Range<usize>) -> Result<()> {
        self.apply_range(range, Self::clear)
    }

    /// Toggles every bit in the half-open `range`.
    ///
    /// Same ordering and failure behavior as [`BitArray::set_range`].
    pub fn flip_range(&mut self, range: Range<usize>) -> Result<()> {
        self.apply_range(range, Self::flip)
    }

    fn apply_range(
        &mut self,
        range: Range<usize>,
        mut op: impl FnMut(&mut Self, usize) -> Result<()>,
    ) -> Result<()> {
        if range.start > range.end {
            return Err(BitArrayError::InvalidRange {
                from: range.start,
                to: range.end,
            });
        }
        for index in range {
            op(self, index)?;
        }
        Ok(())
    }

    /// Number of logical bits, fixed at construction.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Counts the logical positions whose bit is set.
    ///
    /// Padding bits in the final unit are masked out, so a `set_all` array
    /// reports exactly `size`.
    pub fn cardinality(&self) -> usize {
        self.logical_units()
            .map(|unit| unit.count_ones() as usize)
            .sum()
    }

    /// Returns true if no logical bit is set.
    ///
    /// Scans the units in order and stops at the first non-zero one.
    pub fn is_empty(&self) -> bool {
        self.logical_units().all(|unit| unit == 0)
    }

    /// Clears every storage unit, padding included.
    pub fn clear_all(&mut self) {
        self.store.fill(0);
    }

    /// Sets every storage unit to all ones, padding included.
    pub fn set_all(&mut self) {
        self.store.fill(u8::MAX);
    }

    /// Complements every storage unit, padding included.
    pub fn flip_all(&mut self) {
        for unit in self.store.iter_mut() {
            *unit = !*unit;
        }
    }

    /// Iterates over every logical bit from position 0 upwards.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Iterates over the positions of the set bits in ascending order.
    pub fn ones(&self) -> Ones<'_> {
        Ones::new(&self.store, self.size)
    }

    /// Raw view of the backing store. Padding bits are visible here.
    #[inline(always)]
    pub fn units(&self) -> &[u8] {
        &self.store
    }

    // Storage units with the padding of the final unit cleared.
    fn logical_units(&self) -> impl Iterator<Item = u8> + '_ {
        let last = self.store.len() - 1;
        let tail = BitPack::tail_mask(self.size);
        self.store
            .iter()
            .enumerate()
            .map(move |(i, &unit)| if i == last { unit & tail } else { unit })
    }
}

// Padding is not part of the logical value, so the derived comparison over
// raw units would be wrong.
impl PartialEq for BitArray {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.logical_units().eq(other.logical_units())
    }
}

impl Eq for BitArray {}

impl<'a> IntoIterator for &'a BitArray {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitArray")
            .field("size", &self.size)
            .field("bits", &format_args!("{}", self))
            .finish()
    }
}
