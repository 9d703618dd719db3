use core::iter::FusedIterator;

use crate::bit_array::BitArray;
use crate::bit_utils::{BitPack, UNIT_BITS};

/// Yields the value of every logical bit, position 0 first.
///
/// Each call to [`BitArray::iter`] starts a fresh traversal. The iterator
/// holds a shared borrow of the array, so the bits it reads cannot be
/// mutated while it is alive.
#[derive(Clone)]
pub struct Iter<'a> {
    units: &'a [u8],
    front: usize,
    back: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(array: &'a BitArray) -> Self {
        Self {
            units: array.units(),
            front: 0,
            back: array.size(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let bit = BitPack::get(self.units, self.front);
            self.front += 1;
            Some(bit)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(BitPack::get(self.units, self.back))
        } else {
            None
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Yields the positions of set bits in ascending order.
///
/// Zero units are skipped whole and set bits within a unit are found with
/// `trailing_zeros`, so sparse arrays are walked in roughly `size / 8`
/// steps. The final unit is masked, so padding is never reported.
#[derive(Clone)]
pub struct Ones<'a> {
    units: &'a [u8],
    size: usize,
    unit_index: usize,
    current_unit: u8,
}

impl<'a> Ones<'a> {
    pub(crate) fn new(units: &'a [u8], size: usize) -> Self {
        let mut ones = Self {
            units,
            size,
            unit_index: 0,
            current_unit: 0,
        };
        ones.current_unit = ones.load(0);
        ones
    }

    fn load(&self, unit_index: usize) -> u8 {
        let unit = self.units[unit_index];
        if unit_index + 1 == self.units.len() {
            unit & BitPack::tail_mask(self.size)
        } else {
            unit
        }
    }
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_unit == 0 {
                if self.unit_index + 1 >= self.units.len() {
                    return None;
                }
                self.unit_index += 1;
                self.current_unit = self.load(self.unit_index);
                continue;
            }

            let bit_position = self.current_unit.trailing_zeros() as usize;
            self.current_unit &= self.current_unit - 1;
            return Some(self.unit_index * UNIT_BITS + bit_position);
        }
    }
}

impl FusedIterator for Ones<'_> {}
