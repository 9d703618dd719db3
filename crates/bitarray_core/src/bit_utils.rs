//! Per-unit bit manipulation over packed byte storage.
//!
//! Logical position `p` lives in unit `p / 8` at bit offset `p % 8`, where
//! bit 0 is the least significant bit of the unit. These helpers only index
//! the slice; range policy belongs to the caller.

/// Number of logical bits packed into one storage unit.
pub const UNIT_BITS: usize = u8::BITS as usize;

pub struct BitPack;

impl BitPack {
    /// Number of storage units needed to hold `bits` logical bits.
    #[inline(always)]
    pub const fn unit_count(bits: usize) -> usize {
        bits.div_ceil(UNIT_BITS)
    }

    /// Mask selecting the logical bits of the final unit of a `bits`-bit store.
    ///
    /// When `bits` is a multiple of the unit width the final unit is fully
    /// used and the mask is all ones.
    #[inline(always)]
    pub const fn tail_mask(bits: usize) -> u8 {
        match bits % UNIT_BITS {
            0 => u8::MAX,
            used => (1u8 << used) - 1,
        }
    }

    #[inline(always)]
    pub fn get(storage: &[u8], index: usize) -> bool {
        let unit = storage[index / UNIT_BITS];
        let bit = index % UNIT_BITS;
        (unit >> bit) & 1 == 1
    }

    #[inline(always)]
    pub fn toggle(storage: &mut [u8], index: usize) {
        let unit_idx = index / UNIT_BITS;
        let bit_idx = index % UNIT_BITS;
        storage[unit_idx] ^= 1 << bit_idx;
    }

    #[inline(always)]
    pub fn set(storage: &mut [u8], index: usize, val: bool) {
        let unit_idx = index / UNIT_BITS;
        let bit_idx = index % UNIT_BITS;
        if val {
            storage[unit_idx] |= 1 << bit_idx;
        } else {
            storage[unit_idx] &= !(1 << bit_idx);
        }
    }
}
