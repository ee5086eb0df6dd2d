//! Bit arithmetic for 32-bit instruction words.
//!
//! Positions are MSB-first: position 0 is the high bit of the word and
//! position 31 the low bit.

/// Number of bits in an instruction word.
pub const WORD_BITS: u8 = 32;

/// Highest valid MSB-first bit position.
pub const LAST_BIT: u8 = WORD_BITS - 1;

/// Distance of MSB-first position `stop` from the true least significant bit.
pub fn lsb_shift(stop: u8) -> u32 {
    debug_assert!(stop <= LAST_BIT);
    u32::from(LAST_BIT - stop)
}

/// A contiguous run of `width` one-bits starting at bit 0 (`1..=32` bits).
pub fn ones(width: u32) -> u32 {
    debug_assert!((1..=32).contains(&width));
    u32::MAX >> (32 - width)
}

/// Mask with exactly the MSB-first positions `start..=stop` set.
pub fn range_mask(start: u8, stop: u8) -> u32 {
    let width = u32::from(stop - start) + 1;
    ones(width) << lsb_shift(stop)
}

/// Mask with the single MSB-first position `pos` set.
pub fn position_mask(pos: u8) -> u32 {
    1 << lsb_shift(pos)
}

/// Number of significant bits in `value` (0 for zero).
pub fn significant_bits(value: u32) -> u32 {
    32 - value.leading_zeros()
}
