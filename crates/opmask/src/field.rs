//! Field specifications and the instruction definitions built from them.

use crate::{
    bits::{self, LAST_BIT},
    errors::CompileError,
};

/// Bits `start..=stop` (MSB-first) of the instruction word must equal `value`.
///
/// Only constructed through [FieldSpec::new], so `start <= stop <= 31` always
/// holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    start: u8,
    stop: u8,
    value: u32,
}

impl FieldSpec {
    /// Creates a field, rejecting reversed or out-of-word bounds.
    pub fn new(start: u8, stop: u8, value: u32) -> Result<Self, CompileError> {
        if start > stop || stop > LAST_BIT {
            return Err(CompileError::InvalidRange { start, stop });
        }

        Ok(FieldSpec { start, stop, value })
    }

    /// First constrained position, 0 being the most significant bit.
    pub fn start(&self) -> u8 {
        self.start
    }

    /// Last constrained position, inclusive.
    pub fn stop(&self) -> u8 {
        self.stop
    }

    /// Expected value, right-aligned. Not checked against the field width.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Number of bits covered by the field.
    pub fn width(&self) -> u32 {
        u32::from(self.stop - self.start) + 1
    }

    /// Shift that moves a right-aligned value into the field's position.
    pub fn shift(&self) -> u32 {
        bits::lsb_shift(self.stop)
    }

    /// Mask with exactly the field's positions set.
    pub fn mask(&self) -> u32 {
        bits::range_mask(self.start, self.stop)
    }

    /// Whether `value` can be represented in [FieldSpec::width] bits.
    pub fn value_fits(&self) -> bool {
        bits::significant_bits(self.value) <= self.width()
    }
}

/// One opcode form: a name plus the fields its encoding fixes, in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionDef {
    /// Opcode name, copied verbatim into the rendered table.
    pub opcode: String,
    pub fields: Vec<FieldSpec>,
}

impl InstructionDef {
    pub fn new(opcode: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        InstructionDef {
            opcode: opcode.into(),
            fields,
        }
    }
}
