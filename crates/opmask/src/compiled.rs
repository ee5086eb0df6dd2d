use log::warn;

use crate::{
    errors::CompileError,
    field::{FieldSpec, InstructionDef},
};

/// The `(mask, bits)` pair an instruction word is tested against:
/// `word & mask == bits`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CompiledMatch {
    /// Every constrained position, unioned across fields.
    pub mask: u32,
    /// Required value at each masked position; zero elsewhere.
    pub bits: u32,
}

impl CompiledMatch {
    /// Starting accumulator. Matches every word, so it is never the result of
    /// compiling an instruction.
    pub const EMPTY: CompiledMatch = CompiledMatch { mask: 0, bits: 0 };

    /// Folds one field into the accumulator.
    ///
    /// The field's mask is a run of `width` ones placed at `31 - stop`, and its
    /// value is shifted by the same amount. The value is used as given: bits
    /// it carries beyond the field width land outside the field's mask, and
    /// bits pushed past position 0 are dropped.
    pub fn accumulate(self, field: &FieldSpec) -> CompiledMatch {
        CompiledMatch {
            mask: self.mask | field.mask(),
            bits: self.bits | (field.value() << field.shift()),
        }
    }

    /// Whether `field` constrains a position this match already covers.
    pub fn overlaps(&self, field: &FieldSpec) -> bool {
        self.mask & field.mask() != 0
    }

    pub fn matches(&self, word: u32) -> bool {
        word & self.mask == self.bits
    }

    /// No expected bit is set outside the mask.
    pub fn is_consistent(&self) -> bool {
        self.bits & !self.mask == 0
    }
}

/// An opcode name together with its compiled match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledInstruction {
    pub opcode: String,
    pub matcher: CompiledMatch,
}

impl TryFrom<&InstructionDef> for CompiledInstruction {
    type Error = CompileError;

    fn try_from(def: &InstructionDef) -> Result<Self, Self::Error> {
        Ok(CompiledInstruction {
            opcode: def.opcode.clone(),
            matcher: compile_fields(&def.opcode, &def.fields)?,
        })
    }
}

/// Folds `fields` in declaration order, starting from [CompiledMatch::EMPTY].
///
/// Overlapping fields and values wider than their field are reported through
/// `log::warn!` but still compiled as written.
pub fn compile_fields(opcode: &str, fields: &[FieldSpec]) -> Result<CompiledMatch, CompileError> {
    if fields.is_empty() {
        return Err(CompileError::EmptyFieldList);
    }

    let mut acc = CompiledMatch::EMPTY;
    for field in fields {
        if !field.value_fits() {
            warn!(
                "{opcode}: value {} does not fit in bits {}..={} ({} bits wide)",
                field.value(),
                field.start(),
                field.stop(),
                field.width()
            );
        }
        if acc.overlaps(field) {
            warn!(
                "{opcode}: bits {}..={} overlap an earlier field",
                field.start(),
                field.stop()
            );
        }

        acc = acc.accumulate(field);
    }

    Ok(acc)
}
