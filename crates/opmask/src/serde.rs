//! JSON-deserializable instruction descriptions.
//!
//! An alternative to the line-oriented pattern file, for tables generated by
//! other tools:
//!
//! ```json
//! {
//!   "instructions": [
//!     { "opcode": "addi", "fields": [{ "start": 0, "stop": 5, "value": 14 }] }
//!   ]
//! }
//! ```
//!
//! Bounds are checked when converting into [crate::field::FieldSpec], as for
//! parsed lines.

use serde::{Deserialize, Serialize};

use crate::{
    errors::CompileError,
    field::{FieldSpec, InstructionDef},
};

/// Top-level table description.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TableDef {
    /// Instructions, in output order.
    pub instructions: Vec<InstructionDefJson>,
}

/// Description of one opcode form.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct InstructionDefJson {
    pub opcode: String,
    /// Fixed bit fields. Must be non-empty to compile.
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

/// Inclusive MSB-first bit range and the value it must hold.
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct FieldDef {
    pub start: u8,
    pub stop: u8,
    pub value: u32,
}

impl TryFrom<FieldDef> for FieldSpec {
    type Error = CompileError;

    fn try_from(value: FieldDef) -> Result<Self, Self::Error> {
        FieldSpec::new(value.start, value.stop, value.value)
    }
}

impl TryFrom<InstructionDefJson> for InstructionDef {
    type Error = CompileError;

    fn try_from(value: InstructionDefJson) -> Result<Self, Self::Error> {
        Ok(InstructionDef {
            opcode: value.opcode,
            fields: value
                .fields
                .into_iter()
                .map(FieldSpec::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

impl TableDef {
    /// Converts every instruction, failing on the first out-of-range field.
    pub fn into_defs(self) -> Result<Vec<InstructionDef>, CompileError> {
        self.instructions
            .into_iter()
            .map(InstructionDef::try_from)
            .collect()
    }
}
