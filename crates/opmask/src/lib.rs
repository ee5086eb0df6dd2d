//! # opmask
//!
//! Compiles textual descriptions of 32-bit instruction encodings into
//! `(mask, bits)` pairs, and renders them as an `isa!` opcode table.
//!
//! Fields are declared as inclusive bit ranges in MSB-first numbering: bit 0
//! is the most significant bit of the instruction word and bit 31 the least
//! significant, as in the PowerPC manuals.
//!
//! ## Example
//!
//! ```
//! use opmask::compiled::CompiledInstruction;
//! use opmask::field::{FieldSpec, InstructionDef};
//!
//! let def = InstructionDef::new(
//!     "addi",
//!     vec![FieldSpec::new(0, 5, 14).unwrap()],
//! );
//! let compiled = CompiledInstruction::try_from(&def).unwrap();
//! assert_eq!(compiled.matcher.mask, 0xfc00_0000);
//! assert_eq!(compiled.matcher.bits, 0x3800_0000);
//! assert!(compiled.matcher.matches(0x3860_0001));
//! ```

pub mod bits;
pub mod compiled;
pub mod errors;
pub mod field;
pub mod pattern;
#[cfg(feature = "serde")]
pub mod serde;
pub mod table;
