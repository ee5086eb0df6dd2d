//! Opcode table: compiled instructions in input order, and the renderer for
//! the `isa!` block consumed by the macros crate.
//!
//! Rendered output looks like:
//!
//! ```text
//! use ppc750cl_macros::isa;
//!
//! isa! {
//!     "add" & 0xffe007ff == 0x7c000214;
//! }
//! ```

use std::{fmt, io};

use log::debug;

use crate::{
    compiled::CompiledInstruction,
    errors::{CompileError, LineError},
    field::InstructionDef,
    pattern::{self, SourceLine},
};

/// Crate path used in the `use <namespace>::isa;` header by default.
pub const DEFAULT_NAMESPACE: &str = "ppc750cl_macros";

/// One table entry: `"<opcode>" & <mask> == <bits>;`, hex in lowercase with a
/// `0x` prefix and no zero padding.
impl fmt::Display for CompiledInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" & {:#x} == {:#x};",
            self.opcode, self.matcher.mask, self.matcher.bits
        )
    }
}

/// Compiled instructions in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpcodeTable {
    entries: Vec<CompiledInstruction>,
}

impl OpcodeTable {
    /// Compiles every definition. Fails on the first one that does not compile.
    pub fn compile(defs: &[InstructionDef]) -> Result<Self, CompileError> {
        let entries = defs
            .iter()
            .map(CompiledInstruction::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// Like [OpcodeTable::compile], but errors carry the source line.
    pub fn from_source_lines(lines: &[SourceLine]) -> Result<Self, LineError> {
        let mut entries = Vec::with_capacity(lines.len());

        for line in lines {
            let compiled = CompiledInstruction::try_from(&line.def).map_err(|e| line.error(e))?;
            debug!(
                "line {}: {} mask={:#010x} bits={:#010x}",
                line.line, compiled.opcode, compiled.matcher.mask, compiled.matcher.bits
            );
            entries.push(compiled);
        }

        Ok(Self { entries })
    }

    /// Parses and compiles a whole pattern file.
    pub fn from_patterns(input: &str) -> Result<Self, LineError> {
        Self::from_source_lines(&pattern::parse_patterns(input)?)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompiledInstruction> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry, in definition order, whose match accepts `word`.
    pub fn first_match(&self, word: u32) -> Option<&CompiledInstruction> {
        self.entries.iter().find(|e| e.matcher.matches(word))
    }

    /// Writes the full `isa!` block, header and footer included.
    pub fn write_source<W: fmt::Write>(&self, namespace: &str, out: &mut W) -> fmt::Result {
        writeln!(out, "use {namespace}::isa;")?;
        writeln!(out)?;
        writeln!(out, "isa! {{")?;
        for entry in &self.entries {
            writeln!(out, "    {entry}")?;
        }
        writeln!(out, "}}")
    }

    /// Renders the block into `out` in one write.
    pub fn render<W: io::Write>(&self, namespace: &str, out: &mut W) -> io::Result<()> {
        out.write_all(self.to_source(namespace).as_bytes())
    }

    pub fn to_source(&self, namespace: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_source(namespace, &mut out);
        out
    }
}

impl<'a> IntoIterator for &'a OpcodeTable {
    type Item = &'a CompiledInstruction;
    type IntoIter = std::slice::Iter<'a, CompiledInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
