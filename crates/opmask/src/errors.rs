//! Error types for pattern parsing and instruction compilation.

use thiserror::Error;

/// Errors produced when compiling an [crate::field::InstructionDef] into a
/// [crate::compiled::CompiledInstruction].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The instruction declares no fields and would match every word.
    #[error("instruction has no fields")]
    EmptyFieldList,
    /// Field bounds are reversed or fall outside `0..=31`.
    #[error("invalid bit range {start}..={stop}, expected start <= stop <= 31")]
    InvalidRange { start: u8, stop: u8 },
}

/// Errors produced when reading one line of the pattern file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A field token is not exactly three comma-separated integers.
    #[error("malformed field `{token}`, expected `start,stop,value`")]
    MalformedField { token: String },
    /// The line parsed but the instruction does not compile.
    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// A [PatternError] located at a 1-based line of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind} (in `{text}`)")]
pub struct LineError {
    pub line: usize,
    /// The offending line, trimmed.
    pub text: String,
    pub kind: PatternError,
}
