//! Parser for the pattern file format.
//!
//! One instruction per line: an opcode token followed by one or more
//! whitespace-separated `start,stop,value` field tokens.
//!
//! ```text
//! # primary opcode 31, extended opcode 266
//! add 0,5,31 21,30,266 31,31,0
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::{
    errors::{LineError, PatternError},
    field::{FieldSpec, InstructionDef},
};

/// Parses a single `start,stop,value` token.
///
/// Reversed or out-of-word bounds are rejected with
/// [crate::errors::CompileError::InvalidRange].
pub fn parse_field_token(token: &str) -> Result<FieldSpec, PatternError> {
    let malformed = || PatternError::MalformedField {
        token: token.to_string(),
    };

    let mut parts = token.split(',');
    let (Some(start), Some(stop), Some(value), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };

    let field = FieldSpec::new(
        parse_decimal(start).ok_or_else(malformed)?,
        parse_decimal(stop).ok_or_else(malformed)?,
        parse_decimal(value).ok_or_else(malformed)?,
    )?;

    Ok(field)
}

fn parse_decimal<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    s.parse().ok()
}

/// Parses one line. Returns `None` for blank and comment lines.
///
/// An opcode with no field tokens parses successfully; it is rejected when
/// the definition is compiled.
pub fn parse_line(line: &str) -> Result<Option<InstructionDef>, PatternError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let Some(opcode) = tokens.next() else {
        return Ok(None);
    };
    let fields = tokens
        .map(parse_field_token)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(InstructionDef::new(opcode, fields)))
}

/// A parsed instruction and the 1-based input line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub line: usize,
    pub text: String,
    pub def: InstructionDef,
}

impl SourceLine {
    pub fn error(&self, kind: impl Into<PatternError>) -> LineError {
        LineError {
            line: self.line,
            text: self.text.clone(),
            kind: kind.into(),
        }
    }
}

/// Parses every line of `input`, stopping at the first malformed one.
pub fn parse_patterns(input: &str) -> Result<Vec<SourceLine>, LineError> {
    let mut defs = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let parsed = parse_line(raw).map_err(|kind| LineError {
            line: idx + 1,
            text: raw.trim().to_string(),
            kind,
        })?;

        if let Some(def) = parsed {
            defs.push(SourceLine {
                line: idx + 1,
                text: raw.trim().to_string(),
                def,
            });
        }
    }

    Ok(defs)
}

#[cfg(test)]
mod tests {
    use crate::errors::CompileError;

    use super::*;

    #[test]
    fn test_parse_field_token() {
        assert_eq!(
            parse_field_token("21,30,266").unwrap(),
            FieldSpec::new(21, 30, 266).unwrap()
        );
    }

    #[test]
    fn test_parse_field_token_wrong_arity() {
        for token in ["1,2", "1,2,3,4", "", ",,", "1,,3"] {
            assert_eq!(
                parse_field_token(token).unwrap_err(),
                PatternError::MalformedField {
                    token: token.to_string()
                }
            );
        }
    }

    #[test]
    fn test_parse_field_token_not_decimal() {
        for token in ["a,2,3", "0,5,0x1f", "0,5,-1", "0, 5,1", "+0,5,1"] {
            assert!(parse_field_token(token).is_err(), "{token}");
        }
    }

    #[test]
    fn test_parse_field_token_overflow() {
        assert!(parse_field_token("0,256,0").is_err());
        assert!(parse_field_token("0,31,4294967296").is_err());
        assert!(parse_field_token("0,31,4294967295").is_ok());
    }

    #[test]
    fn test_parse_field_token_rejects_bad_range() {
        assert_eq!(
            parse_field_token("10,6,0").unwrap_err(),
            PatternError::Compile(CompileError::InvalidRange { start: 10, stop: 6 })
        );
        assert_eq!(
            parse_field_token("0,32,0").unwrap_err(),
            PatternError::Compile(CompileError::InvalidRange { start: 0, stop: 32 })
        );
    }

    #[test]
    fn test_parse_line() {
        let def = parse_line("add 0,5,31 6,10,0 21,30,266 31,31,0\n")
            .unwrap()
            .unwrap();
        assert_eq!(def.opcode, "add");
        assert_eq!(def.fields.len(), 4);
        assert_eq!(def.fields[2].value(), 266);
    }

    #[test]
    fn test_parse_line_extra_whitespace() {
        let def = parse_line("  mtspr\t0,5,31   21,30,467 \r").unwrap().unwrap();
        assert_eq!(def.opcode, "mtspr");
        assert_eq!(def.fields.len(), 2);
    }

    #[test]
    fn test_parse_line_opcode_only() {
        let def = parse_line("sync").unwrap().unwrap();
        assert!(def.fields.is_empty());
    }

    #[test]
    fn test_parse_line_skips_blank_and_comment() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   \t").unwrap(), None);
        assert_eq!(parse_line("# comment 0,5,31").unwrap(), None);
    }

    #[test]
    fn test_parse_patterns_line_numbers() {
        let input = "# header\naddi 0,5,14\n\naddis 0,5,15\n";
        let defs = parse_patterns(input).unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].line, 2);
        assert_eq!(defs[1].line, 4);
        assert_eq!(defs[1].def.opcode, "addis");
    }

    #[test]
    fn test_parse_patterns_reports_line() {
        let input = "addi 0,5,14\nbad 0,5\n";
        let err = parse_patterns(input).unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.text, "bad 0,5");
        assert_eq!(
            err.kind,
            PatternError::MalformedField {
                token: "0,5".to_string()
            }
        );
    }
}
