use std::path::Path;

use crate::definition::types::{Field, ProblemDefinition};
use crate::error::GeneratorError;
use crate::typemap::CanonicalType;

/// Which field list the current line appends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Input,
    Output,
}

/// Parse a definition file into a [`ProblemDefinition`].
///
/// # Errors
///
/// Returns [`GeneratorError::Io`] if the file cannot be read. Parsing
/// itself never fails.
pub fn parse_definition_file(path: &Path) -> Result<ProblemDefinition, GeneratorError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_definition(&content))
}

/// Parse definition-language text into a [`ProblemDefinition`].
///
/// One linear pass over trimmed lines. Six directive prefixes are
/// recognized; every other line is ignored. Field lines outside their
/// matching `Input Structure:`/`Output Structure:` section are dropped.
/// Malformed lines degrade rather than fail, so this function always
/// returns a definition.
pub fn parse_definition(text: &str) -> ProblemDefinition {
    let mut def = ProblemDefinition::default();
    let mut section = Section::None;

    for line in text.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix("Problem Name:") {
            def.problem_name = problem_name(rest);
        } else if let Some(rest) = line.strip_prefix("Function Name:") {
            def.function_name = rest.trim().to_string();
        } else if line.starts_with("Input Structure:") {
            section = Section::Input;
        } else if line.starts_with("Output Structure:") {
            section = Section::Output;
        } else if let Some(rest) = line.strip_prefix("Input Field:") {
            if section == Section::Input {
                if let Some(field) = parse_field(rest) {
                    def.input_fields.push(field);
                }
            }
        } else if let Some(rest) = line.strip_prefix("Output Field:") {
            if section == Section::Output {
                if let Some(field) = parse_field(rest) {
                    def.output_fields.push(field);
                }
            }
        }
    }

    def
}

/// Extract the problem name, stripping one markdown-bold span if present.
fn problem_name(raw: &str) -> String {
    let raw = raw.trim();
    if let Some(start) = raw.find("**") {
        let inner = &raw[start + 2..];
        if let Some(end) = inner.find("**") {
            if end > 0 {
                return inner[..end].to_string();
            }
        }
    }
    raw.to_string()
}

/// Tokenize a field declaration: the last whitespace-separated token is
/// the name, the preceding tokens rejoined with single spaces form the
/// canonical type. Tolerates types with internal spaces or generic
/// brackets. A single token yields an empty type and the token as name.
fn parse_field(raw: &str) -> Option<Field> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let (name, ty) = tokens.split_last()?;
    Some(Field {
        canonical_type: CanonicalType::parse(&ty.join(" ")),
        name: (*name).to_string(),
    })
}
