//! The definition language: data model, parser, and lint pass.

mod parser;
mod types;
mod validator;

pub use parser::{parse_definition, parse_definition_file};
pub use types::{Field, ProblemDefinition};
pub use validator::lint_definition;
