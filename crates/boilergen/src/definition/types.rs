use serde::{Deserialize, Serialize};

use crate::typemap::CanonicalType;

/// A problem's callable contract, parsed from definition-language text.
///
/// Built by one parse pass and treated as immutable by every generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDefinition {
    pub problem_name: String,
    pub function_name: String,
    /// Declaration order fixes the call-site argument order in every
    /// generated artifact.
    #[serde(default)]
    pub input_fields: Vec<Field>,
    #[serde(default)]
    pub output_fields: Vec<Field>,
}

impl ProblemDefinition {
    /// Whether the harness captures the call's result into a named value.
    ///
    /// True only for exactly one declared output field; with zero or
    /// several outputs the call is emitted uncaptured.
    pub fn captures_result(&self) -> bool {
        self.output_fields.len() == 1
    }

    /// The output field that shapes the captured-result type and print
    /// strategy, if a result is captured at all.
    pub fn primary_output(&self) -> Option<&Field> {
        if self.captures_result() {
            self.output_fields.first()
        } else {
            None
        }
    }
}

/// One typed, named field of the input or output structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(rename = "type")]
    pub canonical_type: CanonicalType,
    pub name: String,
}

impl Field {
    pub fn new(canonical_type: &str, name: &str) -> Self {
        Field {
            canonical_type: CanonicalType::parse(canonical_type),
            name: name.to_string(),
        }
    }
}
