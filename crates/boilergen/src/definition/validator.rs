use std::collections::BTreeSet;

use crate::definition::types::ProblemDefinition;
use crate::error::{Severity, Violation};
use crate::typemap::CanonicalType;

/// Lint a parsed definition for degraded or surprising constructs.
///
/// Generation never fails, so everything here is advisory: warnings
/// point at definitions that will produce incomplete artifacts, infos
/// at accepted-but-unusual ones. An empty result means a clean
/// definition.
pub fn lint_definition(def: &ProblemDefinition) -> Vec<Violation> {
    let mut violations = Vec::new();

    if def.problem_name.is_empty() {
        violations.push(warning("DEF-001", "problem name is empty"));
    }
    if def.function_name.is_empty() {
        violations.push(warning(
            "DEF-002",
            "function name is empty; generated signatures will be unnamed",
        ));
    }

    let fields = def
        .input_fields
        .iter()
        .map(|f| ("input", f))
        .chain(def.output_fields.iter().map(|f| ("output", f)));
    for (kind, field) in fields {
        if field.name.is_empty() {
            violations.push(warning("DEF-003", &format!("{kind} field has no name")));
        }
        match &field.canonical_type {
            CanonicalType::Other(label) if label.is_empty() => {
                violations.push(warning(
                    "DEF-004",
                    &format!("{kind} field `{}` has no type", field.name),
                ));
            }
            CanonicalType::Other(label) => {
                violations.push(info(
                    "DEF-005",
                    &format!(
                        "{kind} field `{}` uses `{label}`, outside the fixed \
                         vocabulary; harness I/O will contain manual-completion \
                         placeholders",
                        field.name
                    ),
                ));
            }
            _ => {}
        }
    }

    if def.output_fields.len() > 1 {
        violations.push(warning(
            "DEF-006",
            "multiple output fields declared; the harness emits an uncaptured \
             call and no print section",
        ));
    }

    let mut seen = BTreeSet::new();
    for field in &def.input_fields {
        if !field.name.is_empty() && !seen.insert(field.name.as_str()) {
            violations.push(warning(
                "DEF-007",
                &format!("duplicate input field name `{}`", field.name),
            ));
        }
    }

    violations
}

fn warning(rule: &str, message: &str) -> Violation {
    Violation {
        severity: Severity::Warning,
        rule: rule.to_string(),
        message: message.to_string(),
    }
}

fn info(rule: &str, message: &str) -> Violation {
    Violation {
        severity: Severity::Info,
        rule: rule.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::parse_definition;

    fn rules(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.rule.as_str()).collect()
    }

    #[test]
    fn clean_definition_has_no_violations() {
        let def = parse_definition(
            "\
Problem Name: Two Sum
Function Name: twoSum
Input Structure:
Input Field: vector<int> nums
Input Field: int target
Output Structure:
Output Field: vector<int> result
",
        );
        assert!(lint_definition(&def).is_empty());
    }

    #[test]
    fn missing_names_flagged() {
        let def = parse_definition("Input Structure:\nInput Field: int a\n");
        let violations = lint_definition(&def);
        assert!(rules(&violations).contains(&"DEF-001"));
        assert!(rules(&violations).contains(&"DEF-002"));
    }

    #[test]
    fn unknown_type_is_info() {
        let def = parse_definition(
            "\
Problem Name: P
Function Name: f
Input Structure:
Input Field: Pair<int,int> p
Output Structure:
Output Field: int result
",
        );
        let violations = lint_definition(&def);
        assert_eq!(rules(&violations), vec!["DEF-005"]);
        assert_eq!(violations[0].severity, Severity::Info);
        assert!(violations[0].message.contains("Pair<int,int>"));
    }

    #[test]
    fn empty_type_is_warning() {
        let def = parse_definition(
            "\
Problem Name: P
Function Name: f
Input Structure:
Input Field: mystery
",
        );
        let violations = lint_definition(&def);
        assert!(rules(&violations).contains(&"DEF-004"));
    }

    #[test]
    fn multiple_outputs_flagged() {
        let def = parse_definition(
            "\
Problem Name: P
Function Name: f
Output Structure:
Output Field: int a
Output Field: int b
",
        );
        let violations = lint_definition(&def);
        assert!(rules(&violations).contains(&"DEF-006"));
    }

    #[test]
    fn duplicate_input_names_flagged() {
        let def = parse_definition(
            "\
Problem Name: P
Function Name: f
Input Structure:
Input Field: int n
Input Field: string n
",
        );
        let violations = lint_definition(&def);
        assert!(rules(&violations).contains(&"DEF-007"));
    }
}
