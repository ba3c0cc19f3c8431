//! Python harness: `input()` line reads under a `__main__` guard.

use crate::definition::{Field, ProblemDefinition};
use crate::harness::{argument_list, HarnessTemplate};
use crate::typemap::{CanonicalType, TypeShape};

pub(super) fn template(def: &ProblemDefinition) -> HarnessTemplate {
    let before = if needs_typing_import(def) {
        "from typing import List\n\n".to_string()
    } else {
        String::new()
    };

    let mut after = String::new();
    after.push_str("\nif __name__ == \"__main__\":\n");

    for field in &def.input_fields {
        after.push_str(&read_snippet(field));
    }
    if !def.input_fields.is_empty() {
        after.push('\n');
    }

    let args = argument_list(def);
    if let Some(output) = def.primary_output() {
        after.push_str(&format!("    result = {}({args})\n", def.function_name));
        after.push('\n');
        after.push_str(&print_snippet(output));
    } else {
        after.push_str(&format!("    {}({args})\n", def.function_name));
    }

    HarnessTemplate { before, after }
}

/// `typing.List` is needed when a sequence type appears on either side
/// of the contract.
fn needs_typing_import(def: &ProblemDefinition) -> bool {
    def.input_fields
        .iter()
        .chain(def.output_fields.iter())
        .any(|f| f.canonical_type.shape() != TypeShape::Scalar && !is_opaque(f))
}

fn is_opaque(field: &Field) -> bool {
    field.canonical_type.shape() == TypeShape::Opaque
}

fn read_snippet(field: &Field) -> String {
    let name = &field.name;
    match &field.canonical_type {
        CanonicalType::Int | CanonicalType::Long => format!("    {name} = int(input())\n"),
        CanonicalType::Float | CanonicalType::Double => {
            format!("    {name} = float(input())\n")
        }
        CanonicalType::Str => format!("    {name} = input()\n"),
        CanonicalType::Bool => {
            format!("    {name} = input().strip().lower() in (\"1\", \"true\")\n")
        }
        CanonicalType::VecInt => format!(
            "    n_{name} = int(input())\n    {name} = list(map(int, input().split()))\n"
        ),
        CanonicalType::VecStr => {
            format!("    n_{name} = int(input())\n    {name} = input().split()\n")
        }
        CanonicalType::VecVecInt => format!(
            "    rows_{name} = int(input())\n\
             \x20   {name} = [list(map(int, input().split())) for _ in range(rows_{name})]\n"
        ),
        CanonicalType::Other(_) => {
            format!("    {name} = input()  # TODO: Add input parsing\n")
        }
    }
}

fn print_snippet(output: &Field) -> String {
    match output.canonical_type.shape() {
        TypeShape::Matrix => "    for row in result:\n\
             \x20       print(' '.join(map(str, row)))\n"
            .to_string(),
        TypeShape::Sequence => "    print(' '.join(map(str, result)))\n".to_string(),
        TypeShape::Scalar => "    print(result)\n".to_string(),
        TypeShape::Opaque => "    print(result)  # TODO: Add output printing\n".to_string(),
    }
}
