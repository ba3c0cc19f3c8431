//! Node.js harness: collect all stdin lines via `readline`, then
//! process with an explicit line cursor.

use crate::definition::{Field, ProblemDefinition};
use crate::harness::{argument_list, HarnessTemplate};
use crate::typemap::{CanonicalType, TypeShape};

pub(super) fn template(def: &ProblemDefinition) -> HarnessTemplate {
    let before = String::new();

    let mut after = String::new();
    after.push_str("\nconst readline = require('readline');\n");
    after.push_str("const rl = readline.createInterface({\n");
    after.push_str("    input: process.stdin,\n    output: process.stdout\n});\n\n");
    after.push_str("const lines = [];\n");
    after.push_str("rl.on('line', (line) => {\n    lines.push(line);\n");
    after.push_str("}).on('close', () => {\n");

    if !def.input_fields.is_empty() {
        after.push_str("    let cursor = 0;\n");
        for field in &def.input_fields {
            after.push_str(&read_snippet(field));
        }
        after.push('\n');
    }

    let args = argument_list(def);
    if let Some(output) = def.primary_output() {
        after.push_str(&format!(
            "    const result = {}({args});\n",
            def.function_name
        ));
        after.push('\n');
        after.push_str(&print_snippet(output));
    } else {
        after.push_str(&format!("    {}({args});\n", def.function_name));
    }

    after.push_str("});\n");
    HarnessTemplate { before, after }
}

fn read_snippet(field: &Field) -> String {
    let name = &field.name;
    match &field.canonical_type {
        CanonicalType::Int | CanonicalType::Long => {
            format!("    const {name} = parseInt(lines[cursor++]);\n")
        }
        CanonicalType::Float | CanonicalType::Double => {
            format!("    const {name} = parseFloat(lines[cursor++]);\n")
        }
        CanonicalType::Str => format!("    const {name} = lines[cursor++];\n"),
        CanonicalType::Bool => format!(
            "    const raw_{name} = lines[cursor++].trim();\n\
             \x20   const {name} = raw_{name} === 'true' || raw_{name} === '1';\n"
        ),
        CanonicalType::VecInt => format!(
            "    const n_{name} = parseInt(lines[cursor++]);\n\
             \x20   const {name} = lines[cursor++].split(' ').map(Number);\n"
        ),
        CanonicalType::VecStr => format!(
            "    const n_{name} = parseInt(lines[cursor++]);\n\
             \x20   const {name} = lines[cursor++].split(' ');\n"
        ),
        CanonicalType::VecVecInt => format!(
            "    const rows_{name} = parseInt(lines[cursor++]);\n\
             \x20   const {name} = [];\n\
             \x20   for (let i = 0; i < rows_{name}; i++) {{\n\
             \x20       {name}.push(lines[cursor++].split(' ').map(Number));\n\
             \x20   }}\n"
        ),
        CanonicalType::Other(_) => {
            format!("    const {name} = lines[cursor++]; // TODO: Add input parsing\n")
        }
    }
}

fn print_snippet(output: &Field) -> String {
    match output.canonical_type.shape() {
        TypeShape::Matrix => {
            "    result.forEach(row => console.log(row.join(' ')));\n".to_string()
        }
        TypeShape::Sequence => "    console.log(result.join(' '));\n".to_string(),
        TypeShape::Scalar => "    console.log(result);\n".to_string(),
        TypeShape::Opaque => {
            "    console.log(result); // TODO: Add output printing\n".to_string()
        }
    }
}
