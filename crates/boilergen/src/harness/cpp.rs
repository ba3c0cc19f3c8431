//! C++ harness: token-stream `cin` reads inside a `main` with
//! fast-I/O setup.

use crate::definition::{Field, ProblemDefinition};
use crate::harness::{argument_list, HarnessTemplate};
use crate::typemap::{map_type, CanonicalType, Language, TypeShape};

pub(super) fn template(def: &ProblemDefinition) -> HarnessTemplate {
    let before = "#include <bits/stdc++.h>\nusing namespace std;\n\n".to_string();

    let mut after = String::new();
    after.push_str("\nint main() {\n");
    after.push_str("    ios_base::sync_with_stdio(false);\n    cin.tie(NULL);\n");

    for field in &def.input_fields {
        after.push('\n');
        after.push_str(&read_snippet(field));
    }

    after.push('\n');
    let args = argument_list(def);
    if let Some(output) = def.primary_output() {
        let ret = map_type(Language::Cpp, &output.canonical_type);
        after.push_str(&format!(
            "    {ret} result = {}({args});\n",
            def.function_name
        ));
        after.push('\n');
        after.push_str(&print_snippet(output));
    } else {
        after.push_str(&format!("    {}({args});\n", def.function_name));
    }

    after.push_str("\n    return 0;\n}\n");
    HarnessTemplate { before, after }
}

fn read_snippet(field: &Field) -> String {
    let name = &field.name;
    match &field.canonical_type {
        ty @ (CanonicalType::Int
        | CanonicalType::Long
        | CanonicalType::Float
        | CanonicalType::Double
        | CanonicalType::Str
        | CanonicalType::Bool) => {
            let cpp = map_type(Language::Cpp, ty);
            format!("    {cpp} {name};\n    cin >> {name};\n")
        }
        CanonicalType::VecInt => sequence_read(name, "int"),
        CanonicalType::VecStr => sequence_read(name, "string"),
        CanonicalType::VecVecInt => format!(
            "    int rows_{name}, cols_{name};\n\
             \x20   cin >> rows_{name} >> cols_{name};\n\
             \x20   vector<vector<int>> {name}(rows_{name}, vector<int>(cols_{name}));\n\
             \x20   for(int i = 0; i < rows_{name}; i++)\n\
             \x20       for(int j = 0; j < cols_{name}; j++)\n\
             \x20           cin >> {name}[i][j];\n"
        ),
        CanonicalType::Other(label) if label.is_empty() => {
            format!("    // TODO: Add input reading for {name}\n")
        }
        CanonicalType::Other(label) => {
            format!("    {label} {name}; // TODO: Add input reading\n")
        }
    }
}

fn sequence_read(name: &str, element: &str) -> String {
    format!(
        "    int n_{name};\n\
         \x20   cin >> n_{name};\n\
         \x20   vector<{element}> {name}(n_{name});\n\
         \x20   for(int i = 0; i < n_{name}; i++) cin >> {name}[i];\n"
    )
}

fn print_snippet(output: &Field) -> String {
    match output.canonical_type.shape() {
        TypeShape::Sequence => {
            "    for(auto x : result) cout << x << \" \";\n    cout << endl;\n".to_string()
        }
        TypeShape::Matrix => "    for(auto row : result) {\n\
             \x20       for(auto x : row) cout << x << \" \";\n\
             \x20       cout << endl;\n\
             \x20   }\n"
            .to_string(),
        TypeShape::Scalar => "    cout << result << endl;\n".to_string(),
        TypeShape::Opaque => {
            "    cout << result << endl; // TODO: Add output printing\n".to_string()
        }
    }
}
