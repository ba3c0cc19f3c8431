//! Test-stub generator — Java smoke-test scaffold.
//!
//! A structural template, not a correctness oracle: default-valued
//! arguments, two identical calls, equality assertion. Exists to
//! exercise the same type tables as the other generators.

use crate::definition::ProblemDefinition;
use crate::typemap::{java_default_value, map_type, Language};

/// Generate a JUnit smoke-test scaffold for the definition's function.
pub fn generate_test_stub(def: &ProblemDefinition) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "// Problem: {}\n// Function: {}\n\n",
        def.problem_name, def.function_name
    ));
    out.push_str("import org.junit.Test;\nimport static org.junit.Assert.assertEquals;\n\n");
    out.push_str(&format!("public class {}Test {{\n", def.function_name));
    out.push_str("    @Test\n    public void test() {\n");

    for field in &def.input_fields {
        out.push_str(&format!(
            "        {} {} = {};\n",
            map_type(Language::Java, &field.canonical_type),
            field.name,
            java_default_value(&field.canonical_type)
        ));
    }

    let args = def
        .input_fields
        .iter()
        .map(|f| f.name.clone())
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!(
        "        assertEquals({fn}({args}), {fn}({args}));\n",
        fn = def.function_name
    ));
    out.push_str("    }\n}\n");
    out
}
