//! Stub generator — minimal function/class skeletons.
//!
//! Establishes the callable signature only: a header comment, the
//! language's required preamble, and one empty-bodied declaration whose
//! parameters are the input fields in declared order. Output fields are
//! not consulted.

use crate::definition::ProblemDefinition;
use crate::typemap::{map_type, CanonicalType, Language};

/// Generate a minimal skeleton for one target language.
///
/// Pure and deterministic: identical definitions yield byte-identical
/// text for a given language.
pub fn generate_stub(def: &ProblemDefinition, language: Language) -> String {
    match language {
        Language::Cpp => cpp_stub(def),
        Language::Python => python_stub(def),
        Language::JavaScript => javascript_stub(def),
        Language::Java => java_stub(def),
    }
}

fn header(def: &ProblemDefinition, comment: &str) -> String {
    format!(
        "{comment} Problem: {}\n{comment} Function: {}\n\n",
        def.problem_name, def.function_name
    )
}

fn typed_params(def: &ProblemDefinition, language: Language) -> String {
    def.input_fields
        .iter()
        .map(|f| format!("{} {}", map_type(language, &f.canonical_type), f.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn cpp_stub(def: &ProblemDefinition) -> String {
    let mut out = header(def, "//");
    out.push_str("#include <bits/stdc++.h>\nusing namespace std;\n\n");
    out.push_str(&format!(
        "void {}({}) {{\n    // your code here\n}}\n",
        def.function_name,
        typed_params(def, Language::Cpp)
    ));
    out
}

fn python_stub(def: &ProblemDefinition) -> String {
    let mut out = header(def, "#");
    if needs_typing_import(def) {
        out.push_str("from typing import List\n\n");
    }
    let params = def
        .input_fields
        .iter()
        .map(|f| format!("{}: {}", f.name, map_type(Language::Python, &f.canonical_type)))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!(
        "def {}({params}):\n    # your code here\n    pass\n",
        def.function_name
    ));
    out
}

fn javascript_stub(def: &ProblemDefinition) -> String {
    let mut out = header(def, "//");
    if !def.input_fields.is_empty() {
        out.push_str("/**\n");
        for field in &def.input_fields {
            out.push_str(&format!(
                " * @param {{{}}} {}\n",
                map_type(Language::JavaScript, &field.canonical_type),
                field.name
            ));
        }
        out.push_str(" */\n");
    }
    let params = def
        .input_fields
        .iter()
        .map(|f| f.name.clone())
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!(
        "function {}({params}) {{\n    // your code here\n}}\n",
        def.function_name
    ));
    out
}

fn java_stub(def: &ProblemDefinition) -> String {
    let mut out = header(def, "//");
    out.push_str("public class Solution {\n");
    out.push_str(&format!(
        "    public static void {}({}) {{\n        // your code here\n    }}\n",
        def.function_name,
        typed_params(def, Language::Java)
    ));
    out.push_str("}\n");
    out
}

/// Python needs `typing.List` only when a sequence type appears in the
/// signature.
fn needs_typing_import(def: &ProblemDefinition) -> bool {
    def.input_fields.iter().any(|f| {
        matches!(
            f.canonical_type,
            CanonicalType::VecInt | CanonicalType::VecStr | CanonicalType::VecVecInt
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::parse_definition;

    fn two_sum() -> ProblemDefinition {
        parse_definition(
            "\
Problem Name: **Two Sum**
Function Name: twoSum
Input Structure:
Input Field: vector<int> nums
Input Field: int target
Output Structure:
Output Field: vector<int> result
",
        )
    }

    #[test]
    fn cpp_stub_signature() {
        let code = generate_stub(&two_sum(), Language::Cpp);
        assert!(code.contains("// Problem: Two Sum"));
        assert!(code.contains("// Function: twoSum"));
        assert!(code.contains("#include <bits/stdc++.h>"));
        assert!(code.contains("void twoSum(vector<int> nums, int target) {"));
        assert!(code.contains("// your code here"));
    }

    #[test]
    fn python_stub_typed_params() {
        let code = generate_stub(&two_sum(), Language::Python);
        assert!(code.contains("# Problem: Two Sum"));
        assert!(code.contains("from typing import List"));
        assert!(code.contains("def twoSum(nums: List[int], target: int):"));
        assert!(code.contains("pass"));
    }

    #[test]
    fn python_stub_skips_typing_import_for_scalars() {
        let def = parse_definition(
            "\
Problem Name: Add
Function Name: add
Input Structure:
Input Field: int a
Input Field: int b
",
        );
        let code = generate_stub(&def, Language::Python);
        assert!(!code.contains("from typing import List"));
        assert!(code.contains("def add(a: int, b: int):"));
    }

    #[test]
    fn javascript_stub_jsdoc_types() {
        let code = generate_stub(&two_sum(), Language::JavaScript);
        assert!(code.contains(" * @param {number[]} nums"));
        assert!(code.contains(" * @param {number} target"));
        assert!(code.contains("function twoSum(nums, target) {"));
    }

    #[test]
    fn java_stub_class_wrapper() {
        let code = generate_stub(&two_sum(), Language::Java);
        assert!(code.contains("public class Solution {"));
        assert!(code.contains("public static void twoSum(int[] nums, int target) {"));
    }

    #[test]
    fn zero_inputs_empty_parameter_list() {
        let def = parse_definition("Problem Name: P\nFunction Name: f\n");
        assert!(generate_stub(&def, Language::Cpp).contains("void f() {"));
        assert!(generate_stub(&def, Language::Python).contains("def f():"));
        let js = generate_stub(&def, Language::JavaScript);
        assert!(js.contains("function f() {"));
        assert!(!js.contains("@param"));
        assert!(generate_stub(&def, Language::Java).contains("void f() {"));
    }

    #[test]
    fn output_fields_not_consulted() {
        let mut def = two_sum();
        let baseline = generate_stub(&def, Language::Cpp);
        def.output_fields.clear();
        assert_eq!(generate_stub(&def, Language::Cpp), baseline);
    }

    #[test]
    fn stub_generation_is_deterministic() {
        let def = two_sum();
        for lang in Language::ALL {
            assert_eq!(generate_stub(&def, lang), generate_stub(&def, lang));
        }
    }
}
