//! Java harness: `Scanner` reads inside a `Solution` class; the
//! author's static method lands in the class-body slot.

use crate::definition::{Field, ProblemDefinition};
use crate::harness::{argument_list, HarnessTemplate};
use crate::typemap::{map_type, CanonicalType, Language};

pub(super) fn template(def: &ProblemDefinition) -> HarnessTemplate {
    let before = "import java.util.*;\n\npublic class Solution {\n    ".to_string();

    let mut after = String::new();
    after.push_str("\n    public static void main(String[] args) {\n");
    after.push_str("        Scanner scanner = new Scanner(System.in);\n");

    for field in &def.input_fields {
        after.push('\n');
        after.push_str(&read_snippet(field));
    }

    after.push('\n');
    let args = argument_list(def);
    if let Some(output) = def.primary_output() {
        let ret = map_type(Language::Java, &output.canonical_type);
        after.push_str(&format!(
            "        {ret} result = {}({args});\n",
            def.function_name
        ));
        after.push('\n');
        after.push_str(&print_snippet(output));
    } else {
        after.push_str(&format!("        {}({args});\n", def.function_name));
    }

    after.push_str("\n        scanner.close();\n    }\n}\n");
    HarnessTemplate { before, after }
}

fn read_snippet(field: &Field) -> String {
    let name = &field.name;
    match &field.canonical_type {
        CanonicalType::Int => format!("        int {name} = scanner.nextInt();\n"),
        CanonicalType::Long => format!("        long {name} = scanner.nextLong();\n"),
        CanonicalType::Float => format!("        float {name} = scanner.nextFloat();\n"),
        CanonicalType::Double => format!("        double {name} = scanner.nextDouble();\n"),
        CanonicalType::Str => format!("        String {name} = scanner.next();\n"),
        CanonicalType::Bool => format!("        boolean {name} = scanner.nextBoolean();\n"),
        CanonicalType::VecInt => format!(
            "        int n_{name} = scanner.nextInt();\n\
             \x20       int[] {name} = new int[n_{name}];\n\
             \x20       for(int i = 0; i < n_{name}; i++) {name}[i] = scanner.nextInt();\n"
        ),
        CanonicalType::VecStr => format!(
            "        int n_{name} = scanner.nextInt();\n\
             \x20       String[] {name} = new String[n_{name}];\n\
             \x20       for(int i = 0; i < n_{name}; i++) {name}[i] = scanner.next();\n"
        ),
        CanonicalType::VecVecInt => format!(
            "        int rows_{name} = scanner.nextInt();\n\
             \x20       int cols_{name} = scanner.nextInt();\n\
             \x20       int[][] {name} = new int[rows_{name}][cols_{name}];\n\
             \x20       for(int i = 0; i < rows_{name}; i++)\n\
             \x20           for(int j = 0; j < cols_{name}; j++)\n\
             \x20               {name}[i][j] = scanner.nextInt();\n"
        ),
        CanonicalType::Other(label) if label.is_empty() => {
            format!("        // TODO: Add input reading for {name}\n")
        }
        CanonicalType::Other(label) => {
            format!("        {label} {name} = null; // TODO: Add input reading\n")
        }
    }
}

fn print_snippet(output: &Field) -> String {
    match &output.canonical_type {
        CanonicalType::VecInt => "        for(int x : result) System.out.print(x + \" \");\n\
             \x20       System.out.println();\n"
            .to_string(),
        CanonicalType::VecStr => {
            "        for(String x : result) System.out.print(x + \" \");\n\
             \x20       System.out.println();\n"
                .to_string()
        }
        CanonicalType::VecVecInt => "        for(int[] row : result) {\n\
             \x20           for(int x : row) System.out.print(x + \" \");\n\
             \x20           System.out.println();\n\
             \x20       }\n"
            .to_string(),
        CanonicalType::Other(_) => {
            "        System.out.println(result); // TODO: Add output printing\n".to_string()
        }
        _ => "        System.out.println(result);\n".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::parse_definition;
    use crate::harness::generate_harness;

    #[test]
    fn two_sum_harness() {
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
        let code = generate_harness(&def, Language::Java);
        assert!(code.contains("import java.util.*;"));
        assert!(code.contains("public class Solution {"));
        assert!(code.contains("Scanner scanner = new Scanner(System.in);"));
        assert!(code.contains("int n_nums = scanner.nextInt();"));
        assert!(code.contains("int[] nums = new int[n_nums];"));
        assert!(code.contains("int target = scanner.nextInt();"));
        assert!(code.contains("int[] result = twoSum(nums, target);"));
        assert!(code.contains("for(int x : result) System.out.print(x + \" \");"));
        assert!(code.contains("scanner.close();"));
    }

    #[test]
    fn matrix_reads_rows_and_cols() {
        let def = parse_definition(
            "\
Function Name: transpose
Input Structure:
Input Field: vector<vector<int>> grid
Output Structure:
Output Field: vector<vector<int>> result
",
        );
        let code = generate_harness(&def, Language::Java);
        assert!(code.contains("int rows_grid = scanner.nextInt();"));
        assert!(code.contains("int cols_grid = scanner.nextInt();"));
        assert!(code.contains("int[][] grid = new int[rows_grid][cols_grid];"));
        assert!(code.contains("int[][] result = transpose(grid);"));
        assert!(code.contains("for(int[] row : result) {"));
    }

    #[test]
    fn string_sequence_print() {
        let def = parse_definition(
            "\
Function Name: split
Input Structure:
Input Field: string text
Output Structure:
Output Field: vector<string> result
",
        );
        let code = generate_harness(&def, Language::Java);
        assert!(code.contains("String text = scanner.next();"));
        assert!(code.contains("String[] result = split(text);"));
        assert!(code.contains("for(String x : result) System.out.print(x + \" \");"));
    }

    #[test]
    fn unknown_type_placeholders() {
        let def = parse_definition(
            "\
Function Name: f
Input Structure:
Input Field: Pair<int,int> p
Output Structure:
Output Field: Pair<int,int> result
",
        );
        let code = generate_harness(&def, Language::Java);
        assert!(code.contains("Pair<int,int> p = null; // TODO: Add input reading"));
        assert!(code.contains("System.out.println(result); // TODO: Add output printing"));
    }

    #[test]
    fn zero_outputs_uncaptured_call() {
        let def = parse_definition(
            "\
Function Name: log
Input Structure:
Input Field: string line
",
        );
        let code = generate_harness(&def, Language::Java);
        assert!(code.contains("        log(line);"));
        assert!(!code.contains(" result"));
    }
}
