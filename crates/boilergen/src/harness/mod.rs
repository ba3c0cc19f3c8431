//! Full-harness generator — complete standalone programs.
//!
//! For each target language: synthesized stdin reads per input field,
//! a call to the author's (not yet written) solution function, and
//! output formatting for the captured result, wrapped in the language's
//! program-entry idiom. The author's code lands in an explicit slot
//! rather than being spliced by string search.

mod cpp;
mod java;
mod javascript;
mod python;

use crate::definition::ProblemDefinition;
use crate::typemap::Language;

/// The literal marker a downstream substitution step replaces with the
/// author's solution code. Appears exactly once per harness artifact.
pub const SOLUTION_MARKER: &str = "**Your Code Goes Here**";

/// A harness with a typed solution slot between `before` and `after`.
///
/// The slot is structural: rendering with the marker and splicing real
/// code are both explicit operations, so the marker text never has to
/// be searched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessTemplate {
    pub before: String,
    pub after: String,
}

impl HarnessTemplate {
    /// Render with the literal [`SOLUTION_MARKER`] in the slot.
    pub fn with_marker(&self) -> String {
        format!("{}{SOLUTION_MARKER}\n{}", self.before, self.after)
    }

    /// Render with `solution` spliced into the slot.
    pub fn fill(&self, solution: &str) -> String {
        format!("{}{}\n{}", self.before, solution.trim_end(), self.after)
    }
}

/// Build the harness template for one target language.
pub fn template(def: &ProblemDefinition, language: Language) -> HarnessTemplate {
    match language {
        Language::Cpp => cpp::template(def),
        Language::Python => python::template(def),
        Language::JavaScript => javascript::template(def),
        Language::Java => java::template(def),
    }
}

/// Generate the full harness text with the solution marker in place.
///
/// Deterministic: consults nothing outside the definition and language.
pub fn generate_harness(def: &ProblemDefinition, language: Language) -> String {
    template(def, language).with_marker()
}

/// Comma-joined input field identifiers in declared order, shared by
/// every language's call site.
fn argument_list(def: &ProblemDefinition) -> String {
    def.input_fields
        .iter()
        .map(|f| f.name.clone())
        .collect::<Vec<_>>()
        .join(", ")
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
    fn marker_appears_exactly_once_per_language() {
        let def = two_sum();
        for lang in Language::ALL {
            let code = generate_harness(&def, lang);
            assert_eq!(code.matches(SOLUTION_MARKER).count(), 1, "{lang}");
        }
    }

    #[test]
    fn fill_replaces_slot_without_marker() {
        let def = two_sum();
        let t = template(&def, Language::Python);
        let filled = t.fill("def twoSum(nums, target):\n    return []");
        assert!(!filled.contains(SOLUTION_MARKER));
        assert!(filled.contains("def twoSum(nums, target):"));
        assert!(filled.contains("result = twoSum(nums, target)"));
    }

    #[test]
    fn fill_and_marker_share_surroundings() {
        let def = two_sum();
        let t = template(&def, Language::Cpp);
        let marked = t.with_marker();
        let filled = t.fill("int x;");
        assert_eq!(
            marked.replace(SOLUTION_MARKER, "int x;"),
            filled,
        );
    }

    #[test]
    fn argument_order_is_declaration_order() {
        let def = two_sum();
        for lang in Language::ALL {
            let code = generate_harness(&def, lang);
            assert!(code.contains("twoSum(nums, target)"), "{lang}");
        }
    }

    #[test]
    fn harness_generation_is_deterministic() {
        let def = two_sum();
        for lang in Language::ALL {
            assert_eq!(generate_harness(&def, lang), generate_harness(&def, lang));
        }
    }
}
