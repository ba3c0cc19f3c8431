pub mod generate;
pub mod harness;
pub mod lint;
pub mod show;
pub mod stub;
pub mod test_stub;

use boilergen::error::GeneratorError;
use boilergen::typemap::Language;

/// Resolve a `--lang` argument, surfacing unknown names as errors.
pub(crate) fn resolve_language(name: &str) -> Result<Language, GeneratorError> {
    Language::from_name(name).ok_or_else(|| GeneratorError::UnknownLanguage(name.to_string()))
}
