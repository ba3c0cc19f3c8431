use std::path::Path;

use boilergen::definition::parse_definition_file;
use boilergen::harness::generate_harness;

use crate::commands::resolve_language;

pub fn run(path: &Path, lang: &str) -> Result<(), Box<dyn std::error::Error>> {
    let language = resolve_language(lang)?;
    let def = parse_definition_file(path)?;
    print!("{}", generate_harness(&def, language));
    Ok(())
}
