use std::path::Path;

use boilergen::definition::parse_definition_file;
use boilergen::testgen::generate_test_stub;

pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let def = parse_definition_file(path)?;
    print!("{}", generate_test_stub(&def));
    Ok(())
}
