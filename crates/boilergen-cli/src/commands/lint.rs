use std::path::Path;

use boilergen::definition::{lint_definition, parse_definition_file};

pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let def = parse_definition_file(path)?;
    let violations = lint_definition(&def);

    if violations.is_empty() {
        println!("ok: no findings");
    } else {
        for v in &violations {
            println!("{v}");
        }
        println!("{} finding(s)", violations.len());
    }

    Ok(())
}
