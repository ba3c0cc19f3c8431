use std::path::Path;

use boilergen::definition::parse_definition_file;

pub fn run(path: &Path, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let def = parse_definition_file(path)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&def)?);
        }
        "text" => {
            println!("Problem:  {}", def.problem_name);
            println!("Function: {}", def.function_name);
            println!("Inputs:");
            for field in &def.input_fields {
                println!("  {} {}", field.canonical_type, field.name);
            }
            println!("Outputs:");
            for field in &def.output_fields {
                println!("  {} {}", field.canonical_type, field.name);
            }
        }
        other => return Err(format!("unknown format: {other} (expected text or json)").into()),
    }

    Ok(())
}
