use std::path::Path;

use boilergen::definition::parse_definition_file;
use boilergen::emit::emit_all;

pub fn run(path: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let def = parse_definition_file(path)?;
    let manifest = emit_all(&def, output)?;

    for file in &manifest.files {
        let lang = file
            .language
            .map(|l| l.to_string())
            .unwrap_or_else(|| "java".to_string());
        println!(
            "{:<10} {:<12} {} ({} bytes)",
            file.kind.to_string(),
            lang,
            file.relative_path.display(),
            file.bytes
        );
    }
    println!("{} file(s) written to {}", manifest.files.len(), output.display());

    Ok(())
}
