//! End-to-end codegen — writes every artifact for a definition to disk.
//!
//! The generators themselves never touch storage; this module is the
//! one place file output happens, and it returns a manifest of what
//! was written.

use std::path::{Path, PathBuf};

use crate::definition::ProblemDefinition;
use crate::error::GeneratorError;
use crate::harness::generate_harness;
use crate::stub::generate_stub;
use crate::testgen::generate_test_stub;
use crate::typemap::Language;

/// Manifest of emitted files.
#[derive(Debug, Clone)]
pub struct EmittedFiles {
    pub files: Vec<EmittedFile>,
}

/// A single emitted file.
#[derive(Debug, Clone)]
pub struct EmittedFile {
    /// Path relative to the output directory.
    pub relative_path: PathBuf,
    /// Absolute path where the file was written.
    pub absolute_path: PathBuf,
    /// What kind of artifact this is.
    pub kind: ArtifactKind,
    /// Target language, `None` only for artifacts with a single fixed
    /// target.
    pub language: Option<Language>,
    /// Number of bytes written.
    pub bytes: usize,
}

/// The kind of emitted artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Stub,
    Harness,
    TestStub,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stub => write!(f, "stub"),
            Self::Harness => write!(f, "harness"),
            Self::TestStub => write!(f, "test-stub"),
        }
    }
}

/// Generate and write every artifact for `def` under `output_dir`.
///
/// Layout matches the judge's asset convention: `boilerplate/` holds
/// the per-language stubs, `boilerplate_full/` the harnesses, and
/// `tests/` the Java smoke-test scaffold.
///
/// # Errors
///
/// Returns [`GeneratorError::Io`] if directory creation or a file
/// write fails.
pub fn emit_all(
    def: &ProblemDefinition,
    output_dir: &Path,
) -> Result<EmittedFiles, GeneratorError> {
    let mut files = Vec::new();

    for language in Language::ALL {
        let rel = PathBuf::from("boilerplate")
            .join(format!("function.{}", language.file_extension()));
        files.push(write_artifact(
            output_dir,
            rel,
            &generate_stub(def, language),
            ArtifactKind::Stub,
            Some(language),
        )?);

        let rel = PathBuf::from("boilerplate_full")
            .join(format!("function.{}", language.file_extension()));
        files.push(write_artifact(
            output_dir,
            rel,
            &generate_harness(def, language),
            ArtifactKind::Harness,
            Some(language),
        )?);
    }

    let rel = PathBuf::from("tests").join(format!("{}Test.java", def.function_name));
    files.push(write_artifact(
        output_dir,
        rel,
        &generate_test_stub(def),
        ArtifactKind::TestStub,
        None,
    )?);

    Ok(EmittedFiles { files })
}

fn write_artifact(
    output_dir: &Path,
    relative_path: PathBuf,
    content: &str,
    kind: ArtifactKind,
    language: Option<Language>,
) -> Result<EmittedFile, GeneratorError> {
    let absolute_path = output_dir.join(&relative_path);
    if let Some(parent) = absolute_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&absolute_path, content)?;
    Ok(EmittedFile {
        relative_path,
        absolute_path,
        kind,
        language,
        bytes: content.len(),
    })
}
