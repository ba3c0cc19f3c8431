//! Canonical type vocabulary and per-language type tables.
//!
//! The definition language names types with a fixed, language-agnostic
//! vocabulary (`int`, `string`, `vector<int>`, ...). Every generator maps
//! a canonical type to target-language syntax through the tables here.
//! A label outside the vocabulary is carried verbatim: lookup misses
//! identity-map so an exotic type never blocks generation.

use serde::{Deserialize, Serialize};

/// A canonical type label from the definition language.
///
/// The fixed vocabulary gets typed variants; anything else is preserved
/// as [`CanonicalType::Other`] and round-trips through [`Display`]
/// unchanged.
///
/// [`Display`]: std::fmt::Display
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CanonicalType {
    Int,
    Long,
    Float,
    Double,
    Str,
    Bool,
    VecInt,
    VecStr,
    VecVecInt,
    Other(String),
}

impl CanonicalType {
    /// Classify a raw label. Never fails; unknown labels become `Other`.
    pub fn parse(label: &str) -> Self {
        match label {
            "int" => Self::Int,
            "long" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            "string" => Self::Str,
            "bool" => Self::Bool,
            "vector<int>" => Self::VecInt,
            "vector<string>" => Self::VecStr,
            "vector<vector<int>>" => Self::VecVecInt,
            other => Self::Other(other.to_string()),
        }
    }

    /// The canonical label, exactly as it appears in a definition.
    pub fn label(&self) -> &str {
        match self {
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Str => "string",
            Self::Bool => "bool",
            Self::VecInt => "vector<int>",
            Self::VecStr => "vector<string>",
            Self::VecVecInt => "vector<vector<int>>",
            Self::Other(s) => s,
        }
    }

    /// Structural shape driving read/print snippet dispatch.
    pub fn shape(&self) -> TypeShape {
        match self {
            Self::Int | Self::Long | Self::Float | Self::Double | Self::Str | Self::Bool => {
                TypeShape::Scalar
            }
            Self::VecInt | Self::VecStr => TypeShape::Sequence,
            Self::VecVecInt => TypeShape::Matrix,
            Self::Other(_) => TypeShape::Opaque,
        }
    }
}

impl std::fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<String> for CanonicalType {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<CanonicalType> for String {
    fn from(ty: CanonicalType) -> Self {
        ty.label().to_string()
    }
}

/// How a canonical type reads from and prints to the judge's I/O stream.
///
/// One classification shared by every harness path, so type detection
/// lives in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape {
    /// One token or line: read directly, print directly.
    Scalar,
    /// Count then that many tokens; printed space-joined on one line.
    Sequence,
    /// Dimensions then rows of tokens; printed one row per line.
    Matrix,
    /// Outside the vocabulary: placeholder I/O marked for manual completion.
    Opaque,
}

/// A target language for generated artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cpp,
    Python,
    JavaScript,
    Java,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Cpp,
        Language::Python,
        Language::JavaScript,
        Language::Java,
    ];

    /// Resolve a CLI-facing name, accepting common aliases.
    pub fn from_name(name: &str) -> Option<Language> {
        match name.to_ascii_lowercase().as_str() {
            "cpp" | "c++" | "cxx" => Some(Language::Cpp),
            "python" | "py" => Some(Language::Python),
            "javascript" | "js" | "node" => Some(Language::JavaScript),
            "java" => Some(Language::Java),
            _ => None,
        }
    }

    /// Source-file extension for emitted artifacts.
    pub fn file_extension(self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Python => "py",
            Language::JavaScript => "js",
            Language::Java => "java",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Language::Cpp => "cpp",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Java => "java",
        };
        write!(f, "{s}")
    }
}

/// Map a canonical type to the target language's literal type syntax.
///
/// Vocabulary misses return the canonical label unchanged. The verbatim
/// text may not compile in the target language; that trade-off favors
/// generator availability over generated-code correctness.
pub fn map_type(language: Language, ty: &CanonicalType) -> String {
    let mapped = match language {
        Language::Cpp => cpp_type(ty),
        Language::Python => python_type(ty),
        Language::JavaScript => javascript_type(ty),
        Language::Java => java_type(ty),
    };
    mapped.to_string()
}

fn cpp_type(ty: &CanonicalType) -> &str {
    // The canonical vocabulary is C++ syntax already.
    ty.label()
}

fn python_type(ty: &CanonicalType) -> &str {
    match ty {
        CanonicalType::Int | CanonicalType::Long => "int",
        CanonicalType::Float | CanonicalType::Double => "float",
        CanonicalType::Str => "str",
        CanonicalType::Bool => "bool",
        CanonicalType::VecInt => "List[int]",
        CanonicalType::VecStr => "List[str]",
        CanonicalType::VecVecInt => "List[List[int]]",
        CanonicalType::Other(s) => s,
    }
}

fn javascript_type(ty: &CanonicalType) -> &str {
    match ty {
        CanonicalType::Int
        | CanonicalType::Long
        | CanonicalType::Float
        | CanonicalType::Double => "number",
        CanonicalType::Str => "string",
        CanonicalType::Bool => "boolean",
        CanonicalType::VecInt => "number[]",
        CanonicalType::VecStr => "string[]",
        CanonicalType::VecVecInt => "number[][]",
        CanonicalType::Other(s) => s,
    }
}

fn java_type(ty: &CanonicalType) -> &str {
    match ty {
        CanonicalType::Int => "int",
        CanonicalType::Long => "long",
        CanonicalType::Float => "float",
        CanonicalType::Double => "double",
        CanonicalType::Str => "String",
        CanonicalType::Bool => "boolean",
        CanonicalType::VecInt => "int[]",
        CanonicalType::VecStr => "String[]",
        CanonicalType::VecVecInt => "int[][]",
        CanonicalType::Other(s) => s,
    }
}

/// Default-value literal for a mapped Java type, used by the Java
/// test scaffold to build placeholder arguments.
pub(crate) fn java_default_value(ty: &CanonicalType) -> &str {
    match ty {
        CanonicalType::Int | CanonicalType::Long => "0",
        CanonicalType::Float => "0.0f",
        CanonicalType::Double => "0.0",
        CanonicalType::Str => "\"\"",
        CanonicalType::Bool => "false",
        CanonicalType::VecInt => "new int[0]",
        CanonicalType::VecStr => "new String[0]",
        CanonicalType::VecVecInt => "new int[0][0]",
        CanonicalType::Other(_) => "null",
    }
}
