use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Failed to read definition file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown target language: {0}")]
    UnknownLanguage(String),
}

/// An advisory finding from the definition lint pass.
///
/// Lints never block generation; the generators always return text.
#[derive(Debug, Clone)]
pub struct Violation {
    pub severity: Severity,
    pub rule: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Info,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Warning => "WARN",
            Severity::Info => "INFO",
        };
        write!(f, "[{prefix}] {}: {}", self.rule, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_display_warning() {
        let v = Violation {
            severity: Severity::Warning,
            rule: "DEF-002".to_string(),
            message: "missing function name".to_string(),
        };
        let s = v.to_string();
        assert!(s.contains("[WARN]"));
        assert!(s.contains("DEF-002"));
        assert!(s.contains("missing function name"));
    }

    #[test]
    fn violation_display_info() {
        let v = Violation {
            severity: Severity::Info,
            rule: "DEF-005".to_string(),
            message: "informational".to_string(),
        };
        assert!(v.to_string().contains("[INFO]"));
    }

    #[test]
    fn generator_error_io() {
        let err = GeneratorError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "not found",
        ));
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn generator_error_unknown_language() {
        let err = GeneratorError::UnknownLanguage("cobol".to_string());
        assert!(err.to_string().contains("cobol"));
    }
}
