//! Error types for the harvester.
//!
//! Grammar failures are fatal and surface unchanged to the caller. A buffer
//! without headers is not an error and never reaches this type.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvesterError {
    /// Header grammar failed to compile.
    #[error("Invalid header grammar: {0}")]
    InvalidGrammar(#[from] regex::Error),

    /// Header grammar compiled but lacks a named group the segmenter needs.
    #[error("Header grammar '{pattern}' has no capture group named '{group}'")]
    MissingCaptureGroup { pattern: String, group: String },

    /// A captured number does not fit the data model.
    #[error("Invalid {field} number '{value}' in header '{header}'")]
    InvalidHeaderNumber {
        field: &'static str,
        value: String,
        header: String,
    },

    /// Header marker word is empty or spans lines.
    #[error("Invalid header marker: '{0}'. Expected a non-empty single-line word (e.g., Area)")]
    InvalidMarker(String),

    /// Unsupported translation language code.
    #[error("Unsupported language code: '{0}'. Expected one of EN, PL, DE, AR, JA")]
    InvalidLanguage(String),

    /// Translation file does not have the expected shape.
    #[error("Invalid translation tree: {0}")]
    InvalidTranslationTree(String),

    /// Corpus path is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML (de)serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvesterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HarvesterError::InvalidMarker(String::new());
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn test_missing_capture_group_display() {
        let err = HarvesterError::MissingCaptureGroup {
            pattern: "Area (.*)".to_string(),
            group: "axis".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Header grammar 'Area (.*)' has no capture group named 'axis'"
        );
    }

    #[test]
    fn test_not_a_directory_display() {
        let err = HarvesterError::NotADirectory(PathBuf::from("knowledge/a.txt"));
        assert_eq!(err.to_string(), "Not a directory: knowledge/a.txt");
    }

    #[test]
    fn test_regex_error_converts() {
        let regex_err = regex::Regex::new("Area (").unwrap_err();
        let err: HarvesterError = regex_err.into();
        assert!(matches!(err, HarvesterError::InvalidGrammar(_)));
    }
}
