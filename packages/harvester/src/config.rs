//! Configuration constants and validation functions for the harvester.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{HarvesterError, Result};

/// Marker word that opens an Axis/Area header (e.g. "Area 1A. Processes").
pub const DEFAULT_AREA_MARKER: &str = "Area";

/// Marker word that opens a Level header (e.g. "Level 2. Advanced").
pub const DEFAULT_LEVEL_MARKER: &str = "Level";

/// File extension of extracted document text combined into one corpus.
pub const DEFAULT_CORPUS_EXTENSION: &str = "txt";

/// Canonical display names for the DRD axes.
///
/// Axis names sit elsewhere in the source documents, interleaved with
/// unrelated text, so they cannot be recovered from the header grammar.
pub const DEFAULT_AXIS_NAMES: [(u32, &str); 7] = [
    (1, "Digital Processes"),
    (2, "Digital Products"),
    (3, "Digital Business Models"),
    (4, "Data Management"),
    (5, "Digital Culture"),
    (6, "Cybersecurity"),
    (7, "Artificial Intelligence"),
];

/// Language codes carried by translation leaf nodes, in output order.
pub const SUPPORTED_LANGUAGES: [&str; 5] = ["EN", "PL", "DE", "AR", "JA"];

/// Keys that must all be present for an object to count as a translation leaf.
pub const LEAF_PROBE_LANGUAGES: [&str; 2] = ["EN", "PL"];

/// File written per language directory by the locale splitter.
pub const LOCALE_FILE_NAME: &str = "translation.json";

/// Maximum length of a header excerpt quoted in a warning.
pub const WARNING_EXCERPT_CHARS: usize = 60;

/// Marker pattern: non-empty, single line, no surrounding whitespace.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S(?:[^\r\n]*\S)?$").expect("valid regex"));

/// Validate a header marker word.
///
/// # Examples
/// ```
/// use drd_harvester::config::validate_marker;
///
/// assert!(validate_marker("Area").is_ok());
/// assert!(validate_marker("Obszar").is_ok());
/// assert!(validate_marker("").is_err());
/// assert!(validate_marker("Area\nLevel").is_err());
/// ```
pub fn validate_marker(marker: &str) -> Result<()> {
    if MARKER_PATTERN.is_match(marker) {
        Ok(())
    } else {
        Err(HarvesterError::InvalidMarker(marker.to_string()))
    }
}

/// Validate a language code and return its canonical upper-case form.
///
/// # Examples
/// ```
/// use drd_harvester::config::validate_language;
///
/// assert_eq!(validate_language("pl").unwrap(), "PL");
/// assert!(validate_language("FR").is_err());
/// ```
pub fn validate_language(code: &str) -> Result<&'static str> {
    let upper = code.trim().to_uppercase();
    SUPPORTED_LANGUAGES
        .iter()
        .find(|lang| **lang == upper)
        .copied()
        .ok_or_else(|| HarvesterError::InvalidLanguage(code.to_string()))
}

/// Directory name used for a language's locale file (e.g. "EN" -> "en").
pub fn locale_dir_name(code: &str) -> String {
    code.to_lowercase()
}

/// Placeholder name for an axis without a canonical display name.
///
/// # Examples
/// ```
/// use drd_harvester::config::axis_placeholder_name;
///
/// assert_eq!(axis_placeholder_name(8), "Axis 8");
/// ```
pub fn axis_placeholder_name(id: u32) -> String {
    format!("Axis {id}")
}

/// Line framing the start of a document inside a combined corpus.
pub fn file_start_marker(file_name: &str) -> String {
    format!("--- START OF FILE: {file_name} ---")
}

/// Line framing the end of a document inside a combined corpus.
pub fn file_end_marker(file_name: &str) -> String {
    format!("--- END OF FILE: {file_name} ---")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_marker_valid() {
        assert!(validate_marker("Area").is_ok());
        assert!(validate_marker("Poziom").is_ok());
        assert!(validate_marker("Reifegrad Stufe").is_ok());
    }

    #[test]
    fn test_validate_marker_invalid() {
        assert!(validate_marker("").is_err());
        assert!(validate_marker(" Area").is_err());
        assert!(validate_marker("Area ").is_err());
        assert!(validate_marker("Area\r\nLevel").is_err());
    }

    #[test]
    fn test_validate_language() {
        assert_eq!(validate_language("EN").unwrap(), "EN");
        assert_eq!(validate_language(" ja ").unwrap(), "JA");
        assert!(matches!(
            validate_language("xx"),
            Err(HarvesterError::InvalidLanguage(_))
        ));
    }

    #[test]
    fn test_locale_dir_name() {
        assert_eq!(locale_dir_name("AR"), "ar");
    }

    #[test]
    fn test_default_axis_names_unique_ids() {
        let mut ids: Vec<u32> = DEFAULT_AXIS_NAMES.iter().map(|(id, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DEFAULT_AXIS_NAMES.len());
    }

    #[test]
    fn test_file_markers() {
        assert_eq!(
            file_start_marker("drd_axis_1.pdf"),
            "--- START OF FILE: drd_axis_1.pdf ---"
        );
        assert_eq!(
            file_end_marker("drd_axis_1.pdf"),
            "--- END OF FILE: drd_axis_1.pdf ---"
        );
    }
}
