//! Header grammars: patterns that recognize where a span begins.

use regex::Regex;

use super::types::HeaderMatch;
use crate::error::{HarvesterError, Result};

/// Capture groups an Area grammar must define.
pub const AREA_GROUPS: [&str; 3] = ["axis", "area", "name"];

/// Capture groups a Level grammar must define.
pub const LEVEL_GROUPS: [&str; 2] = ["level", "title"];

/// A compiled header pattern with named capture groups.
#[derive(Debug, Clone)]
pub struct HeaderGrammar {
    regex: Regex,
}

impl HeaderGrammar {
    /// Compile a grammar and check that it defines every required group.
    pub fn new(pattern: &str, required_groups: &[&str]) -> Result<Self> {
        let regex = Regex::new(pattern)?;

        for group in required_groups {
            if !regex.capture_names().flatten().any(|name| name == *group) {
                return Err(HarvesterError::MissingCaptureGroup {
                    pattern: pattern.to_string(),
                    group: (*group).to_string(),
                });
            }
        }

        Ok(Self { regex })
    }

    /// Outer grammar: `<marker> <digit><LETTER>. <name>`.
    ///
    /// Axis digits and area letters are ASCII only; anything else is left
    /// to the near-miss scan.
    pub fn area(marker: &str) -> Result<Self> {
        let pattern = format!(
            r"{} (?P<axis>[0-9])(?P<area>[A-Z])\.\s*(?P<name>.*)",
            regex::escape(marker)
        );
        Self::new(&pattern, &AREA_GROUPS)
    }

    /// Inner grammar: `<marker> <number>. <title>`.
    pub fn level(marker: &str) -> Result<Self> {
        let pattern = format!(
            r"{}\s*(?P<level>[0-9]+)\s*\.\s*(?P<title>.*)",
            regex::escape(marker)
        );
        Self::new(&pattern, &LEVEL_GROUPS)
    }

    /// Pattern source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Locate every header in `text`, in document order.
    ///
    /// Matches never overlap; with no headers the iterator is empty. The
    /// matches borrow only `text`, so they may outlive the grammar.
    pub fn locate<'r, 't>(&'r self, text: &'t str) -> impl Iterator<Item = HeaderMatch<'t>> + 'r
    where
        't: 'r,
    {
        self.regex.captures_iter(text).map(HeaderMatch::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_grammar_captures() {
        let grammar = HeaderGrammar::area("Area").unwrap();
        let text = "Area 1A. Processes\nbody";
        let headers: Vec<_> = grammar.locate(text).collect();

        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].group("axis"), Some("1"));
        assert_eq!(headers[0].group("area"), Some("A"));
        assert_eq!(headers[0].group("name"), Some("Processes"));
        assert_eq!(headers[0].end(), "Area 1A. Processes".len());
    }

    #[test]
    fn test_area_grammar_name_on_next_line() {
        // The whitespace after the period may cross a line break
        let grammar = HeaderGrammar::area("Area").unwrap();
        let headers: Vec<_> = grammar.locate("Area 2B.\nProducts\nbody").collect();
        assert_eq!(headers[0].group("name"), Some("Products"));
    }

    #[test]
    fn test_area_grammar_rejects_lowercase_and_non_ascii() {
        let grammar = HeaderGrammar::area("Area").unwrap();
        assert_eq!(grammar.locate("area 1A. x").count(), 0);
        assert_eq!(grammar.locate("Area 1a. x").count(), 0);
        assert_eq!(grammar.locate("Area \u{661}A. x").count(), 0);
    }

    #[test]
    fn test_level_grammar_loose_spacing() {
        let grammar = HeaderGrammar::level("Level").unwrap();
        let headers: Vec<_> = grammar.locate("Level1.Basic\nLevel 12 . Expert").collect();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].group("level"), Some("1"));
        assert_eq!(headers[0].group("title"), Some("Basic"));
        assert_eq!(headers[1].group("level"), Some("12"));
        assert_eq!(headers[1].group("title"), Some("Expert"));
    }

    #[test]
    fn test_locate_document_order() {
        let grammar = HeaderGrammar::level("Level").unwrap();
        let text = "Level 2. b\nLevel 1. a\nLevel 3. c";
        let starts: Vec<usize> = grammar.locate(text).map(|h| h.start()).collect();
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(starts.len(), 3);
    }

    #[test]
    fn test_located_headers_outlive_grammar() {
        let text = String::from("Level 1. a\nLevel 2. b");
        let headers: Vec<HeaderMatch<'_>> = {
            let grammar = HeaderGrammar::level("Level").unwrap();
            grammar.locate(&text).collect()
        };

        assert_eq!(headers.len(), 2);
        assert_eq!(headers[1].group("title"), Some("b"));
    }

    #[test]
    fn test_locate_no_headers() {
        let grammar = HeaderGrammar::area("Area").unwrap();
        assert_eq!(grammar.locate("").count(), 0);
        assert_eq!(grammar.locate("nothing to see").count(), 0);
    }

    #[test]
    fn test_marker_is_escaped() {
        let grammar = HeaderGrammar::level("Lvl.").unwrap();
        assert_eq!(grammar.locate("Lvl. 1. ok").count(), 1);
        assert_eq!(grammar.locate("LvlX 1. no").count(), 0);
    }

    #[test]
    fn test_new_rejects_invalid_pattern() {
        assert!(matches!(
            HeaderGrammar::new("Area (", &[]),
            Err(HarvesterError::InvalidGrammar(_))
        ));
    }

    #[test]
    fn test_new_rejects_missing_group() {
        let err = HeaderGrammar::new(r"Area (?P<axis>[0-9])", &AREA_GROUPS).unwrap_err();
        match err {
            HarvesterError::MissingCaptureGroup { group, .. } => assert_eq!(group, "area"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
