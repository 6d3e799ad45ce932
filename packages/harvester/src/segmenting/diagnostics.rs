//! Near-miss detection for headings the strict grammar skips.
//!
//! Source documents occasionally vary in heading style ("area 1a.", Arabic
//! digits, "LEVEL 3."). The strict grammars ignore those, so a lenient
//! pattern runs alongside them and reports every heading it finds that the
//! strict grammar did not.

use regex::Regex;

use crate::error::Result;
use crate::text::{excerpt, line_number};

/// A heading-like occurrence that the strict grammar did not accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearMiss {
    /// Which grain the heading resembles ("Area" or "Level").
    pub kind: &'static str,

    /// Byte offset in the scanned buffer.
    pub offset: usize,

    /// Excerpt of the heading line.
    pub excerpt: String,
}

impl NearMiss {
    /// Human-readable warning, with the line number resolved against `source`.
    ///
    /// `base` is the offset of the scanned buffer inside `source`.
    #[must_use]
    pub fn to_warning(&self, source: &str, base: usize) -> String {
        format!(
            "possible {} header not matched at line {}: '{}'",
            self.kind,
            line_number(source, base + self.offset),
            self.excerpt
        )
    }
}

/// Lenient heading scanner for one grain.
#[derive(Debug, Clone)]
pub struct NearMissDetector {
    kind: &'static str,
    regex: Regex,
}

impl NearMissDetector {
    /// Area-like headings: any case, any numeric glyph, any letter.
    pub fn area(marker: &str) -> Result<Self> {
        let pattern = format!(r"(?i)\b{}\s*\p{{N}}\p{{L}}\s*\.", regex::escape(marker));
        Ok(Self {
            kind: "Area",
            regex: Regex::new(&pattern)?,
        })
    }

    /// Level-like headings: any case, any numeric glyphs.
    pub fn level(marker: &str) -> Result<Self> {
        let pattern = format!(r"(?i)\b{}\s*\p{{N}}+\s*\.", regex::escape(marker));
        Ok(Self {
            kind: "Level",
            regex: Regex::new(&pattern)?,
        })
    }

    /// Report lenient matches in `text` whose start is not in `accepted`.
    ///
    /// `accepted` holds the start offsets of strict matches in the same
    /// buffer, in ascending order.
    pub fn scan(&self, text: &str, accepted: &[usize]) -> Vec<NearMiss> {
        self.regex
            .find_iter(text)
            .filter(|m| accepted.binary_search(&m.start()).is_err())
            .map(|m| NearMiss {
                kind: self.kind,
                offset: m.start(),
                excerpt: excerpt(&text[m.start()..]),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_near_miss_lowercase() {
        let detector = NearMissDetector::area("Area").unwrap();
        let misses = detector.scan("intro\narea 3c. Lower case\n", &[]);

        assert_eq!(misses.len(), 1);
        assert_eq!(misses[0].offset, 6);
        assert_eq!(misses[0].excerpt, "area 3c. Lower case");
    }

    #[test]
    fn test_area_near_miss_non_ascii_digit() {
        let detector = NearMissDetector::area("Area").unwrap();
        let misses = detector.scan("Area \u{663}A. Arabic digit", &[]);
        assert_eq!(misses.len(), 1);
    }

    #[test]
    fn test_accepted_headers_are_not_reported() {
        let detector = NearMissDetector::area("Area").unwrap();
        let text = "Area 1A. Processes\nArea 1B. Other";
        assert!(detector.scan(text, &[0, 19]).is_empty());
    }

    #[test]
    fn test_prose_is_not_reported() {
        let detector = NearMissDetector::level("Level").unwrap();
        let text = "At a basic level. The level of maturity grows.";
        assert!(detector.scan(text, &[]).is_empty());
    }

    #[test]
    fn test_level_near_miss_uppercase() {
        let detector = NearMissDetector::level("Level").unwrap();
        let misses = detector.scan("LEVEL 4. Shouted", &[]);
        assert_eq!(misses.len(), 1);
        assert_eq!(misses[0].kind, "Level");
    }

    #[test]
    fn test_to_warning_resolves_line_against_source() {
        let source = "line one\nline two\nlevel 2. Quiet\n";
        let base = 9;
        let detector = NearMissDetector::level("Level").unwrap();
        let misses = detector.scan(&source[base..], &[]);

        assert_eq!(
            misses[0].to_warning(source, base),
            "possible Level header not matched at line 3: 'level 2. Quiet'"
        );
    }
}
