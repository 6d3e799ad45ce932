//! Types for the segmenting system.

use std::ops::Range;
use std::str::FromStr;

use regex::Captures;

use crate::error::{HarvesterError, Result};

/// A header located in a text buffer.
///
/// Offsets are byte offsets into the buffer the header was located in.
#[derive(Debug)]
pub struct HeaderMatch<'t> {
    captures: Captures<'t>,
}

impl<'t> HeaderMatch<'t> {
    pub(crate) fn new(captures: Captures<'t>) -> Self {
        Self { captures }
    }

    /// Offset of the first byte of the header.
    #[must_use]
    pub fn start(&self) -> usize {
        self.whole().start()
    }

    /// Offset just past the header.
    #[must_use]
    pub fn end(&self) -> usize {
        self.whole().end()
    }

    /// Full header text.
    #[must_use]
    pub fn as_str(&self) -> &'t str {
        self.whole().as_str()
    }

    /// Value of a named group, if it participated in the match.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&'t str> {
        self.captures.name(name).map(|m| m.as_str())
    }

    /// Value of a named group the grammar guarantees.
    pub fn required(&self, name: &str) -> Result<&'t str> {
        self.group(name)
            .ok_or_else(|| HarvesterError::MissingCaptureGroup {
                pattern: self.as_str().to_string(),
                group: name.to_string(),
            })
    }

    /// Parse a named group as a number of type `N`.
    pub fn number<N: FromStr>(&self, name: &'static str) -> Result<N> {
        let value = self.required(name)?;
        value
            .trim()
            .parse()
            .map_err(|_| HarvesterError::InvalidHeaderNumber {
                field: name,
                value: value.to_string(),
                header: self.as_str().to_string(),
            })
    }

    fn whole(&self) -> regex::Match<'t> {
        self.captures.get_match()
    }
}

/// A header together with the text that belongs to it.
#[derive(Debug)]
pub struct Segment<'t> {
    /// The header that opens this segment.
    pub header: HeaderMatch<'t>,

    /// Byte range of the body within the segmented buffer.
    pub span: Range<usize>,

    /// Body text: everything up to the next header or the end of the buffer.
    pub body: &'t str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn header<'t>(pattern: &str, text: &'t str) -> HeaderMatch<'t> {
        let regex = Regex::new(pattern).unwrap();
        HeaderMatch::new(regex.captures(text).unwrap())
    }

    #[test]
    fn test_header_match_offsets() {
        let m = header(r"Level (?P<level>[0-9]+)\.", "intro Level 3. Title");
        assert_eq!(m.start(), 6);
        assert_eq!(m.end(), 14);
        assert_eq!(m.as_str(), "Level 3.");
    }

    #[test]
    fn test_header_match_number() {
        let m = header(r"Level (?P<level>[0-9]+)\.", "Level 12.");
        assert_eq!(m.number::<u64>("level").unwrap(), 12);
    }

    #[test]
    fn test_header_match_number_wide() {
        let m = header(r"Level (?P<level>[0-9]+)\.", "Level 99999999999.");
        assert_eq!(m.number::<u64>("level").unwrap(), 99_999_999_999);
    }

    #[test]
    fn test_header_match_number_overflow() {
        let m = header(r"Level (?P<level>[0-9]+)\.", "Level 99999999999999999999.");
        let err = m.number::<u64>("level").unwrap_err();
        assert!(matches!(
            err,
            HarvesterError::InvalidHeaderNumber { field: "level", .. }
        ));
    }

    #[test]
    fn test_header_match_missing_group() {
        let m = header(r"Level (?P<level>[0-9]+)\.(?P<title>x)?", "Level 1.");
        assert_eq!(m.group("title"), None);
        assert!(matches!(
            m.required("title"),
            Err(HarvesterError::MissingCaptureGroup { .. })
        ));
    }
}
