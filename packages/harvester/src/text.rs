//! Text normalization helpers for extracted document text.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::WARNING_EXCERPT_CHARS;

/// Any run of whitespace, line breaks included.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapse a level description to a single line.
///
/// Line breaks become spaces, every whitespace run becomes one space,
/// and the result is trimmed.
///
/// # Examples
/// ```
/// use drd_harvester::text::normalize_description;
///
/// assert_eq!(
///     normalize_description("\nsome   text\r\nacross\tlines\n"),
///     "some text across lines"
/// );
/// ```
pub fn normalize_description(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// 1-based line number of a byte offset.
pub fn line_number(text: &str, offset: usize) -> usize {
    let offset = offset.min(text.len());
    text.as_bytes()[..offset]
        .iter()
        .filter(|byte| **byte == b'\n')
        .count()
        + 1
}

/// Short single-line excerpt of a header for use in warnings.
pub fn excerpt(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default().trim();
    if line.chars().count() > WARNING_EXCERPT_CHARS {
        let cut: String = line.chars().take(WARNING_EXCERPT_CHARS).collect();
        format!("{cut}...")
    } else {
        line.to_string()
    }
}
