//! Span segmentation: slice a buffer between consecutive headers.

use std::iter;

use super::grammar::HeaderGrammar;
use super::types::Segment;

/// Split `text` into one segment per header located by `grammar`.
///
/// Each segment's body runs from the end of its header to the start of the
/// next header, or to the end of `text` for the last one. Text before the
/// first header belongs to no segment. No headers yields no segments.
///
/// The same primitive serves both grains: the whole buffer with the Area
/// grammar, then each Area body with the Level grammar.
pub fn segment<'t>(grammar: &HeaderGrammar, text: &'t str) -> Vec<Segment<'t>> {
    let headers: Vec<_> = grammar.locate(text).collect();

    let body_ends: Vec<usize> = headers
        .iter()
        .skip(1)
        .map(|header| header.start())
        .chain(iter::once(text.len()))
        .collect();

    headers
        .into_iter()
        .zip(body_ends)
        .map(|(header, end)| {
            let span = header.end()..end;
            Segment {
                body: &text[span.clone()],
                span,
                header,
            }
        })
        .collect()
}
