//! Header location and span segmentation for extracted document text.
//!
//! One primitive, [`segment`], locates ordered headers with a
//! [`HeaderGrammar`] and slices the buffer between consecutive headers. It
//! runs at the Area grain over the whole buffer and at the Level grain over
//! each Area body.

mod config;
mod diagnostics;
mod engine;
mod grammar;
mod types;

pub use config::{CompiledGrammar, GrammarConfig};
pub use diagnostics::{NearMiss, NearMissDetector};
pub use engine::segment;
pub use grammar::{HeaderGrammar, AREA_GROUPS, LEVEL_GROUPS};
pub use types::{HeaderMatch, Segment};
