//! Grammar configuration for the DRD document layout.

use super::diagnostics::NearMissDetector;
use super::grammar::HeaderGrammar;
use crate::config::{validate_marker, DEFAULT_AREA_MARKER, DEFAULT_LEVEL_MARKER};
use crate::error::Result;

/// Marker words that open headers at each grain.
///
/// The layout of a DRD corpus:
///
/// ```text
/// Area 1A. <area name>
/// ├── Level 1. <title>
/// │   └── description text ...
/// └── Level 2. <title>
///     └── description text ...
/// Area 1B. <area name>
/// └── ...
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarConfig {
    /// Word opening an Axis/Area header.
    pub area_marker: String,

    /// Word opening a Level header.
    pub level_marker: String,
}

impl GrammarConfig {
    /// Create a config with the default English markers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            area_marker: DEFAULT_AREA_MARKER.to_string(),
            level_marker: DEFAULT_LEVEL_MARKER.to_string(),
        }
    }

    /// Set the Area marker word.
    #[must_use]
    pub fn with_area_marker(mut self, marker: impl Into<String>) -> Self {
        self.area_marker = marker.into();
        self
    }

    /// Set the Level marker word.
    #[must_use]
    pub fn with_level_marker(mut self, marker: impl Into<String>) -> Self {
        self.level_marker = marker.into();
        self
    }

    /// Validate the markers and compile every pattern.
    pub fn compile(&self) -> Result<CompiledGrammar> {
        validate_marker(&self.area_marker)?;
        validate_marker(&self.level_marker)?;

        Ok(CompiledGrammar {
            area: HeaderGrammar::area(&self.area_marker)?,
            level: HeaderGrammar::level(&self.level_marker)?,
            area_near_miss: NearMissDetector::area(&self.area_marker)?,
            level_near_miss: NearMissDetector::level(&self.level_marker)?,
        })
    }
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// All patterns for one harvest run, compiled once.
#[derive(Debug, Clone)]
pub struct CompiledGrammar {
    /// Outer (Area) grammar.
    pub area: HeaderGrammar,

    /// Inner (Level) grammar.
    pub level: HeaderGrammar,

    /// Lenient Area heading scan.
    pub area_near_miss: NearMissDetector,

    /// Lenient Level heading scan.
    pub level_near_miss: NearMissDetector,
}
