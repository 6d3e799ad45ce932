//! DRD Harvester - Rebuild the digital readiness taxonomy from extracted text.
//!
//! Source documents describe a three-level taxonomy: numbered axes,
//! lettered areas within each axis, and numbered maturity levels within each
//! area. After text extraction the structure survives only as header lines
//! ("Area 1A. ...", "Level 2. ...") in one continuous buffer. This crate
//! locates those headers, slices the buffer between them, and assembles the
//! slices into a deduplicated tree.
//!
//! # Example
//!
//! ```
//! use drd_harvester::{harvest, AxisNames, GrammarConfig};
//!
//! let text = "Area 1A. Processes\nLevel 1. Basic\nsome text\n";
//! let taxonomy = harvest(text, &GrammarConfig::default(), &AxisNames::default()).unwrap();
//!
//! assert_eq!(taxonomy.axes[0].name, "Digital Processes");
//! assert_eq!(taxonomy.axes[0].areas[0].levels[0].description, "some text");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Core data types (Axis, Area, Level, AxisNames)
//! - [`error`]: Error types and Result alias
//! - [`segmenting`]: Header grammars and span segmentation
//! - [`builder`]: Ordered, deduplicating axis assembly
//! - [`enrich`]: Canonical axis names
//! - [`text`]: Description normalization
//! - [`harvester`]: Main harvester service
//! - [`corpus`]: Combining extracted documents into one buffer
//! - [`locales`]: Translation file splitting and merging
//! - [`output`]: JSON/YAML output generation
//! - [`cli`]: Command-line interface

pub mod builder;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod enrich;
pub mod error;
pub mod harvester;
pub mod locales;
pub mod output;
pub mod segmenting;
pub mod text;
pub mod types;

// Re-export main functions
pub use harvester::{harvest, harvest_file, parse_taxonomy};

// Re-export commonly used items
pub use error::{HarvesterError, Result};
pub use segmenting::GrammarConfig;
pub use types::{Area, Axis, AxisNames, Level, Taxonomy};
