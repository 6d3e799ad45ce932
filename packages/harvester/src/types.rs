//! Core data types for the harvester.
//!
//! These types form the reconstructed DRD taxonomy: numbered axes, lettered
//! areas within each axis, and numbered maturity levels within each area.
//! Field names are the interchange format and must not be renamed.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{axis_placeholder_name, DEFAULT_AXIS_NAMES};
use crate::error::Result;

/// A numbered maturity stage within an area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Level number as written in the header.
    pub level: u64,

    /// Header title, trimmed.
    pub title: String,

    /// Descriptive text, collapsed to a single line.
    pub description: String,
}

/// A named sub-dimension of an axis (e.g. "1A").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    /// Axis digit followed by the area letter.
    pub id: String,

    /// Area name captured from the header, trimmed.
    pub name: String,

    /// Levels in document order.
    pub levels: Vec<Level>,
}

/// A top-level taxonomy dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    /// Numeric axis id, unique within a taxonomy.
    pub id: u32,

    /// Display name (placeholder until names are applied).
    pub name: String,

    /// Areas in document order.
    pub areas: Vec<Area>,
}

impl Axis {
    /// Create an axis with its placeholder name and no areas.
    #[must_use]
    pub fn placeholder(id: u32) -> Self {
        Self {
            id,
            name: axis_placeholder_name(id),
            areas: Vec::new(),
        }
    }
}

/// Result of harvesting one text buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    /// Axes in first-occurrence order.
    pub axes: Vec<Axis>,

    /// Headings that resembled a marker but did not match the grammar.
    pub warnings: Vec<String>,
}

impl Taxonomy {
    /// Total number of areas across all axes.
    #[must_use]
    pub fn area_count(&self) -> usize {
        self.axes.iter().map(|axis| axis.areas.len()).sum()
    }

    /// Total number of levels across all areas.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.axes
            .iter()
            .flat_map(|axis| &axis.areas)
            .map(|area| area.levels.len())
            .sum()
    }
}

/// Lookup table of axis id to canonical display name.
///
/// Serialized as a plain mapping, e.g. YAML `1: Digital Processes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisNames {
    names: BTreeMap<u32, String>,
}

impl AxisNames {
    /// Create an empty table.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            names: BTreeMap::new(),
        }
    }

    /// Add or replace a name.
    #[must_use]
    pub fn with_name(mut self, id: u32, name: impl Into<String>) -> Self {
        self.names.insert(id, name.into());
        self
    }

    /// Look up the name for an axis id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Parse a table from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load a table from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }
}

impl Default for AxisNames {
    fn default() -> Self {
        DEFAULT_AXIS_NAMES
            .iter()
            .fold(Self::empty(), |names, (id, name)| names.with_name(*id, *name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_placeholder() {
        let axis = Axis::placeholder(3);
        assert_eq!(axis.id, 3);
        assert_eq!(axis.name, "Axis 3");
        assert!(axis.areas.is_empty());
    }

    #[test]
    fn test_axis_serializes_with_interchange_field_names() {
        let axis = Axis {
            id: 1,
            name: "Digital Processes".to_string(),
            areas: vec![Area {
                id: "1A".to_string(),
                name: "Processes".to_string(),
                levels: vec![Level {
                    level: 1,
                    title: "Basic".to_string(),
                    description: "some text".to_string(),
                }],
            }],
        };

        let json = serde_json::to_value(&axis).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["areas"][0]["id"], "1A");
        assert_eq!(json["areas"][0]["levels"][0]["level"], 1);
        assert_eq!(json["areas"][0]["levels"][0]["description"], "some text");
    }

    #[test]
    fn test_taxonomy_counts() {
        let mut axis = Axis::placeholder(1);
        axis.areas.push(Area {
            id: "1A".to_string(),
            name: "A".to_string(),
            levels: vec![
                Level {
                    level: 1,
                    title: "x".to_string(),
                    description: String::new(),
                },
                Level {
                    level: 2,
                    title: "y".to_string(),
                    description: String::new(),
                },
            ],
        });
        axis.areas.push(Area {
            id: "1B".to_string(),
            name: "B".to_string(),
            levels: Vec::new(),
        });
        let taxonomy = Taxonomy {
            axes: vec![axis, Axis::placeholder(2)],
            warnings: Vec::new(),
        };

        assert_eq!(taxonomy.area_count(), 2);
        assert_eq!(taxonomy.level_count(), 2);
    }

    #[test]
    fn test_axis_names_default() {
        let names = AxisNames::default();
        assert_eq!(names.len(), 7);
        assert_eq!(names.get(1), Some("Digital Processes"));
        assert_eq!(names.get(7), Some("Artificial Intelligence"));
        assert_eq!(names.get(8), None);
    }

    #[test]
    fn test_axis_names_from_yaml() {
        let names = AxisNames::from_yaml_str("1: Procesy cyfrowe\n2: Produkty cyfrowe\n").unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(names.get(1), Some("Procesy cyfrowe"));
    }

    #[test]
    fn test_axis_names_from_invalid_yaml() {
        assert!(AxisNames::from_yaml_str("- not\n- a mapping\n").is_err());
    }
}
