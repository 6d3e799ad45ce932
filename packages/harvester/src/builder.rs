//! Taxonomy builder: folds areas into a deduplicated, ordered axis list.

use std::collections::HashMap;

use crate::types::{Area, Axis};

/// Insertion-ordered map of axes keyed by numeric id.
///
/// The first area seen for an id creates the axis with its placeholder
/// name; later areas with the same id are appended to it. Areas are never
/// merged, so a repeated axis/letter pair yields two areas.
#[derive(Debug, Default)]
pub struct TaxonomyBuilder {
    axes: Vec<Axis>,
    index: HashMap<u32, usize>,
}

impl TaxonomyBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an area to the axis with `axis_id`, creating the axis if needed.
    pub fn push_area(&mut self, axis_id: u32, area: Area) {
        let position = *self.index.entry(axis_id).or_insert_with(|| {
            self.axes.push(Axis::placeholder(axis_id));
            self.axes.len() - 1
        });
        self.axes[position].areas.push(area);
    }

    /// Number of distinct axes so far.
    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    /// Finish building; axes come out in first-occurrence order.
    #[must_use]
    pub fn build(self) -> Vec<Axis> {
        self.axes
    }
}
