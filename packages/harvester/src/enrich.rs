//! Axis name enrichment.

use crate::types::{Axis, AxisNames};

/// Replace placeholder axis names with canonical ones from `names`.
///
/// Ids missing from `names` keep their current name. Never fails.
///
/// # Examples
/// ```
/// use drd_harvester::enrich::apply_axis_names;
/// use drd_harvester::types::{Axis, AxisNames};
///
/// let mut axes = vec![Axis::placeholder(6), Axis::placeholder(9)];
/// apply_axis_names(&mut axes, &AxisNames::default());
///
/// assert_eq!(axes[0].name, "Cybersecurity");
/// assert_eq!(axes[1].name, "Axis 9");
/// ```
pub fn apply_axis_names(axes: &mut [Axis], names: &AxisNames) {
    for axis in axes.iter_mut() {
        if let Some(name) = names.get(axis.id) {
            axis.name = name.to_string();
        } else {
            tracing::debug!(axis = axis.id, "No canonical name for axis, keeping placeholder");
        }
    }
}
