use crate::math::{Point3, Vector3};

/// Read-only snapshot of the area mass properties of a planar region set.
///
/// `moments` holds the second moments of area about the world X, Y and Z
/// axes (one component per axis). Computed freshly by the kernel for both
/// the subsection list and the whole face; never mutated, only diffed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaMassProperties {
    /// Total enclosed area.
    pub area: f64,
    /// Area centroid.
    pub centroid: Point3,
    /// Second moments of area about the world coordinate axes.
    pub moments: Vector3,
}

impl AreaMassProperties {
    /// Properties of an empty region set: zero area and moments, centroid
    /// at the origin.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            area: 0.0,
            centroid: Point3::origin(),
            moments: Vector3::zeros(),
        }
    }
}
