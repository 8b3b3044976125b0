use crate::error::Result;
use crate::geometry::AreaMassProperties;
use crate::kernel::GeometryKernel;
use crate::math::Vector3;

/// Signed differences between subsection and whole-face properties
/// (subsections minus face, per world axis for the moments).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDifference {
    /// Area difference.
    pub area: f64,
    /// Second-moment differences about the world X, Y and Z axes.
    pub moments: Vector3,
}

/// Result of comparing the decomposed bands against the whole face.
///
/// The comparison is informational: it quantifies how closely the band
/// decomposition approximates the real section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionComparison {
    /// Compound properties of the subsection list.
    pub regions: AreaMassProperties,
    /// Properties of the whole face.
    pub face: AreaMassProperties,
    /// Signed differences, regions minus face.
    pub difference: PropertyDifference,
}

/// Computes aggregate area and moment-of-inertia properties over a
/// subsection list and, independently, over the original whole face.
#[derive(Debug, Clone, Copy, Default)]
pub struct InertiaAggregator;

impl InertiaAggregator {
    /// Creates a new `InertiaAggregator`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the aggregation.
    ///
    /// # Errors
    ///
    /// Propagates kernel failures from the property computations; the
    /// comparison itself cannot fail.
    pub fn execute<K: GeometryKernel>(
        &self,
        kernel: &K,
        regions: &[K::Region],
        face: &K::Face,
    ) -> Result<SectionComparison> {
        let region_props = kernel.region_properties(regions)?;
        let face_props = kernel.face_properties(face)?;

        let difference = PropertyDifference {
            area: region_props.area - face_props.area,
            moments: region_props.moments - face_props.moments,
        };

        Ok(SectionComparison {
            regions: region_props,
            face: face_props,
            difference,
        })
    }
}
