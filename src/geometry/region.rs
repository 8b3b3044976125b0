use crate::error::{GeometryError, Result};
use crate::math::Point3;

/// A bounded planar area capped from a closed loop.
///
/// Created transiently per decomposition iteration and retained only in the
/// subsection list. The boundary is stored without a duplicated closing
/// vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarRegion {
    boundary: Vec<Point3>,
}

impl PlanarRegion {
    /// Creates a region from a closed-loop boundary (closing vertex omitted).
    ///
    /// # Errors
    ///
    /// Returns an error if the boundary has fewer than 3 vertices.
    pub fn new(boundary: Vec<Point3>) -> Result<Self> {
        if boundary.len() < 3 {
            return Err(GeometryError::Degenerate(
                "region boundary needs at least 3 vertices".into(),
            )
            .into());
        }
        Ok(Self { boundary })
    }

    /// Returns the boundary polygon of the region.
    #[must_use]
    pub fn boundary(&self) -> &[Point3] {
        &self.boundary
    }
}
