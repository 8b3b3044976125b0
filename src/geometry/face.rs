use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{contains_point_2d, signed_area_2d};
use crate::math::{Point3, TOLERANCE};

/// A bounded planar surface: a simple polygon in the XY plane.
///
/// The face is the read-only input of a decomposition run; it is owned by
/// the caller and never modified. Z coordinates of the boundary are ignored,
/// as in the rest of the 2D math layer.
#[derive(Debug, Clone)]
pub struct PlanarFace {
    boundary: Vec<Point3>,
}

impl PlanarFace {
    /// Creates a face from its boundary polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if the boundary has fewer than 3 vertices or
    /// encloses (near-)zero area.
    pub fn new(boundary: Vec<Point3>) -> Result<Self> {
        if boundary.len() < 3 {
            return Err(GeometryError::Degenerate(
                "face boundary needs at least 3 vertices".into(),
            )
            .into());
        }
        if signed_area_2d(&boundary).abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("face boundary encloses no area".into()).into());
        }
        Ok(Self { boundary })
    }

    /// Creates an axis-aligned rectangular face with one corner at the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` or `height` is not positive.
    pub fn rectangle(width: f64, height: f64) -> Result<Self> {
        if width <= TOLERANCE || height <= TOLERANCE {
            return Err(
                GeometryError::Degenerate("rectangle sides must be positive".into()).into(),
            );
        }
        Self::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(width, 0.0, 0.0),
            Point3::new(width, height, 0.0),
            Point3::new(0.0, height, 0.0),
        ])
    }

    /// Returns the boundary polygon of the face.
    #[must_use]
    pub fn boundary(&self) -> &[Point3] {
        &self.boundary
    }

    /// Returns whether a point lies inside the face.
    ///
    /// Boundary points are not guaranteed a consistent answer.
    #[must_use]
    pub fn contains(&self, pt: &Point3) -> bool {
        contains_point_2d(&self.boundary, pt)
    }
}
