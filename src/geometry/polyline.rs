use crate::error::{GeometryError, Result};
use crate::math::Point3;

use super::BoundedCurve;

/// An immutable chain of straight segments through a list of 3D points.
///
/// This is the curve representation of the planar reference backend: seed
/// boundaries, offset curves, connecting edges and joined loops are all
/// polylines. A polyline is never mutated in place; offsetting, joining and
/// reversing all produce new values.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point3>,
}

impl Polyline {
    /// Creates a polyline from a list of points.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 points are given.
    pub fn new(points: Vec<Point3>) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::Degenerate(
                "polyline needs at least 2 points".into(),
            )
            .into());
        }
        Ok(Self { points })
    }

    /// Creates a single straight segment from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the segment has zero length.
    pub fn line(start: Point3, end: Point3) -> Result<Self> {
        if (end - start).norm() < crate::math::TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            points: vec![start, end],
        })
    }

    /// Returns the vertices of the polyline.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns a new polyline with the vertices in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Returns whether start and end coincide under `tolerance`.
    #[must_use]
    pub fn is_closed(&self, tolerance: f64) -> bool {
        (self.end_point() - self.start_point()).norm() <= tolerance
    }
}

impl BoundedCurve for Polyline {
    fn start_point(&self) -> Point3 {
        self.points[0]
    }

    fn end_point(&self) -> Point3 {
        self.points[self.points.len() - 1]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        let pl = Polyline::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
        ])
        .unwrap();
        assert_eq!(pl.start_point(), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(pl.end_point(), Point3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let pl = Polyline::line(Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 0.0, 0.0)).unwrap();
        let rev = pl.reversed();
        assert_eq!(rev.start_point(), pl.end_point());
        assert_eq!(rev.end_point(), pl.start_point());
    }

    #[test]
    fn closed_detection() {
        let open = Polyline::line(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)).unwrap();
        assert!(!open.is_closed(1e-6));

        let closed = Polyline::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
        ])
        .unwrap();
        assert!(closed.is_closed(1e-6));
    }

    #[test]
    fn zero_length_line_rejected() {
        let p = Point3::new(1.0, 2.0, 0.0);
        assert!(Polyline::line(p, p).is_err());
    }

    #[test]
    fn too_few_points_rejected() {
        assert!(Polyline::new(vec![Point3::new(0.0, 0.0, 0.0)]).is_err());
        assert!(Polyline::new(Vec::new()).is_err());
    }
}
