use crate::error::{DecomposeError, Result};
use crate::geometry::BoundedCurve;
use crate::kernel::{GeometryKernel, OffsetSide};

use super::expect_exactly_one;

/// Builds one annular subsection of a cross-section.
///
/// Offsets the current boundary curve across the face, stitches offset and
/// base into a closed loop with two straight connecting edges, and caps the
/// loop into a planar region. Every kernel step must produce exactly one
/// result; anything else is a fatal ambiguity.
#[derive(Debug, Clone, Copy)]
pub struct SubsectionBuilder {
    offset_distance: f64,
    side: OffsetSide,
    tolerance: f64,
}

impl SubsectionBuilder {
    /// Creates a new `SubsectionBuilder`.
    #[must_use]
    pub fn new(offset_distance: f64, side: OffsetSide, tolerance: f64) -> Self {
        Self {
            offset_distance,
            side,
            tolerance,
        }
    }

    /// Executes the build, returning the capped region together with the
    /// offset curve that becomes the next iteration's base curve.
    ///
    /// `iteration` is carried into ambiguity errors for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns an ambiguity error if offsetting, joining or capping yields
    /// anything but exactly one result, or propagates the kernel failure if
    /// an operation fails outright.
    pub fn execute<K: GeometryKernel>(
        &self,
        kernel: &K,
        base_curve: &K::Curve,
        face: &K::Face,
        iteration: usize,
    ) -> Result<(K::Region, K::Curve)> {
        let offset_curve = expect_exactly_one(
            kernel.offset_on_surface(
                base_curve,
                face,
                self.offset_distance,
                self.side,
                self.tolerance,
            )?,
            |count| DecomposeError::AmbiguousOffset { iteration, count },
        )?;

        // Close the band: base start → offset start, offset end → base end.
        let edge1 = kernel.make_line(base_curve.start_point(), offset_curve.start_point())?;
        let edge2 = kernel.make_line(offset_curve.end_point(), base_curve.end_point())?;

        let prejoin = [edge1, edge2, base_curve.clone(), offset_curve.clone()];
        let loop_curve = expect_exactly_one(
            kernel.join_curves(&prejoin, self.tolerance)?,
            |count| DecomposeError::AmbiguousJoin { iteration, count },
        )?;

        let region = expect_exactly_one(kernel.cap_planar_loop(&loop_curve)?, |count| {
            DecomposeError::AmbiguousCap { iteration, count }
        })?;

        Ok((region, offset_curve))
    }
}
