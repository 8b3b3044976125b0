use crate::error::Result;
use crate::kernel::{GeometryKernel, OffsetSide};

use super::SubsectionBuilder;

/// Configuration of a decomposition run.
///
/// All parameters are explicit; there are no built-in step counts or
/// distances.
#[derive(Debug, Clone, Copy)]
pub struct DecomposeParams {
    /// Number of annular bands to build. Zero is valid and yields an empty
    /// subsection list.
    pub iterations: usize,
    /// Offset distance per band.
    pub offset_distance: f64,
    /// Side of the current boundary each offset lands on.
    pub side: OffsetSide,
    /// Geometric coincidence tolerance for offsetting and joining.
    pub tolerance: f64,
}

/// Decomposes a cross-section into concentric annular bands.
///
/// Drives a fixed number of [`SubsectionBuilder`] iterations, advancing the
/// base curve to each iteration's offset result. The produced regions are
/// ordered innermost (closest to the seed curve) first. The run fails fast:
/// the first builder error aborts the loop and the partial list is
/// discarded, never returned.
#[derive(Debug, Clone, Copy)]
pub struct CrossSectionDecomposer {
    params: DecomposeParams,
}

impl CrossSectionDecomposer {
    /// Creates a decomposer with the given parameters.
    #[must_use]
    pub fn new(params: DecomposeParams) -> Self {
        Self { params }
    }

    /// Runs the decomposition.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a [`SubsectionBuilder`] iteration;
    /// ambiguity errors carry the iteration index at which the run died.
    pub fn execute<K: GeometryKernel>(
        &self,
        kernel: &K,
        base_curve: &K::Curve,
        face: &K::Face,
    ) -> Result<Vec<K::Region>> {
        self.execute_with(kernel, base_curve, face, |_| {})
    }

    /// Runs the decomposition, invoking `on_region` for each region as it
    /// is built.
    ///
    /// The observer lets a caller surface bands incrementally (for display)
    /// without giving the core a display dependency. On failure, regions
    /// already observed must be considered void — no partial list escapes
    /// through the return value.
    ///
    /// # Errors
    ///
    /// Same contract as [`execute`](Self::execute).
    pub fn execute_with<K: GeometryKernel>(
        &self,
        kernel: &K,
        base_curve: &K::Curve,
        face: &K::Face,
        mut on_region: impl FnMut(&K::Region),
    ) -> Result<Vec<K::Region>> {
        let builder = SubsectionBuilder::new(
            self.params.offset_distance,
            self.params.side,
            self.params.tolerance,
        );

        let mut regions = Vec::with_capacity(self.params.iterations);
        let mut current = base_curve.clone();
        for iteration in 0..self.params.iterations {
            let (region, offset_curve) = builder.execute(kernel, &current, face, iteration)?;
            tracing::debug!(iteration, "subsection band built");
            on_region(&region);
            regions.push(region);
            current = offset_curve;
        }

        Ok(regions)
    }
}
