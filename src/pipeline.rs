//! End-to-end cross-section analysis pipeline.
//!
//! Runs `Selecting → Decomposing → Aggregating → Reporting → Done`, any
//! stage transitioning to failure on its error. The collaborators outside
//! the core (where the face and seed curve come from, where report lines
//! and display geometry go) are injected through traits rather than
//! reached through global state.

use crate::error::Result;
use crate::kernel::GeometryKernel;
use crate::math::Point3;
use crate::section::{
    CrossSectionDecomposer, DecomposeParams, InertiaAggregator, ReportFormatter, SectionReport,
};

/// Supplies the inputs of a decomposition run: the cross-section face and
/// the seed boundary curve.
pub trait SelectionProvider<K: GeometryKernel> {
    /// Produces the seed curve and face, by whatever interactive or
    /// programmatic means the host provides.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid selection can be produced.
    fn select(&mut self) -> Result<(K::Curve, K::Face)>;
}

/// Receives the outputs of a run: freshly built bands, report lines and
/// the centroid points to display.
pub trait ReportSink<K: GeometryKernel> {
    /// Called once per subsection band, as it is built.
    fn region_built(&mut self, region: &K::Region);

    /// Called once per report line, in order.
    fn emit_line(&mut self, line: &str);

    /// Called once with the two centroid points (subsections, then face).
    fn display_points(&mut self, points: &[Point3]);
}

/// Drives one cross-section analysis from selection to report.
#[derive(Debug)]
pub struct SectionPipeline<K> {
    kernel: K,
    params: DecomposeParams,
}

impl<K: GeometryKernel> SectionPipeline<K> {
    /// Creates a pipeline over the given kernel and parameters.
    #[must_use]
    pub fn new(kernel: K, params: DecomposeParams) -> Self {
        Self { kernel, params }
    }

    /// Runs the pipeline to completion.
    ///
    /// Synchronous and single-threaded; each stage blocks until the kernel
    /// returns. There are no retries and no partial results: the first
    /// error aborts the run and nothing built so far is surfaced as a
    /// result.
    ///
    /// # Errors
    ///
    /// Propagates the first error of any stage.
    pub fn run<S, R>(&self, selection: &mut S, sink: &mut R) -> Result<SectionReport>
    where
        S: SelectionProvider<K>,
        R: ReportSink<K>,
    {
        tracing::info!("selecting cross-section inputs");
        let (base_curve, face) = selection.select()?;

        tracing::info!(
            iterations = self.params.iterations,
            offset_distance = self.params.offset_distance,
            "decomposing cross-section"
        );
        let regions = CrossSectionDecomposer::new(self.params).execute_with(
            &self.kernel,
            &base_curve,
            &face,
            |region| sink.region_built(region),
        )?;

        tracing::info!(bands = regions.len(), "aggregating area mass properties");
        let comparison = InertiaAggregator::new().execute(&self.kernel, &regions, &face)?;

        tracing::info!("reporting");
        let report = ReportFormatter::format(&comparison);
        for line in &report.lines {
            sink.emit_line(line);
        }
        sink.display_points(&report.centroids);

        Ok(report)
    }
}
