use std::fmt;

use crate::math::Point3;

use super::SectionComparison;

/// Rendered comparison results: report lines plus the two centroids.
///
/// `centroids` holds the subsection-set centroid first, then the face
/// centroid, in display order for an external visualization collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionReport {
    /// Textual report lines.
    pub lines: Vec<String>,
    /// Subsection-set centroid, then face centroid.
    pub centroids: [Point3; 2],
}

impl fmt::Display for SectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Renders a [`SectionComparison`] as structured text.
///
/// Pure: no side effects beyond the returned report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter;

impl ReportFormatter {
    /// Formats the comparison into report lines and centroid points.
    #[must_use]
    pub fn format(comparison: &SectionComparison) -> SectionReport {
        let regions = &comparison.regions;
        let face = &comparison.face;
        let diff = &comparison.difference;

        let lines = vec![
            format!("Area {:.6}", regions.area),
            format!("Difference in Area {:.6}", diff.area),
            format!(
                "Moment X: {:.6}; Y: {:.6}; Z: {:.6} in WCS",
                regions.moments.x, regions.moments.y, regions.moments.z
            ),
            format!(
                "Difference in Moment X: {:.6}; Y: {:.6}; Z: {:.6} in WCS",
                diff.moments.x, diff.moments.y, diff.moments.z
            ),
        ];

        SectionReport {
            lines,
            centroids: [regions.centroid, face.centroid],
        }
    }
}
