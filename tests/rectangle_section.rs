//! End-to-end decomposition of a 10×1 rectangular cross-section.

#![allow(clippy::unwrap_used)]

use sectilis::geometry::{PlanarFace, Polyline};
use sectilis::kernel::{GeometryKernel, OffsetSide, PlanarKernel};
use sectilis::math::polygon_2d::signed_area_2d;
use sectilis::math::Point3;
use sectilis::section::{
    CrossSectionDecomposer, DecomposeParams, InertiaAggregator, ReportFormatter,
};

fn rectangle_inputs() -> (PlanarKernel, PlanarFace, Polyline) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let kernel = PlanarKernel::new();
    let face = PlanarFace::rectangle(10.0, 1.0).unwrap();
    // Seed curve: the long bottom edge.
    let base = Polyline::line(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)).unwrap();
    (kernel, face, base)
}

#[test]
fn ten_bands_approximate_the_section() {
    let (kernel, face, base) = rectangle_inputs();
    let params = DecomposeParams {
        iterations: 10,
        offset_distance: 0.1,
        side: OffsetSide::Inward,
        tolerance: 1e-6,
    };

    let regions = CrossSectionDecomposer::new(params)
        .execute(&kernel, &base, &face)
        .unwrap();
    assert_eq!(regions.len(), 10);

    // Each band is approximately a 10 × 0.1 strip.
    for region in &regions {
        let area = signed_area_2d(region.boundary()).abs();
        assert!((area - 1.0).abs() < 1e-6, "band area {area}");
    }

    let comparison = InertiaAggregator::new()
        .execute(&kernel, &regions, &face)
        .unwrap();

    assert!((comparison.regions.area - 10.0).abs() < 1e-3);
    assert!(comparison.difference.area.abs() < 1e-3);
    // The bands tile the face exactly, so the moment about the axis
    // parallel to the offset direction matches to floating-point noise.
    assert!(comparison.difference.moments.x.abs() < 1e-6);

    let report = ReportFormatter::format(&comparison);
    assert_eq!(report.lines.len(), 4);
    assert_eq!(report.centroids.len(), 2);
    assert!((report.centroids[0] - report.centroids[1]).norm() < 1e-6);
}

#[test]
fn finer_decomposition_reduces_moment_error() {
    let (kernel, face, base) = rectangle_inputs();

    let moment_error = |iterations: usize| {
        let params = DecomposeParams {
            iterations,
            offset_distance: 1.0 / iterations as f64,
            side: OffsetSide::Inward,
            tolerance: 1e-6,
        };
        let regions = CrossSectionDecomposer::new(params)
            .execute(&kernel, &base, &face)
            .unwrap();
        let comparison = InertiaAggregator::new()
            .execute(&kernel, &regions, &face)
            .unwrap();
        comparison.difference.moments.norm()
    };

    // Exact tiling at every resolution: the error stays at noise level
    // and does not grow with the band count.
    let coarse = moment_error(2);
    let fine = moment_error(20);
    assert!(coarse < 1e-9, "coarse error {coarse}");
    assert!(fine <= coarse + 1e-9, "fine error {fine}");
}

#[test]
fn whole_face_properties_match_beam_theory() {
    let (kernel, face, _) = rectangle_inputs();
    let props = kernel.face_properties(&face).unwrap();

    // b·h³/3 about the base axis (X), h·b³/3 about Y, sum about Z.
    assert!((props.moments.x - 10.0 / 3.0).abs() < 1e-9);
    assert!((props.moments.y - 1000.0 / 3.0).abs() < 1e-9);
    assert!((props.moments.z - props.moments.x - props.moments.y).abs() < 1e-9);
}
