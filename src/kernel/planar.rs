use crate::error::{KernelError, Result};
use crate::geometry::{AreaMassProperties, BoundedCurve, PlanarFace, PlanarRegion, Polyline};
use crate::math::polygon_2d::{
    centroid_2d, left_normal, line_line_intersect_2d, second_moments_2d, segment_direction,
    segment_segment_intersect_2d, signed_area_2d,
};
use crate::math::{Point3, TOLERANCE};

use super::{GeometryKernel, OffsetSide};

/// Reference geometry backend for cross-sections in the XY plane.
///
/// Curves are polylines, faces are simple polygons, regions are capped
/// polygon loops. Offsetting displaces each segment along its in-plane
/// normal with mitered corners; the side is resolved geometrically by
/// probing face containment, never by a sign convention.
#[derive(Debug, Clone)]
pub struct PlanarKernel {
    /// Coincidence tolerance used where an operation takes none explicitly
    /// (loop closure checks when capping).
    tolerance: f64,
}

impl PlanarKernel {
    /// Creates a kernel with the default coincidence tolerance of `1e-6`.
    #[must_use]
    pub fn new() -> Self {
        Self { tolerance: 1e-6 }
    }

    /// Creates a kernel with a custom coincidence tolerance.
    #[must_use]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Default for PlanarKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryKernel for PlanarKernel {
    type Curve = Polyline;
    type Face = PlanarFace;
    type Region = PlanarRegion;

    fn offset_on_surface(
        &self,
        curve: &Polyline,
        face: &PlanarFace,
        distance: f64,
        side: OffsetSide,
        _tolerance: f64,
    ) -> Result<Vec<Polyline>> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(KernelError::InvalidInput(format!(
                "offset distance must be positive, got {distance}"
            ))
            .into());
        }

        let points = curve.points();

        // Probe halfway into the band from the middle segment of the seed
        // curve. A half-distance probe stays clear of the face boundary even
        // when the seed lies on it.
        let k = (points.len() - 1) / 2;
        let dir = segment_direction(&points[k], &points[k + 1])?;
        let left = left_normal(dir);
        let mid = nalgebra::center(&points[k], &points[k + 1]);
        let left_inside = face.contains(&(mid + left * (distance * 0.5)));

        let sign = match side {
            OffsetSide::Inward => {
                if left_inside {
                    1.0
                } else if face.contains(&(mid - left * (distance * 0.5))) {
                    -1.0
                } else {
                    // Neither side of the seed crosses the face interior:
                    // the band has escaped the face. No valid offset.
                    return Ok(Vec::new());
                }
            }
            OffsetSide::Outward => {
                if left_inside {
                    -1.0
                } else {
                    1.0
                }
            }
        };

        let raw = offset_polyline(points, distance * sign)?;
        split_at_self_intersections(&raw)
            .into_iter()
            .map(Polyline::new)
            .collect()
    }

    fn join_curves(&self, curves: &[Polyline], tolerance: f64) -> Result<Vec<Polyline>> {
        let mut remaining: Vec<Polyline> = curves.to_vec();
        let mut joined = Vec::new();

        while let Some(seed) = remaining.pop() {
            let mut chain: Vec<Point3> = seed.points().to_vec();
            let mut extended = true;
            while extended {
                extended = false;
                let tail = chain[chain.len() - 1];
                let head = chain[0];
                let mut idx = 0;
                while idx < remaining.len() {
                    let candidate = &remaining[idx];
                    let (start, end) = (candidate.start_point(), candidate.end_point());
                    if (start - tail).norm() <= tolerance {
                        chain.extend_from_slice(&candidate.points()[1..]);
                    } else if (end - tail).norm() <= tolerance {
                        let reversed = candidate.reversed();
                        chain.extend_from_slice(&reversed.points()[1..]);
                    } else if (end - head).norm() <= tolerance {
                        let mut new_chain = candidate.points().to_vec();
                        new_chain.extend_from_slice(&chain[1..]);
                        chain = new_chain;
                    } else if (start - head).norm() <= tolerance {
                        let reversed = candidate.reversed();
                        let mut new_chain = reversed.points().to_vec();
                        new_chain.extend_from_slice(&chain[1..]);
                        chain = new_chain;
                    } else {
                        idx += 1;
                        continue;
                    }
                    remaining.swap_remove(idx);
                    extended = true;
                    break;
                }
            }
            joined.push(Polyline::new(chain)?);
        }

        Ok(joined)
    }

    fn cap_planar_loop(&self, loop_curve: &Polyline) -> Result<Vec<PlanarRegion>> {
        if !loop_curve.is_closed(self.tolerance) {
            return Ok(Vec::new());
        }

        let points = loop_curve.points();

        // Drop the closing vertex and consecutive near-duplicates.
        let mut boundary: Vec<Point3> = Vec::with_capacity(points.len());
        for &pt in &points[..points.len() - 1] {
            match boundary.last() {
                Some(last) if (pt - last).norm() <= self.tolerance => {}
                _ => boundary.push(pt),
            }
        }
        if boundary.len() > 1 {
            let first = boundary[0];
            if let Some(last) = boundary.last() {
                if (first - last).norm() <= self.tolerance {
                    boundary.pop();
                }
            }
        }

        if boundary.len() < 3 || signed_area_2d(&boundary).abs() < TOLERANCE {
            return Ok(Vec::new());
        }

        Ok(vec![PlanarRegion::new(boundary)?])
    }

    fn make_line(&self, start: Point3, end: Point3) -> Result<Polyline> {
        Polyline::line(start, end)
    }

    fn region_properties(&self, regions: &[PlanarRegion]) -> Result<AreaMassProperties> {
        if regions.is_empty() {
            return Ok(AreaMassProperties::empty());
        }

        let mut area = 0.0;
        let mut weighted_centroid = nalgebra::Vector3::zeros();
        let mut moments = nalgebra::Vector3::zeros();
        for region in regions {
            let props = polygon_properties(region.boundary())?;
            area += props.area;
            weighted_centroid += props.centroid.coords * props.area;
            moments += props.moments;
        }

        Ok(AreaMassProperties {
            area,
            centroid: Point3::from(weighted_centroid / area),
            moments,
        })
    }

    fn face_properties(&self, face: &PlanarFace) -> Result<AreaMassProperties> {
        polygon_properties(face.boundary())
    }
}

/// Computes area, centroid and second moments of a simple polygon.
fn polygon_properties(boundary: &[Point3]) -> Result<AreaMassProperties> {
    let signed = signed_area_2d(boundary);
    if signed.abs() < TOLERANCE {
        return Err(KernelError::Failed("degenerate region: zero area".into()).into());
    }
    let centroid = centroid_2d(boundary)
        .ok_or_else(|| KernelError::Failed("degenerate region: no centroid".into()))?;
    Ok(AreaMassProperties {
        area: signed.abs(),
        centroid,
        moments: second_moments_2d(boundary),
    })
}

/// Offsets an open polyline by a signed distance along the left normals of
/// its segments, with mitered corners and a bevel fallback for parallel
/// segments.
fn offset_polyline(points: &[Point3], distance: f64) -> Result<Vec<Point3>> {
    let segment_count = points.len() - 1;
    let mut segments: Vec<(Point3, Point3, nalgebra::Vector3<f64>)> =
        Vec::with_capacity(segment_count);
    for i in 0..segment_count {
        let dir = segment_direction(&points[i], &points[i + 1])?;
        let shift = left_normal(dir) * distance;
        segments.push((points[i] + shift, points[i + 1] + shift, dir));
    }

    let mut raw = Vec::with_capacity(points.len());
    raw.push(segments[0].0);
    for i in 1..segment_count {
        let (prev_start, prev_end, prev_dir) = segments[i - 1];
        let (next_start, _, next_dir) = segments[i];
        if let Some((t, _)) = line_line_intersect_2d(&prev_start, &prev_dir, &next_start, &next_dir)
        {
            raw.push(prev_start + prev_dir * t);
        } else {
            // Parallel segments: collinear offsets share the corner point;
            // anti-parallel ones get a bevel.
            raw.push(prev_end);
            if (next_start - prev_end).norm() > TOLERANCE {
                raw.push(next_start);
            }
        }
    }
    raw.push(segments[segment_count - 1].1);

    Ok(raw)
}

/// Splits an open polyline at its first self-intersection.
///
/// A crossing between segments `i` and `j` means the curve encloses a loop
/// between the two passages through the crossing point. The result is two
/// disjoint curves: the bypass (start to end, skipping the loop) and the
/// loop itself. A polyline without self-intersections comes back whole.
fn split_at_self_intersections(points: &[Point3]) -> Vec<Vec<Point3>> {
    let n = points.len();
    if n < 4 {
        return vec![points.to_vec()];
    }

    let eps = TOLERANCE * 100.0;
    for i in 0..n - 1 {
        for j in (i + 2)..n - 1 {
            if let Some((pt, t, u)) = segment_segment_intersect_2d(
                &points[i],
                &points[i + 1],
                &points[j],
                &points[j + 1],
            ) {
                // Endpoint-to-endpoint touches are shared vertices, not
                // crossings.
                let t_at_end = t < eps || t > 1.0 - eps;
                let u_at_end = u < eps || u > 1.0 - eps;
                if t_at_end && u_at_end {
                    continue;
                }

                let mut bypass: Vec<Point3> = points[..=i].to_vec();
                bypass.push(pt);
                bypass.extend_from_slice(&points[j + 1..]);

                let mut loop_part: Vec<Point3> = vec![pt];
                loop_part.extend_from_slice(&points[i + 1..=j]);
                loop_part.push(pt);

                return vec![bypass, loop_part];
            }
        }
    }

    vec![points.to_vec()]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn long_edge() -> Polyline {
        Polyline::line(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)).unwrap()
    }

    #[test]
    fn offset_inward_moves_into_face() {
        let kernel = PlanarKernel::new();
        let face = PlanarFace::rectangle(10.0, 1.0).unwrap();
        let curves = kernel
            .offset_on_surface(&long_edge(), &face, 0.1, OffsetSide::Inward, 1e-6)
            .unwrap();

        assert_eq!(curves.len(), 1);
        for pt in curves[0].points() {
            assert_relative_eq!(pt.y, 0.1, epsilon = 1e-9);
        }
    }

    #[test]
    fn offset_outward_moves_away_from_face() {
        let kernel = PlanarKernel::new();
        let face = PlanarFace::rectangle(10.0, 1.0).unwrap();
        let curves = kernel
            .offset_on_surface(&long_edge(), &face, 0.1, OffsetSide::Outward, 1e-6)
            .unwrap();

        assert_eq!(curves.len(), 1);
        for pt in curves[0].points() {
            assert_relative_eq!(pt.y, -0.1, epsilon = 1e-9);
        }
    }

    #[test]
    fn offset_rejects_nonpositive_distance() {
        let kernel = PlanarKernel::new();
        let face = PlanarFace::rectangle(10.0, 1.0).unwrap();
        assert!(kernel
            .offset_on_surface(&long_edge(), &face, 0.0, OffsetSide::Inward, 1e-6)
            .is_err());
        assert!(kernel
            .offset_on_surface(&long_edge(), &face, -0.1, OffsetSide::Inward, 1e-6)
            .is_err());
    }

    #[test]
    fn offset_escaped_band_yields_no_curves() {
        // Seed floats well above a face of height 1: neither side probe
        // lands in the face interior, so no valid offset exists.
        let kernel = PlanarKernel::new();
        let face = PlanarFace::rectangle(10.0, 1.0).unwrap();
        let seed =
            Polyline::line(Point3::new(0.0, 5.0, 0.0), Point3::new(10.0, 5.0, 0.0)).unwrap();
        let curves = kernel
            .offset_on_surface(&seed, &face, 3.0, OffsetSide::Inward, 1e-6)
            .unwrap();
        assert!(curves.is_empty());
    }

    #[test]
    fn offset_miters_corners() {
        // L-shaped seed inside a large face; inward (left of the path) is
        // up/left, the corner miters at (9.9, 0.1).
        let kernel = PlanarKernel::new();
        let face = PlanarFace::rectangle(20.0, 20.0).unwrap();
        let seed = Polyline::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(10.0, 10.0, 0.0),
        ])
        .unwrap();
        let curves = kernel
            .offset_on_surface(&seed, &face, 0.1, OffsetSide::Inward, 1e-6)
            .unwrap();

        assert_eq!(curves.len(), 1);
        let pts = curves[0].points();
        assert_eq!(pts.len(), 3);
        assert_relative_eq!(pts[1].x, 9.9, epsilon = 1e-9);
        assert_relative_eq!(pts[1].y, 0.1, epsilon = 1e-9);
    }

    #[test]
    fn join_band_curves_into_single_loop() {
        let kernel = PlanarKernel::new();
        let base = long_edge();
        let offset =
            Polyline::line(Point3::new(0.0, 0.1, 0.0), Point3::new(10.0, 0.1, 0.0)).unwrap();
        let edge1 = Polyline::line(base.start_point(), offset.start_point()).unwrap();
        let edge2 = Polyline::line(offset.end_point(), base.end_point()).unwrap();

        let loops = kernel
            .join_curves(&[edge1, edge2, base, offset], 1e-6)
            .unwrap();

        assert_eq!(loops.len(), 1);
        assert!(loops[0].is_closed(1e-6));
    }

    #[test]
    fn join_disconnected_curves_stay_apart() {
        let kernel = PlanarKernel::new();
        let a = Polyline::line(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)).unwrap();
        let b = Polyline::line(Point3::new(5.0, 5.0, 0.0), Point3::new(6.0, 5.0, 0.0)).unwrap();

        let joined = kernel.join_curves(&[a, b], 1e-6).unwrap();
        assert_eq!(joined.len(), 2);
    }

    #[test]
    fn join_reverses_curves_when_needed() {
        let kernel = PlanarKernel::new();
        // Second curve oriented backwards relative to the chain.
        let a = Polyline::line(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)).unwrap();
        let b = Polyline::line(Point3::new(2.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)).unwrap();

        let joined = kernel.join_curves(&[a, b], 1e-6).unwrap();
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].points().len(), 3);
    }

    #[test]
    fn cap_open_loop_yields_nothing() {
        let kernel = PlanarKernel::new();
        let open = Polyline::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ])
        .unwrap();
        assert!(kernel.cap_planar_loop(&open).unwrap().is_empty());
    }

    #[test]
    fn cap_closed_loop_yields_one_region() {
        let kernel = PlanarKernel::new();
        let closed = Polyline::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(10.0, 0.1, 0.0),
            Point3::new(0.0, 0.1, 0.0),
            Point3::new(0.0, 0.0, 0.0),
        ])
        .unwrap();

        let regions = kernel.cap_planar_loop(&closed).unwrap();
        assert_eq!(regions.len(), 1);
        assert_relative_eq!(
            signed_area_2d(regions[0].boundary()).abs(),
            1.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn cap_degenerate_loop_yields_nothing() {
        let kernel = PlanarKernel::new();
        // Closed but zero-area: out and back along the same segment.
        let flat = Polyline::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
        ])
        .unwrap();
        assert!(kernel.cap_planar_loop(&flat).unwrap().is_empty());
    }

    #[test]
    fn split_detects_crossing() {
        // The last segment crosses the first at (2, 0).
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(4.0, 2.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
            Point3::new(2.0, -1.0, 0.0),
        ];
        let parts = split_at_self_intersections(&points);
        assert_eq!(parts.len(), 2);
        // Bypass keeps the original endpoints.
        assert_eq!(parts[0][0], points[0]);
        assert_eq!(parts[0][parts[0].len() - 1], points[4]);
        // Loop closes on the crossing point.
        assert_relative_eq!(parts[1][0].x, 2.0, epsilon = 1e-9);
        assert_relative_eq!(parts[1][0].y, 0.0, epsilon = 1e-9);
        assert_eq!(parts[1][0], parts[1][parts[1].len() - 1]);
    }

    #[test]
    fn split_leaves_simple_polyline_whole() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(4.0, 2.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        ];
        let parts = split_at_self_intersections(&points);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], points);
    }

    #[test]
    fn compound_properties_of_two_squares() {
        let kernel = PlanarKernel::new();
        let left = PlanarRegion::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])
        .unwrap();
        let right = PlanarRegion::new(vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ])
        .unwrap();

        let props = kernel.region_properties(&[left, right]).unwrap();
        assert_relative_eq!(props.area, 2.0, epsilon = 1e-9);
        assert_relative_eq!(props.centroid.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(props.centroid.y, 0.5, epsilon = 1e-9);
        // Ix = 2·(1/3); Iy = 1/3 + 7/3.
        assert_relative_eq!(props.moments.x, 2.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(props.moments.y, 8.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_region_list_has_zero_properties() {
        let kernel = PlanarKernel::new();
        let props = kernel.region_properties(&[]).unwrap();
        assert_relative_eq!(props.area, 0.0);
        assert_relative_eq!(props.moments.norm(), 0.0);
    }

    #[test]
    fn face_properties_rectangle() {
        let kernel = PlanarKernel::new();
        let face = PlanarFace::rectangle(10.0, 1.0).unwrap();
        let props = kernel.face_properties(&face).unwrap();
        assert_relative_eq!(props.area, 10.0, epsilon = 1e-9);
        assert_relative_eq!(props.centroid.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(props.centroid.y, 0.5, epsilon = 1e-9);
        assert_relative_eq!(props.moments.x, 10.0 / 3.0, epsilon = 1e-9);
    }
}
