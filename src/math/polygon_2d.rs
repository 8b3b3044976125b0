use super::{Point3, Vector3, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a polygon in the XY plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the area centroid of a polygon in the XY plane.
///
/// Orientation-independent: the signed sums cancel against the signed area.
/// Returns `None` for polygons with fewer than 3 vertices or near-zero area.
#[must_use]
pub fn centroid_2d(points: &[Point3]) -> Option<Point3> {
    let n = points.len();
    if n < 3 {
        return None;
    }
    let area = signed_area_2d(points);
    if area.abs() < TOLERANCE {
        return None;
    }
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        let cross = points[i].x * points[j].y - points[j].x * points[i].y;
        cx += (points[i].x + points[j].x) * cross;
        cy += (points[i].y + points[j].y) * cross;
    }
    let scale = 1.0 / (6.0 * area);
    Some(Point3::new(cx * scale, cy * scale, 0.0))
}

/// Computes the second moments of area of a polygon in the XY plane about
/// the world coordinate axes.
///
/// Returns `(Ix, Iy, Iz)` where `Ix = ∫y² dA`, `Iy = ∫x² dA` and
/// `Iz = Ix + Iy` (polar moment; the region lies in the `z = 0` plane).
/// The result is orientation-independent and non-negative.
#[must_use]
pub fn second_moments_2d(points: &[Point3]) -> Vector3 {
    let n = points.len();
    if n < 3 {
        return Vector3::zeros();
    }
    let sign = signed_area_2d(points).signum();
    let mut ix = 0.0;
    let mut iy = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        let cross = points[i].x * points[j].y - points[j].x * points[i].y;
        ix += (points[i].y * points[i].y
            + points[i].y * points[j].y
            + points[j].y * points[j].y)
            * cross;
        iy += (points[i].x * points[i].x
            + points[i].x * points[j].x
            + points[j].x * points[j].x)
            * cross;
    }
    let ix = ix / 12.0 * sign;
    let iy = iy / 12.0 * sign;
    Vector3::new(ix, iy, ix + iy)
}

/// Even-odd point containment test for a polygon in the XY plane.
///
/// Points on the boundary are not guaranteed a consistent answer; callers
/// probing near an edge should displace the probe point first.
#[must_use]
pub fn contains_point_2d(points: &[Point3], pt: &Point3) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (&points[i], &points[j]);
        if (pi.y > pt.y) != (pj.y > pt.y) {
            let x_cross = pi.x + (pt.y - pi.y) * (pj.x - pi.x) / (pj.y - pi.y);
            if pt.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if the segment has zero length.
pub fn segment_direction(a: &Point3, b: &Point3) -> Result<Vector3> {
    let d = b - a;
    let len = (d.x * d.x + d.y * d.y).sqrt();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(Vector3::new(d.x / len, d.y / len, 0.0))
}

/// Returns the left-pointing normal of a direction vector in the XY plane.
#[must_use]
pub fn left_normal(dir: Vector3) -> Vector3 {
    Vector3::new(-dir.y, dir.x, 0.0)
}

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point3,
    d1: &Vector3,
    p2: &Point3,
    d2: &Vector3,
) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() < TOLERANCE {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point3,
    a1: &Point3,
    b0: &Point3,
    b1: &Point3,
) -> Option<(Point3, f64, f64)> {
    let da = Vector3::new(a1.x - a0.x, a1.y - a0.y, 0.0);
    let db = Vector3::new(b1.x - b0.x, b1.y - b0.y, 0.0);

    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() < TOLERANCE {
        return None;
    }

    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;
    let t = (dx * db.y - dy * db.x) / cross;
    let u = (dx * da.y - dy * da.x) / cross;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        let pt = Point3::new(a0.x + da.x * t_clamped, a0.y + da.y * t_clamped, a0.z);
        Some((pt, t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}
