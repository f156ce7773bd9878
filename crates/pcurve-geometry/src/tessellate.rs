//! Tessellation of curves into polylines and their bounds.

use pcurve_math::{Aabb3, Point3};

use crate::curve::Curve;

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

/// Convert one revolution of a curve to a polyline using adaptive subdivision.
///
/// Segments are split while the curve's midpoint deviates from the chord
/// midpoint by more than `tolerance`. The domain is first cut into quarter
/// turns so a closed curve cannot collapse onto a single chord.
pub fn curve_to_polyline(curve: &dyn Curve, tolerance: f64) -> Vec<Point3> {
    let (t_min, t_max) = curve.domain();
    let quarter = (t_max - t_min) / 4.0;
    let mut points = vec![curve.point_at(t_min)];
    for i in 0..4 {
        let t0 = t_min + quarter * i as f64;
        subdivide_curve(curve, t0, t0 + quarter, tolerance, &mut points, 0);
    }
    points
}

fn subdivide_curve(
    curve: &dyn Curve,
    t0: f64,
    t1: f64,
    tolerance: f64,
    points: &mut Vec<Point3>,
    depth: u32,
) {
    let p1 = curve.point_at(t1);
    if depth >= MAX_DEPTH {
        points.push(p1);
        return;
    }

    let t_mid = (t0 + t1) * 0.5;
    let chord_mid = (curve.point_at(t0) + p1) * 0.5;
    let deviation = (curve.point_at(t_mid) - chord_mid).length();

    if deviation > tolerance {
        subdivide_curve(curve, t0, t_mid, tolerance, points, depth + 1);
        subdivide_curve(curve, t_mid, t1, tolerance, points, depth + 1);
    } else {
        points.push(p1);
    }
}

/// Bounding box of one revolution, approximated through its polyline.
pub fn curve_bounds(curve: &dyn Curve, tolerance: f64) -> Option<Aabb3> {
    Aabb3::from_points(&curve_to_polyline(curve, tolerance))
}
