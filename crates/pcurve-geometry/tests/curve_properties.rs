use std::f64::consts::{PI, TAU};

use approx::assert_abs_diff_eq;
use pcurve_core::{CurveError, Tolerance};
use pcurve_geometry::curve::check_curve_derivative;
use pcurve_geometry::{AnyCurve, Circle, Curve, Ellipse, Spiral};
use pcurve_math::{central_difference, dvec3};
use proptest::prelude::*;

fn radius() -> impl Strategy<Value = f64> {
    0.1f64..10.0
}

fn param() -> impl Strategy<Value = f64> {
    -50.0f64..50.0
}

fn any_curve() -> impl Strategy<Value = AnyCurve> {
    prop_oneof![
        radius().prop_map(|r| AnyCurve::from(Circle::new(r).unwrap())),
        (radius(), radius()).prop_map(|(rx, ry)| AnyCurve::from(Ellipse::new(rx, ry).unwrap())),
        (radius(), -5.0f64..5.0).prop_map(|(r, s)| AnyCurve::from(Spiral::new(r, s).unwrap())),
    ]
}

proptest! {
    #[test]
    fn derivative_matches_central_difference(curve in any_curve(), t in param()) {
        let analytic = curve.derivative_at(t);
        let numeric = central_difference(|s| curve.point_at(s), t, 1e-6);
        prop_assert!((analytic - numeric).abs().max_element() < 1e-4,
            "{:?} at t={}: analytic={:?} numeric={:?}", curve, t, analytic, numeric);
        prop_assert!(check_curve_derivative(&curve, t, Tolerance::default()));
    }

    #[test]
    fn circle_stays_on_circle(r in radius(), t in param()) {
        let p = Circle::new(r).unwrap().point_at(t);
        prop_assert!((p.x * p.x + p.y * p.y - r * r).abs() < 1e-9 * r * r);
        prop_assert_eq!(p.z, 0.0);
    }

    #[test]
    fn ellipse_satisfies_implicit_equation(rx in radius(), ry in radius(), t in param()) {
        let ellipse = Ellipse::new(rx, ry).unwrap();
        let p = ellipse.point_at(t);
        let lhs = (p.x / rx).powi(2) + (p.y / ry).powi(2);
        prop_assert!((lhs - 1.0).abs() < 1e-9);
        prop_assert_eq!(ellipse.characteristic_radius(), rx.max(ry));
    }

    #[test]
    fn spiral_height_is_linear(r in radius(), s in -5.0f64..5.0, t in param()) {
        let p = Spiral::new(r, s).unwrap().point_at(t);
        prop_assert_eq!(p.z, s * t / TAU);
        prop_assert!((p.x * p.x + p.y * p.y - r * r).abs() < 1e-9 * r * r);
    }
}

#[test]
fn test_reference_points_at_quarter_turn() {
    let t = PI / 4.0;
    let circle = Circle::new(3.0).unwrap();
    let ellipse = Ellipse::new(4.0, 2.0).unwrap();
    let spiral = Spiral::new(2.0, 0.3).unwrap();

    assert_abs_diff_eq!(circle.point_at(t), dvec3(2.1213, 2.1213, 0.0), epsilon = 1e-3);
    assert_abs_diff_eq!(ellipse.point_at(t), dvec3(2.8284, 1.4142, 0.0), epsilon = 1e-3);
    assert_abs_diff_eq!(spiral.point_at(t), dvec3(1.4142, 1.4142, 0.0375), epsilon = 1e-3);

    assert_abs_diff_eq!(circle.derivative_at(t), dvec3(-2.1213, 2.1213, 0.0), epsilon = 1e-3);
    assert_abs_diff_eq!(ellipse.derivative_at(t), dvec3(-2.8284, 1.4142, 0.0), epsilon = 1e-3);
    assert_abs_diff_eq!(spiral.derivative_at(t), dvec3(-1.4142, 1.4142, 0.0477), epsilon = 1e-3);
}

#[test]
fn test_non_positive_radius_rejected_for_every_variant() {
    for bad in [0.0, -1.0] {
        assert!(matches!(Circle::new(bad), Err(CurveError::InvalidParameter { .. })));
        assert!(matches!(Ellipse::new(bad, 1.0), Err(CurveError::InvalidParameter { .. })));
        assert!(matches!(Ellipse::new(1.0, bad), Err(CurveError::InvalidParameter { .. })));
        assert!(matches!(Spiral::new(bad, 0.3), Err(CurveError::InvalidParameter { .. })));
    }
}

#[test]
fn test_trait_objects_in_one_slice() {
    let circle = Circle::new(1.0).unwrap();
    let spiral = Spiral::new(1.0, 1.0).unwrap();
    let curves: [&dyn Curve; 2] = [&circle, &spiral];
    let closed: Vec<bool> = curves.iter().map(|c| c.is_closed()).collect();
    assert_eq!(closed, vec![true, false]);
}
