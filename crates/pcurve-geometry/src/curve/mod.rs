//! Curve traits and implementations.

mod any;
mod circle;
mod ellipse;
mod spiral;

use std::fmt;
use std::str::FromStr;

use pcurve_core::{CurveError, Tolerance};
use pcurve_math::{central_difference, Point3, Vector3};
use serde::{Deserialize, Serialize};

pub use any::AnyCurve;
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use spiral::Spiral;

/// Discriminant identifying which variant a curve is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    Circle,
    Ellipse,
    Spiral,
}

impl CurveKind {
    pub const ALL: [CurveKind; 3] = [CurveKind::Circle, CurveKind::Ellipse, CurveKind::Spiral];

    pub fn name(self) -> &'static str {
        match self {
            CurveKind::Circle => "Circle",
            CurveKind::Ellipse => "Ellipse",
            CurveKind::Spiral => "Spiral",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveKind {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurveKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CurveError::Parse(format!("unknown curve kind '{s}'")))
    }
}

/// Trait for parametric curves in 3D space.
///
/// Both evaluations are total: every real `t` is valid, and
/// `derivative_at` is the exact analytic derivative of `point_at`.
pub trait Curve: Send + Sync {
    /// Which variant this curve is.
    fn kind(&self) -> CurveKind;

    /// Scalar used to compare and aggregate curves.
    fn characteristic_radius(&self) -> f64;

    /// Evaluate the curve position at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the first derivative with respect to `t`.
    fn derivative_at(&self, t: f64) -> Vector3;

    /// Return one revolution of the parameter, `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64) {
        (0.0, std::f64::consts::TAU)
    }

    /// Whether the curve returns to its start after one revolution.
    fn is_closed(&self) -> bool {
        false
    }
}

/// Compare the analytic derivative at `t` with a central-difference estimate.
pub fn check_curve_derivative(curve: &dyn Curve, t: f64, tolerance: Tolerance) -> bool {
    let analytic = curve.derivative_at(t);
    let numeric = central_difference(|s| curve.point_at(s), t, tolerance.step);
    tolerance.derivative_eq(analytic.x, numeric.x)
        && tolerance.derivative_eq(analytic.y, numeric.y)
        && tolerance.derivative_eq(analytic.z, numeric.z)
}
