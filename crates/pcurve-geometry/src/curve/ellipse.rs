//! Ellipse curve.

use pcurve_core::{CurveError, Result, Validate};
use pcurve_math::{dvec3, Point3, Vector3};
use serde::Serialize;
use tracing::debug;

use super::{Curve, CurveKind};

/// An axis-aligned ellipse centred on the origin in the XY plane.
///
/// `P(t) = (rx cos t, ry sin t, 0)`. Either semi-axis may be the larger one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ellipse {
    radius_x: f64,
    radius_y: f64,
}

impl Ellipse {
    pub fn new(radius_x: f64, radius_y: f64) -> Result<Self> {
        let ellipse = Self { radius_x, radius_y };
        ellipse.validate()?;
        debug!(radius_x, radius_y, "ellipse constructed");
        Ok(ellipse)
    }

    /// Semi-axis along X.
    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    /// Semi-axis along Y.
    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }
}

impl Validate for Ellipse {
    fn validate(&self) -> Result<()> {
        CurveError::require_positive("radius_x", self.radius_x)?;
        CurveError::require_positive("radius_y", self.radius_y)?;
        Ok(())
    }
}

impl Curve for Ellipse {
    fn kind(&self) -> CurveKind {
        CurveKind::Ellipse
    }

    fn characteristic_radius(&self) -> f64 {
        self.radius_x.max(self.radius_y)
    }

    fn point_at(&self, t: f64) -> Point3 {
        let (sin, cos) = t.sin_cos();
        dvec3(self.radius_x * cos, self.radius_y * sin, 0.0)
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        let (sin, cos) = t.sin_cos();
        dvec3(-self.radius_x * sin, self.radius_y * cos, 0.0)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
