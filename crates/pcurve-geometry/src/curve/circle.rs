//! Circle curve.

use pcurve_core::{CurveError, Result, Validate};
use pcurve_math::{dvec3, Point3, Vector3};
use serde::Serialize;
use tracing::debug;

use super::{Curve, CurveKind};

/// A circle of radius `r` centred on the origin in the XY plane.
///
/// `P(t) = (r cos t, r sin t, 0)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Build a circle, rejecting a non-positive or non-finite radius.
    pub fn new(radius: f64) -> Result<Self> {
        let circle = Self { radius };
        circle.validate()?;
        debug!(radius, "circle constructed");
        Ok(circle)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Validate for Circle {
    fn validate(&self) -> Result<()> {
        CurveError::require_positive("radius", self.radius)?;
        Ok(())
    }
}

impl Curve for Circle {
    fn kind(&self) -> CurveKind {
        CurveKind::Circle
    }

    fn characteristic_radius(&self) -> f64 {
        self.radius
    }

    fn point_at(&self, t: f64) -> Point3 {
        let (sin, cos) = t.sin_cos();
        dvec3(self.radius * cos, self.radius * sin, 0.0)
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        let (sin, cos) = t.sin_cos();
        dvec3(-self.radius * sin, self.radius * cos, 0.0)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
