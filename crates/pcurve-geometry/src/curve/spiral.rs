//! Helical spiral curve.

use std::f64::consts::TAU;

use pcurve_core::{CurveError, Result, Validate};
use pcurve_math::{dvec3, Point3, Vector3};
use serde::Serialize;
use tracing::debug;

use super::{Curve, CurveKind};

/// A helix of radius `r` around the Z axis rising `step` per full turn.
///
/// `P(t) = (r cos t, r sin t, step * t / 2PI)`
///
/// `step` may be zero (a flat circle) or negative (descending helix).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spiral {
    radius: f64,
    step: f64,
}

impl Spiral {
    pub fn new(radius: f64, step: f64) -> Result<Self> {
        let spiral = Self { radius, step };
        spiral.validate()?;
        debug!(radius, step, "spiral constructed");
        Ok(spiral)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Vertical distance per full revolution.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Vertical distance per radian of `t`; also the constant `dz/dt`.
    pub fn rise_per_radian(&self) -> f64 {
        self.step / TAU
    }
}

impl Validate for Spiral {
    fn validate(&self) -> Result<()> {
        CurveError::require_positive("radius", self.radius)?;
        CurveError::require_finite("step", self.step)?;
        Ok(())
    }
}

impl Curve for Spiral {
    fn kind(&self) -> CurveKind {
        CurveKind::Spiral
    }

    fn characteristic_radius(&self) -> f64 {
        self.radius
    }

    fn point_at(&self, t: f64) -> Point3 {
        let (sin, cos) = t.sin_cos();
        dvec3(self.radius * cos, self.radius * sin, self.step * t / TAU)
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        let (sin, cos) = t.sin_cos();
        dvec3(-self.radius * sin, self.radius * cos, self.rise_per_radian())
    }

    fn is_closed(&self) -> bool {
        self.step == 0.0
    }
}
