//! Closed sum type over every curve variant.

use pcurve_core::{Result, Validate};
use pcurve_math::{Point3, Vector3};
use serde::Serialize;

use super::{Circle, Curve, CurveKind, Ellipse, Spiral};

/// Any supported curve, stored by value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnyCurve {
    Circle(Circle),
    Ellipse(Ellipse),
    Spiral(Spiral),
}

impl AnyCurve {
    /// Borrow the variant as a trait object.
    pub fn as_curve(&self) -> &dyn Curve {
        match self {
            AnyCurve::Circle(c) => c,
            AnyCurve::Ellipse(e) => e,
            AnyCurve::Spiral(s) => s,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            AnyCurve::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_ellipse(&self) -> Option<&Ellipse> {
        match self {
            AnyCurve::Ellipse(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_spiral(&self) -> Option<&Spiral> {
        match self {
            AnyCurve::Spiral(s) => Some(s),
            _ => None,
        }
    }
}

impl Curve for AnyCurve {
    fn kind(&self) -> CurveKind {
        match self {
            AnyCurve::Circle(_) => CurveKind::Circle,
            AnyCurve::Ellipse(_) => CurveKind::Ellipse,
            AnyCurve::Spiral(_) => CurveKind::Spiral,
        }
    }

    fn characteristic_radius(&self) -> f64 {
        self.as_curve().characteristic_radius()
    }

    fn point_at(&self, t: f64) -> Point3 {
        self.as_curve().point_at(t)
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        self.as_curve().derivative_at(t)
    }

    fn domain(&self) -> (f64, f64) {
        self.as_curve().domain()
    }

    fn is_closed(&self) -> bool {
        self.as_curve().is_closed()
    }
}

impl Validate for AnyCurve {
    fn validate(&self) -> Result<()> {
        match self {
            AnyCurve::Circle(c) => c.validate(),
            AnyCurve::Ellipse(e) => e.validate(),
            AnyCurve::Spiral(s) => s.validate(),
        }
    }
}

impl From<Circle> for AnyCurve {
    fn from(c: Circle) -> Self {
        AnyCurve::Circle(c)
    }
}

impl From<Ellipse> for AnyCurve {
    fn from(e: Ellipse) -> Self {
        AnyCurve::Ellipse(e)
    }
}

impl From<Spiral> for AnyCurve {
    fn from(s: Spiral) -> Self {
        AnyCurve::Spiral(s)
    }
}
