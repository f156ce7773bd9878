//! Parametric curve geometry: circles, ellipses, and helical spirals.

pub mod curve;
pub mod tessellate;

pub use curve::{AnyCurve, Circle, Curve, CurveKind, Ellipse, Spiral};
