//! Numerical differentiation of vector-valued functions of one parameter.

use crate::Vector3;

/// Central-difference estimate of `f'(t)` with step `h`.
///
/// Error is `O(h^2)` for smooth `f`, so `h = 1e-6` gives roughly six
/// significant digits before cancellation starts to dominate.
pub fn central_difference<F>(f: F, t: f64, h: f64) -> Vector3
where
    F: Fn(f64) -> Vector3,
{
    (f(t + h) - f(t - h)) / (2.0 * h)
}
