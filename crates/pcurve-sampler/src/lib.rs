//! Sources of construction parameters for curves.
//!
//! A [`Sampler`] produces a value in a closed interval `[min, max]`.
//! [`UniformSampler`] draws from a random number generator;
//! [`FixedSequence`] replays known values so callers can be tested
//! deterministically.

mod fixed;
mod uniform;

use pcurve_core::{CurveError, Result};

pub use fixed::FixedSequence;
pub use uniform::UniformSampler;

/// Produces values in a closed real interval.
pub trait Sampler {
    /// Return a value in `[min, max]`.
    ///
    /// Fails with [`CurveError::SamplerRange`] when `min > max` or either
    /// bound is not finite.
    fn sample(&mut self, min: f64, max: f64) -> Result<f64>;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn sample(&mut self, min: f64, max: f64) -> Result<f64> {
        (**self).sample(min, max)
    }
}

/// Validate a sampling interval.
///
/// Besides ordering and finite bounds, the width `max - min` must stay
/// finite once scaled by the generator's largest unit draw, `1 - EPSILON`.
pub fn check_range(min: f64, max: f64) -> Result<()> {
    let width = max - min;
    let span_finite = width.is_finite() && (width / (1.0 - f64::EPSILON)).is_finite();
    if min.is_finite() && max.is_finite() && min <= max && span_finite {
        Ok(())
    } else {
        Err(CurveError::SamplerRange { min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert!(check_range(1.0, 5.0).is_ok());
        assert!(check_range(2.0, 2.0).is_ok());
        assert!(matches!(
            check_range(5.0, 1.0),
            Err(CurveError::SamplerRange { min, max }) if min == 5.0 && max == 1.0
        ));
        assert!(check_range(f64::NAN, 1.0).is_err());
        assert!(check_range(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_check_range_rejects_overflowing_width() {
        assert!(matches!(
            check_range(-f64::MAX, f64::MAX),
            Err(CurveError::SamplerRange { .. })
        ));
        assert!(check_range(0.0, f64::MAX).is_err());
        assert!(check_range(0.0, f64::MAX / 2.0).is_ok());
        assert!(check_range(-f64::MAX / 4.0, f64::MAX / 4.0).is_ok());
    }

    #[test]
    fn test_sampler_through_mut_ref() {
        fn draw(mut s: impl Sampler) -> f64 {
            s.sample(0.0, 10.0).unwrap()
        }
        let mut seq = FixedSequence::new(vec![3.0, 4.0]);
        assert_eq!(draw(&mut seq), 3.0);
        assert_eq!(draw(&mut seq), 4.0);
    }
}
