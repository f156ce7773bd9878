//! Random assembly of curve collections from an injected sampler.

use pcurve_core::Result;
use pcurve_geometry::{Circle, Ellipse, Spiral};
use pcurve_sampler::Sampler;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::collection::CurveCollection;

/// Closed intervals from which curve parameters are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRanges {
    pub circle_radius: (f64, f64),
    pub ellipse_radius_x: (f64, f64),
    pub ellipse_radius_y: (f64, f64),
    pub spiral_radius: (f64, f64),
    pub spiral_step: (f64, f64),
}

impl Default for SampleRanges {
    fn default() -> Self {
        Self {
            circle_radius: (1.0, 5.0),
            ellipse_radius_x: (1.0, 5.0),
            ellipse_radius_y: (0.5, 3.0),
            spiral_radius: (1.0, 5.0),
            spiral_step: (0.1, 0.5),
        }
    }
}

fn draw(sampler: &mut impl Sampler, (min, max): (f64, f64)) -> Result<f64> {
    sampler.sample(min, max)
}

/// Build `sets` groups of one circle, one ellipse and one spiral, in that order.
///
/// Values are drawn as: circle radius, ellipse `rx`, ellipse `ry`,
/// spiral radius, spiral step. The first sampler or construction error
/// aborts assembly.
#[instrument(skip(sampler, ranges))]
pub fn assemble_random(
    sampler: &mut impl Sampler,
    ranges: &SampleRanges,
    sets: usize,
) -> Result<CurveCollection> {
    let mut curves = CurveCollection::new();
    for _ in 0..sets {
        curves.push(Circle::new(draw(sampler, ranges.circle_radius)?)?);

        let rx = draw(sampler, ranges.ellipse_radius_x)?;
        let ry = draw(sampler, ranges.ellipse_radius_y)?;
        curves.push(Ellipse::new(rx, ry)?);

        let radius = draw(sampler, ranges.spiral_radius)?;
        let step = draw(sampler, ranges.spiral_step)?;
        curves.push(Spiral::new(radius, step)?);
    }
    info!(curves = curves.len(), "collection assembled");
    Ok(curves)
}
