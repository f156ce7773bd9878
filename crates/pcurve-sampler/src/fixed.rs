use pcurve_core::Result;

use crate::{check_range, Sampler};

/// Replays a fixed list of values, cycling when exhausted.
///
/// Each value is clamped into the requested interval, so the stub never
/// breaks the `[min, max]` contract. An empty list always yields `min`.
#[derive(Debug, Clone, Default)]
pub struct FixedSequence {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedSequence {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl Sampler for FixedSequence {
    fn sample(&mut self, min: f64, max: f64) -> Result<f64> {
        check_range(min, max)?;
        if self.values.is_empty() {
            return Ok(min);
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        Ok(value.clamp(min, max))
    }
}
