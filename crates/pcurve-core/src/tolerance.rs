/// Tolerances for curve evaluation checks and tessellation.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Allowed gap between an analytic and a numerical derivative
    pub derivative: f64,
    /// Step used for central-difference derivatives
    pub step: f64,
    /// Maximum chord deviation when tessellating a curve (in model units)
    pub chord: f64,
}

impl Tolerance {
    pub const DEFAULT_DERIVATIVE: f64 = 1e-4;
    pub const DEFAULT_STEP: f64 = 1e-6;
    pub const DEFAULT_CHORD: f64 = 1e-3;

    /// Check if two derivative components agree within derivative tolerance
    pub fn derivative_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.derivative
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            derivative: Self::DEFAULT_DERIVATIVE,
            step: Self::DEFAULT_STEP,
            chord: Self::DEFAULT_CHORD,
        }
    }
}
