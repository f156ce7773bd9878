use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurveError {
    #[error("Invalid parameter: {name} must be positive and finite, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Sampler range error: [{min}, {max}] is not a valid closed interval")]
    SamplerRange { min: f64, max: f64 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CurveError {
    /// Reject `value` unless it is strictly positive and finite.
    pub fn require_positive(name: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidParameter { name, value })
        }
    }

    /// Reject `value` unless it is finite. Sign is unrestricted.
    pub fn require_finite(name: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::InvalidParameter { name, value })
        }
    }
}

pub type Result<T> = std::result::Result<T, CurveError>;
