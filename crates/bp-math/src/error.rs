//! Error types for parameter validation.

use thiserror::Error;

/// Result type alias for validated constructors.
pub type Result<T> = std::result::Result<T, ParamError>;

/// Rejected shape parameter.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParamError {
    #[error("invalid alpha: {0} (must be finite and > 0)")]
    InvalidAlpha(f64),

    #[error("invalid beta: {0} (must be finite and > 0)")]
    InvalidBeta(f64),
}

impl ParamError {
    /// Name of the offending parameter.
    pub fn param(&self) -> &'static str {
        match self {
            ParamError::InvalidAlpha(_) => "alpha",
            ParamError::InvalidBeta(_) => "beta",
        }
    }

    /// The rejected value.
    pub fn value(&self) -> f64 {
        match self {
            ParamError::InvalidAlpha(v) | ParamError::InvalidBeta(v) => *v,
        }
    }
}
