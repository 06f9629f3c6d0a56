//! Spectral error types

use thiserror::Error;

/// Errors that can occur during spectral analysis and decomposition
///
/// Every variant is a precondition violation detected before any
/// computation starts. A seasonal and residual component that both vanish
/// is not an error: the strength score resolves that case to `0.0`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectralError {
    /// Signal with no samples
    #[error("Invalid input: signal must contain at least one sample")]
    EmptySignal,

    /// NaN or infinite sample
    #[error("Invalid input: sample {index} is not finite ({value})")]
    NonFiniteSample { index: usize, value: f64 },

    /// Samples too large in total for the transform to stay finite
    #[error("Invalid input: sum of sample magnitudes exceeds {limit:e}")]
    SampleRangeExceeded { limit: f64 },

    /// Invalid period for decomposition
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// Raw transform called with a length that is not a power of two
    #[error("Invalid input: transform length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl SpectralError {
    /// Whether this error belongs to the invalid-input family.
    ///
    /// All current variants do; the method exists so callers can match on
    /// the category rather than on individual variants.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SpectralError::EmptySignal
                | SpectralError::NonFiniteSample { .. }
                | SpectralError::SampleRangeExceeded { .. }
                | SpectralError::InvalidPeriod(_)
                | SpectralError::NotPowerOfTwo(_)
                | SpectralError::InvalidParameter { .. }
        )
    }
}
