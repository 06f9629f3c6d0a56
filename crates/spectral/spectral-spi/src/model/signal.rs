//! Signal model

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpectralError};

/// Validated real-valued time series.
///
/// A `Signal` always holds at least one sample and every sample is finite.
/// It is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Signal {
    samples: Vec<f64>,
}

impl Signal {
    /// Validate and wrap a sample vector
    pub fn new(samples: Vec<f64>) -> Result<Self> {
        validate_samples(&samples)?;
        Ok(Self { samples })
    }

    /// Validate and copy a sample slice
    pub fn from_slice(samples: &[f64]) -> Result<Self> {
        validate_samples(samples)?;
        Ok(Self {
            samples: samples.to_vec(),
        })
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false` for a constructed signal
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.samples
    }
}

impl TryFrom<Vec<f64>> for Signal {
    type Error = SpectralError;

    fn try_from(samples: Vec<f64>) -> Result<Self> {
        Signal::new(samples)
    }
}

impl From<Signal> for Vec<f64> {
    fn from(signal: Signal) -> Self {
        signal.samples
    }
}

impl AsRef<[f64]> for Signal {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}

/// Largest accepted `Σ |x|`.
///
/// Every transform coefficient is bounded by the sum of sample magnitudes, so
/// staying under half of `f64::MAX` keeps all butterflies finite.
pub const MAX_TOTAL_MAGNITUDE: f64 = f64::MAX / 2.0;

/// Check the input preconditions shared by every engine entry point
pub fn validate_samples(samples: &[f64]) -> Result<()> {
    if samples.is_empty() {
        return Err(SpectralError::EmptySignal);
    }
    if let Some((index, &value)) = samples.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(SpectralError::NonFiniteSample { index, value });
    }
    let total: f64 = samples.iter().map(|v| v.abs()).sum();
    if total > MAX_TOTAL_MAGNITUDE {
        return Err(SpectralError::SampleRangeExceeded {
            limit: MAX_TOTAL_MAGNITUDE,
        });
    }
    Ok(())
}
