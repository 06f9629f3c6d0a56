//! Spectrum and dominant-frequency models

use serde::{Deserialize, Serialize};

/// Non-redundant half of a transformed real signal.
///
/// `magnitude` and `phase` both hold `transform_len / 2` bins. Bin 0 is the
/// DC component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    /// Padded transform length N (a power of two)
    pub transform_len: usize,
    /// Absolute value per bin
    pub magnitude: Vec<f64>,
    /// Principal argument per bin, in radians
    pub phase: Vec<f64>,
}

impl Spectrum {
    /// Number of exposed bins (`transform_len / 2`)
    pub fn bins(&self) -> usize {
        self.magnitude.len()
    }

    /// Magnitude of the DC bin, if any bin is exposed
    pub fn dc(&self) -> Option<f64> {
        self.magnitude.first().copied()
    }
}

/// A ranked frequency bin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DominantFrequency {
    /// Bin index (never 0 in a ranking)
    pub bin: usize,
    /// Magnitude of the bin
    pub magnitude: f64,
}

impl DominantFrequency {
    pub fn new(bin: usize, magnitude: f64) -> Self {
        Self { bin, magnitude }
    }

    /// Period in samples, measured against the unpadded signal length.
    ///
    /// This matches the reconstruction convention, which also uses the
    /// signal length rather than the padded transform length.
    pub fn period(&self, signal_len: usize) -> f64 {
        signal_len as f64 / self.bin as f64
    }
}
