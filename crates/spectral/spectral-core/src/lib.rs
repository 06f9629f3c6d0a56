//! Spectral Core
//!
//! Core implementations of the radix-2 frequency transform and the
//! trend / seasonal / residual decomposition built on top of it.

pub mod decomposition;
pub mod transform;

// Re-export SPI traits for implementations
pub use spectral_spi::{
    Complex, Decomposer, DecompositionResult, DecompositionRow, DominantFrequency,
    FrequencyTransform, Result, Signal, SpectralError, Spectrum,
};

// Re-export main types
pub use decomposition::{
    decompose, extract_residual, extract_seasonal, extract_trend, seasonality_strength,
    Decomposition, SeasonalDecomposer, SeasonalExtraction, DEFAULT_HARMONICS,
};
pub use transform::{
    dominant_frequencies, fft_in_place, ifft_in_place, padded_len, FrequencyDomain, Radix2,
    SpectralTransform,
};
