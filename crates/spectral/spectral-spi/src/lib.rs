//! Spectral Service Provider Interface
//!
//! Defines traits, models, and errors for frequency transforms and seasonal
//! decomposition.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Decomposer, FrequencyTransform};
pub use error::{Result, SpectralError};
pub use model::{
    validate_samples, DecompositionResult, DecompositionRow, DominantFrequency, Signal, Spectrum,
    MAX_TOTAL_MAGNITUDE,
};

pub use num_complex::Complex;
