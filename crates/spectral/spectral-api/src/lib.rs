//! Spectral Consumer API
//!
//! Configuration types, builders, and report types for spectral analysis.
//!
//! This crate provides:
//! - Configuration types for the ranking, decomposition, and export
//! - Report types combining both analyses
//! - Re-exports from SPI and core for convenience

pub mod config;
pub mod report;

// Re-export from core
pub use spectral_core::{
    decompose, decomposition, dominant_frequencies, transform, Decomposition, FrequencyDomain,
    SeasonalDecomposer, SpectralTransform,
};

// Re-export traits and models from SPI
pub use spectral_spi::{
    Complex, Decomposer, DecompositionResult, DecompositionRow, DominantFrequency,
    FrequencyTransform, Result, Signal, SpectralError, Spectrum,
};

pub use config::{
    AnalysisConfig, AnalysisConfigBuilder, DecompositionConfig, ExportConfig,
    DEFAULT_EXPORT_ROWS, DEFAULT_PERIOD, DEFAULT_TOP_K,
};
pub use report::{analyze, spectrum_report, AnalysisReport, FrequencyReport, SpectrumReport};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{AnalysisConfig, AnalysisConfigBuilder, DecompositionConfig, ExportConfig};
    pub use crate::report::{analyze, spectrum_report, AnalysisReport};
    pub use spectral_core::{
        decompose, Decomposition, FrequencyDomain, SeasonalDecomposer, SpectralTransform,
    };
    pub use spectral_spi::{
        Decomposer, DecompositionResult, DominantFrequency, FrequencyTransform, Result, Signal,
        SpectralError, Spectrum,
    };
}
