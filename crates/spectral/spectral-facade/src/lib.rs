//! Spectral Facade
//!
//! High-level API for spectral seasonality analysis. Re-exports all public
//! types from the spectral stack for convenient usage.
//!
//! # Example
//!
//! ```rust
//! use spectral_facade::{decompose, dominant_frequencies};
//!
//! let hourly: Vec<f64> = (0..96)
//!     .map(|i| (2.0 * std::f64::consts::PI * i as f64 / 24.0).cos())
//!     .collect();
//!
//! let ranked = dominant_frequencies(&hourly, 3).unwrap();
//! assert!(ranked.iter().all(|f| f.bin != 0));
//!
//! let decomposition = decompose(&hourly, 24).unwrap();
//! assert_eq!(decomposition.len(), 96);
//! ```

// Re-export everything from API (which includes SPI and core)
pub use spectral_api::*;

// Explicit re-exports for documentation
pub use spectral_api::prelude;

// Re-export core modules for direct access
pub use spectral_core::{decomposition, transform};

pub use spectral_core::{
    extract_residual, extract_seasonal, extract_trend, fft_in_place, ifft_in_place, padded_len,
    seasonality_strength, Radix2, SeasonalExtraction, DEFAULT_HARMONICS,
};
