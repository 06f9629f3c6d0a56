//! Error module containing error types and result aliases

mod spectral_error;

pub use spectral_error::SpectralError;

/// Result type for spectral operations
pub type Result<T> = std::result::Result<T, SpectralError>;
