//! Data Source Service Provider Interface
//!
//! Defines traits and types for loading generation time series.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::SeriesSource;
pub use error::{DataError, Result};
pub use model::Series;
