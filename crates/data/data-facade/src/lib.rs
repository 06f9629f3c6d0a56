//! Data Source Facade
//!
//! Unified re-exports for the data module.
//!
//! This facade provides a single entry point for all data source functionality:
//! - `data_spi` - Traits, types, and errors for series sources
//! - `data_api` - Configuration types and builders
//! - `data_core` - Implementations (CSV column, synthetic profile, export)
//!
//! # Example
//!
//! ```rust
//! use data_facade::{synthetic_series, SeriesSource, SyntheticConfigBuilder, SyntheticProfile};
//!
//! let config = SyntheticConfigBuilder::new().days(2).seed(42).build().unwrap();
//! let series = SyntheticProfile::new(config).unwrap().load().unwrap();
//! assert_eq!(series.len(), 48);
//!
//! let values = synthetic_series(24, Some(42)).unwrap();
//! assert_eq!(values.len(), 24);
//! ```

// Re-export everything from SPI
pub use data_spi::*;

// Re-export everything from API
pub use data_api::*;

// Re-export everything from Core
pub use data_core::*;
