//! Data Source API
//!
//! Configuration types and builders for series sources.

pub mod config;

pub use config::{CsvSourceConfig, SyntheticConfig, SyntheticConfigBuilder, DEFAULT_SYNTHETIC_HOURS};
