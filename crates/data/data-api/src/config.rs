//! Data source configuration types.

use std::path::PathBuf;

use data_spi::{DataError, Result};
use serde::{Deserialize, Serialize};

/// 90 days of hourly samples
pub const DEFAULT_SYNTHETIC_HOURS: usize = 90 * 24;

/// Configuration for reading one column of a CSV file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvSourceConfig {
    /// Path to the delimited file
    pub path: PathBuf,
    /// Header name of the column to read
    pub column: String,
}

impl CsvSourceConfig {
    pub fn new(path: impl Into<PathBuf>, column: &str) -> Self {
        Self {
            path: path.into(),
            column: column.to_string(),
        }
    }
}

/// Configuration for the synthetic hourly generation profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    /// Number of hourly samples
    pub hours: usize,
    /// Seed for reproducible noise; entropy-seeded when absent
    pub seed: Option<u64>,
    /// Peak-to-peak width of the uniform noise term
    pub noise: f64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            hours: DEFAULT_SYNTHETIC_HOURS,
            seed: None,
            noise: 0.1,
        }
    }
}

impl SyntheticConfig {
    pub fn validate(&self) -> Result<()> {
        if self.hours == 0 {
            return Err(DataError::ConfigError("hours must be positive".to_string()));
        }
        if !self.noise.is_finite() || self.noise < 0.0 {
            return Err(DataError::ConfigError(
                "noise must be a non-negative finite number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for SyntheticConfig.
#[derive(Debug, Default)]
pub struct SyntheticConfigBuilder {
    hours: Option<usize>,
    seed: Option<u64>,
    noise: Option<f64>,
}

impl SyntheticConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of hourly samples.
    pub fn hours(mut self, hours: usize) -> Self {
        self.hours = Some(hours);
        self
    }

    /// Set the days of hourly samples.
    pub fn days(mut self, days: usize) -> Self {
        self.hours = Some(days * 24);
        self
    }

    /// Set the noise seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the noise width.
    pub fn noise(mut self, noise: f64) -> Self {
        self.noise = Some(noise);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<SyntheticConfig> {
        let defaults = SyntheticConfig::default();
        let config = SyntheticConfig {
            hours: self.hours.unwrap_or(defaults.hours),
            seed: self.seed,
            noise: self.noise.unwrap_or(defaults.noise),
        };
        config.validate()?;
        Ok(config)
    }
}
