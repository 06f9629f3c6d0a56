//! Synthetic hourly generation profile.

use std::f64::consts::PI;

use data_api::SyntheticConfig;
use data_spi::{DataError, Result, Series, SeriesSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

const DAYLIGHT_AMPLITUDE: f64 = 0.6;
const ANNUAL_AMPLITUDE: f64 = 0.2;
const BASELINE: f64 = 0.2;

/// Solar-like hourly profile with an annual swing and uniform noise.
///
/// Sample `i` is `max(0, sin((h - 6)π/12))·0.6 + 0.2·sin(2π·d/365) + ε + 0.2`
/// where `h = i mod 24`, `d = i div 24` and `ε` is uniform in
/// `[-noise/2, noise/2)`.
#[derive(Debug, Clone)]
pub struct SyntheticProfile {
    config: SyntheticConfig,
}

impl SyntheticProfile {
    pub fn new(config: SyntheticConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SyntheticConfig {
        &self.config
    }

    /// Noise-free value for hour index `i`.
    pub fn baseline(i: usize) -> f64 {
        let hour = (i % 24) as f64;
        let day = (i / 24) as f64;
        let daylight = ((hour - 6.0) * PI / 12.0).sin().max(0.0) * DAYLIGHT_AMPLITUDE;
        let annual = ANNUAL_AMPLITUDE * (2.0 * PI * day / 365.0).sin();
        daylight + annual + BASELINE
    }

    pub fn generate(&self) -> Vec<f64> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let width = self.config.noise;
        (0..self.config.hours)
            .map(|i| {
                let noise = if width > 0.0 {
                    (rng.gen::<f64>() - 0.5) * width
                } else {
                    0.0
                };
                Self::baseline(i) + noise
            })
            .collect()
    }
}

impl Default for SyntheticProfile {
    fn default() -> Self {
        Self {
            config: SyntheticConfig::default(),
        }
    }
}

impl SeriesSource for SyntheticProfile {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn load(&self) -> Result<Series> {
        let values = self.generate();
        if values.is_empty() {
            return Err(DataError::NoData);
        }
        debug!(hours = values.len(), seed = ?self.config.seed, "generated synthetic profile");
        Ok(Series::new("synthetic", values))
    }
}

/// Generate `hours` samples of the synthetic profile.
pub fn synthetic_series(hours: usize, seed: Option<u64>) -> Result<Vec<f64>> {
    let config = SyntheticConfig {
        hours,
        seed,
        ..SyntheticConfig::default()
    };
    Ok(SyntheticProfile::new(config)?.generate())
}
