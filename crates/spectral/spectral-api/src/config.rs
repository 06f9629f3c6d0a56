//! Analysis configuration types.

use serde::{Deserialize, Serialize};
use spectral_core::{Result, SpectralError, DEFAULT_HARMONICS};

/// Hourly diurnal cycle
pub const DEFAULT_PERIOD: usize = 24;
/// Bins listed in a dominant-frequency report
pub const DEFAULT_TOP_K: usize = 5;
/// One week of hourly rows
pub const DEFAULT_EXPORT_ROWS: usize = 168;

/// Configuration for decomposition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecompositionConfig {
    /// Samples per natural cycle
    pub period: usize,
    /// Dominant bins used to rebuild the seasonal component
    pub harmonics: usize,
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            harmonics: DEFAULT_HARMONICS,
        }
    }
}

/// Configuration for exported decomposition rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Maximum number of leading rows to export
    pub rows: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_EXPORT_ROWS,
        }
    }
}

/// Full analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of dominant frequencies to report
    pub top_k: usize,
    pub decomposition: DecompositionConfig,
    pub export: ExportConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            decomposition: DecompositionConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        if self.decomposition.period == 0 {
            return Err(SpectralError::InvalidPeriod(
                "period must be positive".to_string(),
            ));
        }
        if self.decomposition.harmonics == 0 {
            return Err(SpectralError::InvalidParameter {
                name: "harmonics".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for AnalysisConfig.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    top_k: Option<usize>,
    period: Option<usize>,
    harmonics: Option<usize>,
    rows: Option<usize>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn period(mut self, period: usize) -> Self {
        self.period = Some(period);
        self
    }

    pub fn harmonics(mut self, harmonics: usize) -> Self {
        self.harmonics = Some(harmonics);
        self
    }

    pub fn export_rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<AnalysisConfig> {
        let defaults = AnalysisConfig::default();
        let config = AnalysisConfig {
            top_k: self.top_k.unwrap_or(defaults.top_k),
            decomposition: DecompositionConfig {
                period: self.period.unwrap_or(defaults.decomposition.period),
                harmonics: self.harmonics.unwrap_or(defaults.decomposition.harmonics),
            },
            export: ExportConfig {
                rows: self.rows.unwrap_or(defaults.export.rows),
            },
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.top_k, 5);
        assert_eq!(config.decomposition.period, 24);
        assert_eq!(config.decomposition.harmonics, 3);
        assert_eq!(config.export.rows, 168);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = AnalysisConfig::from_json(r#"{"decomposition": {"period": 12}}"#).unwrap();
        assert_eq!(config.decomposition.period, 12);
        assert_eq!(config.decomposition.harmonics, 3);
        assert_eq!(config.top_k, 5);
        assert_eq!(config.export.rows, 168);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(AnalysisConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = AnalysisConfigBuilder::new().top_k(3).period(168).build().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(AnalysisConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_builder() {
        let config = AnalysisConfigBuilder::new()
            .top_k(10)
            .period(12)
            .harmonics(4)
            .export_rows(24)
            .build()
            .unwrap();
        assert_eq!(config.top_k, 10);
        assert_eq!(config.decomposition.period, 12);
        assert_eq!(config.decomposition.harmonics, 4);
        assert_eq!(config.export.rows, 24);
    }

    #[test]
    fn test_builder_rejects_zero_period() {
        let err = AnalysisConfigBuilder::new().period(0).build().unwrap_err();
        assert!(matches!(err, SpectralError::InvalidPeriod(_)));
    }

    #[test]
    fn test_builder_rejects_zero_harmonics() {
        let err = AnalysisConfigBuilder::new().harmonics(0).build().unwrap_err();
        assert!(matches!(err, SpectralError::InvalidParameter { .. }));
    }
}
