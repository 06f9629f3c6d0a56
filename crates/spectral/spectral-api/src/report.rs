//! Analysis reports combining the frequency ranking and the decomposition.

use serde::{Deserialize, Serialize};
use spectral_core::{DecompositionRow, Result, SeasonalDecomposer, SpectralTransform};
use tracing::info;

use crate::config::AnalysisConfig;

/// One ranked bin with its period in samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyReport {
    /// 1-based rank
    pub rank: usize,
    pub bin: usize,
    pub magnitude: f64,
    /// `signal_len / bin`
    pub period: f64,
}

/// Dominant-frequency ranking of a raw signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumReport {
    pub signal_len: usize,
    pub transform_len: usize,
    pub frequencies: Vec<FrequencyReport>,
}

/// Ranking plus decomposition summary and leading rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub spectrum: SpectrumReport,
    pub period: usize,
    pub seasonality_strength: f64,
    pub rows: Vec<DecompositionRow>,
}

/// Rank the `top_k` strongest non-DC bins of `data`
pub fn spectrum_report(data: &[f64], top_k: usize) -> Result<SpectrumReport> {
    let frequency = SpectralTransform::new(data)?.compute();
    let signal_len = frequency.signal_len();
    let frequencies = frequency
        .dominant_frequencies(top_k)
        .into_iter()
        .enumerate()
        .map(|(i, f)| FrequencyReport {
            rank: i + 1,
            bin: f.bin,
            magnitude: f.magnitude,
            period: f.period(signal_len),
        })
        .collect();

    Ok(SpectrumReport {
        signal_len,
        transform_len: frequency.transform_len(),
        frequencies,
    })
}

/// Run the ranking and the decomposition described by `config`
pub fn analyze(data: &[f64], config: &AnalysisConfig) -> Result<AnalysisReport> {
    config.validate()?;

    let spectrum = spectrum_report(data, config.top_k)?;
    let decomposer = SeasonalDecomposer::with_harmonics(config.decomposition.harmonics)?;
    let decomposition = decomposer.analyze(data, config.decomposition.period)?;
    let seasonality_strength = decomposition.seasonality_strength();

    info!(
        n = data.len(),
        period = config.decomposition.period,
        seasonality_strength,
        "analysis complete"
    );

    Ok(AnalysisReport {
        spectrum,
        period: config.decomposition.period,
        seasonality_strength,
        rows: decomposition.rows(config.export.rows),
    })
}
