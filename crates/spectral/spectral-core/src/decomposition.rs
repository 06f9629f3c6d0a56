//! Seasonal decomposition
//!
//! Additive decomposition `Y = T + S + R` in three stages. Each stage takes
//! the outputs of the stages before it as arguments, so they can only run in
//! order: trend, then seasonal, then residual.
//!
//! Two conventions are kept for compatibility with existing outputs:
//! - the seasonal reconstruction divides bin magnitudes by the signal length
//!   `n`, although the spectrum was computed over the padded length `N`;
//! - the strength score uses the residual mean square, not its variance.

use std::f64::consts::PI;

use serde::Serialize;
use spectral_spi::{
    validate_samples, Decomposer, DecompositionResult, DecompositionRow, DominantFrequency,
    Result, SpectralError,
};
use tracing::{debug, debug_span};

use crate::transform::SpectralTransform;

/// Number of dominant bins used to rebuild the seasonal component
pub const DEFAULT_HARMONICS: usize = 3;

/// Completed decomposition together with the bins it was built from
#[derive(Debug, Clone, Serialize)]
pub struct Decomposition {
    period: usize,
    harmonics: Vec<DominantFrequency>,
    components: DecompositionResult,
}

impl Decomposition {
    pub fn period(&self) -> usize {
        self.period
    }

    /// Dominant bins of the detrended signal, strongest first
    pub fn harmonics(&self) -> &[DominantFrequency] {
        &self.harmonics
    }

    pub fn original(&self) -> &[f64] {
        &self.components.original
    }

    pub fn trend(&self) -> &[f64] {
        &self.components.trend
    }

    pub fn seasonal(&self) -> &[f64] {
        &self.components.seasonal
    }

    pub fn residual(&self) -> &[f64] {
        &self.components.residual
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn seasonality_strength(&self) -> f64 {
        seasonality_strength(self.seasonal(), self.residual())
    }

    pub fn rows(&self, limit: usize) -> Vec<DecompositionRow> {
        self.components.rows(limit)
    }

    pub fn components(&self) -> &DecompositionResult {
        &self.components
    }
}

impl From<Decomposition> for DecompositionResult {
    fn from(decomposition: Decomposition) -> Self {
        decomposition.components
    }
}

/// Seasonal component and the bins it was reconstructed from
#[derive(Debug, Clone)]
pub struct SeasonalExtraction {
    pub seasonal: Vec<f64>,
    pub harmonics: Vec<DominantFrequency>,
}

/// Centered moving average, truncated at both boundaries.
///
/// `trend[i]` is the mean of `original[j]` for
/// `j` in `[i - period/2, i + period/2]` clipped to the valid index range.
/// Near the edges the window shrinks; it is never padded or wrapped.
pub fn extract_trend(original: &[f64], period: usize) -> Vec<f64> {
    let n = original.len();
    let half = period / 2;
    (0..n)
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + half + 1).min(n);
            let window = &original[start..end];
            window.iter().sum::<f64>() / window.len() as f64
        })
        .collect()
}

/// Rebuild the seasonal component from the strongest bins of the detrended
/// signal.
///
/// `seasonal[i] = Σ (magnitude / n) · cos(2π · bin · i / n)` over the top
/// `harmonics` bins, then shifted to zero mean.
pub fn extract_seasonal(
    original: &[f64],
    trend: &[f64],
    harmonics: usize,
) -> Result<SeasonalExtraction> {
    validate_samples(original)?;
    ensure_aligned("trend", trend, original.len())?;

    let detrended: Vec<f64> = original
        .iter()
        .zip(trend.iter())
        .map(|(o, t)| o - t)
        .collect();

    let frequency = SpectralTransform::new(&detrended)?.compute();
    let dominant = frequency.dominant_frequencies(harmonics);

    let n = original.len() as f64;
    let mut seasonal: Vec<f64> = (0..original.len())
        .map(|i| {
            dominant.iter().fold(0.0, |acc, f| {
                acc + (f.magnitude / n) * (2.0 * PI * f.bin as f64 * i as f64 / n).cos()
            })
        })
        .collect();

    let mean = seasonal.iter().sum::<f64>() / n;
    seasonal.iter_mut().for_each(|s| *s -= mean);

    debug!(
        bins = ?dominant.iter().map(|f| f.bin).collect::<Vec<_>>(),
        "seasonal component reconstructed"
    );

    Ok(SeasonalExtraction {
        seasonal,
        harmonics: dominant,
    })
}

/// `residual[i] = original[i] - trend[i] - seasonal[i]`
pub fn extract_residual(original: &[f64], trend: &[f64], seasonal: &[f64]) -> Vec<f64> {
    original
        .iter()
        .zip(trend.iter())
        .zip(seasonal.iter())
        .map(|((o, t), s)| o - t - s)
        .collect()
}

/// `(1/len) · Σ x²`, or `0.0` for an empty slice
pub fn mean_square(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| v * v).sum::<f64>() / values.len() as f64
}

/// `ms(seasonal) / (ms(seasonal) + ms(residual))`.
///
/// Returns `0.0` when both mean squares are zero (for example a flat input).
pub fn seasonality_strength(seasonal: &[f64], residual: &[f64]) -> f64 {
    let mut seasonal_ms = mean_square(seasonal);
    let mut residual_ms = mean_square(residual);
    if !(seasonal_ms + residual_ms).is_finite() {
        // Squares overflowed; the ratio is scale invariant
        let scale = seasonal
            .iter()
            .chain(residual.iter())
            .fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let scaled = |values: &[f64]| -> Vec<f64> { values.iter().map(|v| v / scale).collect() };
        seasonal_ms = mean_square(&scaled(seasonal));
        residual_ms = mean_square(&scaled(residual));
    }
    let total = seasonal_ms + residual_ms;
    if total == 0.0 {
        0.0
    } else {
        seasonal_ms / total
    }
}

fn ensure_aligned(name: &str, values: &[f64], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(SpectralError::InvalidParameter {
            name: name.to_string(),
            reason: format!(
                "length {} does not match signal length {}",
                values.len(),
                expected
            ),
        });
    }
    Ok(())
}

/// Trend / Fourier-seasonal / residual decomposer
#[derive(Debug, Clone)]
pub struct SeasonalDecomposer {
    harmonics: usize,
}

impl SeasonalDecomposer {
    pub fn new() -> Self {
        Self {
            harmonics: DEFAULT_HARMONICS,
        }
    }

    /// Use `harmonics` dominant bins for the seasonal reconstruction
    pub fn with_harmonics(harmonics: usize) -> Result<Self> {
        if harmonics == 0 {
            return Err(SpectralError::InvalidParameter {
                name: "harmonics".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self { harmonics })
    }

    pub fn harmonics(&self) -> usize {
        self.harmonics
    }

    /// Run all three stages. Preconditions are checked before any stage runs.
    pub fn analyze(&self, data: &[f64], period: usize) -> Result<Decomposition> {
        validate_samples(data)?;
        if period == 0 {
            return Err(SpectralError::InvalidPeriod(
                "period must be positive".to_string(),
            ));
        }

        let _span = debug_span!("decompose", n = data.len(), period).entered();

        let trend = extract_trend(data, period);
        let SeasonalExtraction {
            seasonal,
            harmonics,
        } = extract_seasonal(data, &trend, self.harmonics)?;
        let residual = extract_residual(data, &trend, &seasonal);

        Ok(Decomposition {
            period,
            harmonics,
            components: DecompositionResult {
                original: data.to_vec(),
                trend,
                seasonal,
                residual,
            },
        })
    }
}

impl Default for SeasonalDecomposer {
    fn default() -> Self {
        Self::new()
    }
}

impl Decomposer for SeasonalDecomposer {
    fn decompose(&self, data: &[f64], period: usize) -> Result<DecompositionResult> {
        self.analyze(data, period).map(Into::into)
    }
}

/// Decompose with the default number of harmonics
pub fn decompose(data: &[f64], period: usize) -> Result<Decomposition> {
    SeasonalDecomposer::new().analyze(data, period)
}
