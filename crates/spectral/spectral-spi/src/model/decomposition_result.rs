//! Decomposition result model

use serde::{Deserialize, Serialize};

/// Result of seasonal decomposition.
///
/// All four sequences are index-aligned and share the signal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionResult {
    /// Input signal
    pub original: Vec<f64>,
    /// Trend component
    pub trend: Vec<f64>,
    /// Seasonal component
    pub seasonal: Vec<f64>,
    /// Residual component
    pub residual: Vec<f64>,
}

impl DecompositionResult {
    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Per-index rows for the first `min(limit, len)` samples
    pub fn rows(&self, limit: usize) -> Vec<DecompositionRow> {
        (0..limit.min(self.len()))
            .map(|i| DecompositionRow {
                index: i,
                original: self.original[i],
                trend: self.trend[i],
                seasonal: self.seasonal[i],
                residual: self.residual[i],
            })
            .collect()
    }
}

/// One exported row of a decomposition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecompositionRow {
    pub index: usize,
    pub original: f64,
    pub trend: f64,
    pub seasonal: f64,
    pub residual: f64,
}
