//! Trait for time series decomposition

use crate::error::Result;
use crate::model::DecompositionResult;

/// Trait for additive time series decomposition
pub trait Decomposer: Send + Sync {
    /// Decompose a time series into trend, seasonal, and residual components.
    ///
    /// Precondition violations are returned before any component is computed.
    fn decompose(&self, data: &[f64], period: usize) -> Result<DecompositionResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpectralError;
    use crate::model::validate_samples;

    /// Mock implementation: everything is trend
    struct TrivialDecomposer;

    impl Decomposer for TrivialDecomposer {
        fn decompose(&self, data: &[f64], period: usize) -> Result<DecompositionResult> {
            validate_samples(data)?;
            if period == 0 {
                return Err(SpectralError::InvalidPeriod(
                    "period must be positive".to_string(),
                ));
            }
            Ok(DecompositionResult {
                original: data.to_vec(),
                trend: data.to_vec(),
                seasonal: vec![0.0; data.len()],
                residual: vec![0.0; data.len()],
            })
        }
    }

    #[test]
    fn test_trivial_decomposer_reconstructs() {
        let data = vec![10.0, 20.0, 30.0, 40.0, 50.0];
        let result = TrivialDecomposer.decompose(&data, 2).unwrap();

        for i in 0..data.len() {
            let reconstructed = result.trend[i] + result.seasonal[i] + result.residual[i];
            assert!((reconstructed - data[i]).abs() < 1e-10);
        }
    }

    #[test]
    fn test_decomposer_rejects_empty() {
        let err = TrivialDecomposer.decompose(&[], 4).unwrap_err();
        assert_eq!(err, SpectralError::EmptySignal);
    }

    #[test]
    fn test_decomposer_rejects_zero_period() {
        let err = TrivialDecomposer.decompose(&[1.0], 0).unwrap_err();
        assert!(matches!(err, SpectralError::InvalidPeriod(_)));
    }

    #[test]
    fn test_decomposer_as_trait_object() {
        let decomposer: Box<dyn Decomposer> = Box::new(TrivialDecomposer);
        let result = decomposer.decompose(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_decomposer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TrivialDecomposer>();
    }
}
