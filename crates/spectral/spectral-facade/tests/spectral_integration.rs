//! Integration tests for the spectral stack

use spectral_facade::{
    decompose, dominant_frequencies, extract_residual, extract_seasonal, extract_trend,
    fft_in_place, ifft_in_place, Complex, Decomposer, SeasonalDecomposer, SpectralError,
    SpectralTransform,
};
use std::f64::consts::PI;

fn generation_profile(hours: usize) -> Vec<f64> {
    (0..hours)
        .map(|i| {
            let hour = (i % 24) as f64;
            let day = (i / 24) as f64;
            let solar = ((hour - 6.0) * PI / 12.0).sin().max(0.0) * 0.6;
            let seasonal = 0.2 * (2.0 * PI * day / 365.0).sin();
            let wobble = 0.05 * (i as f64 * 0.731).sin();
            solar + seasonal + wobble + 0.2
        })
        .collect()
}

#[test]
fn test_transform_lengths_across_sizes() {
    for n in [1usize, 2, 3, 5, 24, 48, 100, 168, 2160] {
        let frequency = SpectralTransform::new(&generation_profile(n)).unwrap().compute();
        let big_n = frequency.transform_len();

        assert!(big_n.is_power_of_two());
        assert!(big_n >= n);
        assert!(big_n == 1 || big_n / 2 < n);
        assert_eq!(frequency.magnitude_spectrum().len(), big_n / 2);
        assert_eq!(frequency.phase_spectrum().len(), big_n / 2);
    }
}

#[test]
fn test_no_padding_for_power_of_two() {
    let frequency = SpectralTransform::new(&generation_profile(64)).unwrap().compute();
    assert_eq!(frequency.transform_len(), 64);
}

#[test]
fn test_roundtrip_through_raw_entry_points() {
    let data = generation_profile(100);
    let mut buffer: Vec<Complex<f64>> = data.iter().map(|&v| Complex::new(v, 0.0)).collect();
    buffer.resize(128, Complex::new(0.0, 0.0));
    let padded = buffer.clone();

    fft_in_place(&mut buffer).unwrap();
    ifft_in_place(&mut buffer).unwrap();

    for (a, b) in padded.iter().zip(buffer.iter()) {
        assert!((a - b).norm() < 1e-9);
    }
}

#[test]
fn test_raw_entry_point_rejects_unpadded_length() {
    let mut buffer: Vec<Complex<f64>> = generation_profile(100)
        .iter()
        .map(|&v| Complex::new(v, 0.0))
        .collect();
    assert_eq!(
        fft_in_place(&mut buffer).unwrap_err(),
        SpectralError::NotPowerOfTwo(100)
    );
}

#[test]
fn test_diurnal_cycle_found_in_long_series() {
    // 90 days hourly: 2160 samples padded to 4096
    let data = generation_profile(2160);
    let ranked = dominant_frequencies(&data, 5).unwrap();

    assert_eq!(ranked.len(), 5);
    assert!(ranked.iter().all(|f| f.bin != 0));
    for pair in ranked.windows(2) {
        assert!(pair[0].magnitude >= pair[1].magnitude);
    }
    // Zero padding leaks the mean level into bin 1; the daily cycle sits at
    // 4096 / 24 ≈ 170.7 and splits across its two neighbours
    assert_eq!(ranked[0].bin, 1);
    let top3: Vec<usize> = ranked.iter().take(3).map(|f| f.bin).collect();
    assert!(top3.contains(&170));
    assert!(top3.contains(&171));
}

#[test]
fn test_stages_compose_like_decompose() {
    let data = generation_profile(24 * 14);
    let trend = extract_trend(&data, 24);
    let seasonal = extract_seasonal(&data, &trend, 3).unwrap();
    let residual = extract_residual(&data, &trend, &seasonal.seasonal);

    let decomposition = decompose(&data, 24).unwrap();
    assert_eq!(decomposition.trend(), trend.as_slice());
    assert_eq!(decomposition.seasonal(), seasonal.seasonal.as_slice());
    assert_eq!(decomposition.residual(), residual.as_slice());
    assert_eq!(decomposition.harmonics(), seasonal.harmonics.as_slice());
}

#[test]
fn test_decomposition_invariants() {
    for (hours, period) in [(48, 24), (100, 7), (24 * 30, 24), (7, 12), (1, 1)] {
        let data = generation_profile(hours);
        let decomposition = decompose(&data, period).unwrap();

        assert_eq!(decomposition.len(), hours);
        for i in 0..hours {
            let expected = data[i] - decomposition.trend()[i] - decomposition.seasonal()[i];
            assert!((decomposition.residual()[i] - expected).abs() < 1e-12);
        }

        let seasonal_mean = decomposition.seasonal().iter().sum::<f64>() / hours as f64;
        assert!(seasonal_mean.abs() < 1e-12);

        let strength = decomposition.seasonality_strength();
        assert!(strength.is_finite());
        assert!((0.0..=1.0).contains(&strength));
    }
}

#[test]
fn test_decomposer_trait_matches_analyze() {
    let data = generation_profile(96);
    let decomposer = SeasonalDecomposer::new();
    let via_trait = decomposer.decompose(&data, 24).unwrap();
    let direct = decomposer.analyze(&data, 24).unwrap();

    assert_eq!(&via_trait, direct.components());
}

#[test]
fn test_preconditions_reported_before_work() {
    assert_eq!(decompose(&[], 24).unwrap_err(), SpectralError::EmptySignal);
    assert!(matches!(
        decompose(&[1.0, 2.0], 0).unwrap_err(),
        SpectralError::InvalidPeriod(_)
    ));
    assert!(matches!(
        decompose(&[1.0, f64::NAN], 24).unwrap_err(),
        SpectralError::NonFiniteSample { index: 1, .. }
    ));
    assert!(decompose(&[], 0).unwrap_err().is_invalid_input());
}

#[test]
fn test_independent_instances_across_threads() {
    let inputs: Vec<Vec<f64>> = (1..=4).map(|d| generation_profile(24 * d * 5)).collect();
    let sequential: Vec<f64> = inputs
        .iter()
        .map(|data| decompose(data, 24).unwrap().seasonality_strength())
        .collect();

    let parallel: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|data| scope.spawn(move || decompose(data, 24).unwrap().seasonality_strength()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
