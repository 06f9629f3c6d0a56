//! Radix-2 frequency transform
//!
//! Decimation-in-time Cooley-Tukey transform, evaluated iteratively: the
//! buffer is bit-reverse permuted once and then combined stage by stage with
//! rotation factors read from a table sized `N / 2`. The butterflies are the
//! same ones the recursive even/odd formulation performs, so results agree
//! with it up to floating-point rounding.

use std::borrow::Cow;
use std::f64::consts::PI;

use spectral_spi::{
    validate_samples, Complex, DominantFrequency, FrequencyTransform, Result, Signal,
    SpectralError, Spectrum,
};
use tracing::debug;

/// Smallest power of two `N >= n` (`1` for `n <= 1`)
pub fn padded_len(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// Precomputed radix-2 transform for one power-of-two length
#[derive(Debug, Clone)]
pub struct Radix2 {
    len: usize,
    twiddles: Vec<Complex<f64>>,
}

impl Radix2 {
    /// Plan a transform of `len` points; `len` must be 0, 1, or a power of two
    pub fn new(len: usize) -> Result<Self> {
        if len > 1 && !len.is_power_of_two() {
            return Err(SpectralError::NotPowerOfTwo(len));
        }
        Ok(Self::planned(len))
    }

    fn planned(len: usize) -> Self {
        let twiddles = (0..len / 2)
            .map(|k| Complex::from_polar(1.0, -2.0 * PI * k as f64 / len as f64))
            .collect();
        Self { len, twiddles }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forward butterflies; `buffer.len()` must equal `self.len`
    fn apply(&self, buffer: &mut [Complex<f64>]) {
        let n = buffer.len();
        if n <= 1 {
            return;
        }
        bit_reverse_permute(buffer);

        let mut size = 2;
        while size <= n {
            let half = size / 2;
            let stride = n / size;
            for start in (0..n).step_by(size) {
                for k in 0..half {
                    let rotation = self.twiddles[k * stride];
                    let even = buffer[start + k];
                    let odd = rotation * buffer[start + k + half];
                    buffer[start + k] = even + odd;
                    buffer[start + k + half] = even - odd;
                }
            }
            size *= 2;
        }
    }

    fn invert(&self, buffer: &mut [Complex<f64>]) {
        if buffer.is_empty() {
            return;
        }
        buffer.iter_mut().for_each(|c| *c = c.conj());
        self.apply(buffer);
        let scale = buffer.len() as f64;
        buffer.iter_mut().for_each(|c| *c = c.conj() / scale);
    }

    /// Plan to use for `n` points: this one when it fits, a fresh one otherwise
    fn matching(&self, n: usize) -> Result<Cow<'_, Radix2>> {
        if n == self.len {
            return Ok(Cow::Borrowed(self));
        }
        Radix2::new(n).map(Cow::Owned)
    }
}

impl FrequencyTransform for Radix2 {
    fn forward(&self, buffer: &mut [Complex<f64>]) -> Result<()> {
        self.matching(buffer.len())?.apply(buffer);
        Ok(())
    }

    fn inverse(&self, buffer: &mut [Complex<f64>]) -> Result<()> {
        self.matching(buffer.len())?.invert(buffer);
        Ok(())
    }
}

fn bit_reverse_permute(buffer: &mut [Complex<f64>]) {
    let n = buffer.len();
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if j > i {
            buffer.swap(i, j);
        }
    }
}

/// Forward transform of an arbitrary power-of-two buffer, in place
pub fn fft_in_place(buffer: &mut [Complex<f64>]) -> Result<()> {
    Radix2::new(buffer.len())?.apply(buffer);
    Ok(())
}

/// Inverse transform of an arbitrary power-of-two buffer, in place
pub fn ifft_in_place(buffer: &mut [Complex<f64>]) -> Result<()> {
    Radix2::new(buffer.len())?.invert(buffer);
    Ok(())
}

/// Real signal wrapped as complex samples, ready to be transformed
#[derive(Debug, Clone)]
pub struct SpectralTransform {
    buffer: Vec<Complex<f64>>,
}

impl SpectralTransform {
    /// Wrap every sample with a zero imaginary part.
    ///
    /// Fails on an empty input, any non-finite sample, or samples whose
    /// total magnitude exceeds `MAX_TOTAL_MAGNITUDE`.
    pub fn new(samples: &[f64]) -> Result<Self> {
        validate_samples(samples)?;
        Ok(Self::wrap(samples))
    }

    pub fn from_signal(signal: &Signal) -> Self {
        Self::wrap(signal.samples())
    }

    fn wrap(samples: &[f64]) -> Self {
        Self {
            buffer: samples.iter().map(|&x| Complex::new(x, 0.0)).collect(),
        }
    }

    pub fn signal_len(&self) -> usize {
        self.buffer.len()
    }

    /// Length the buffer will have after padding
    pub fn transform_len(&self) -> usize {
        padded_len(self.buffer.len())
    }

    /// Zero-pad to the next power of two and run the forward transform
    pub fn compute(self) -> FrequencyDomain {
        let signal_len = self.buffer.len();
        let transform_len = padded_len(signal_len);

        let mut buffer = self.buffer;
        buffer.resize(transform_len, Complex::new(0.0, 0.0));

        let plan = Radix2::planned(transform_len);
        plan.apply(&mut buffer);
        debug!(signal_len, transform_len, "forward transform computed");

        FrequencyDomain {
            coefficients: buffer,
            signal_len,
            plan,
        }
    }
}

/// Transformed signal.
///
/// Spectra and rankings are derived on demand from the coefficients; nothing
/// beyond the coefficients themselves is cached.
#[derive(Debug, Clone)]
pub struct FrequencyDomain {
    coefficients: Vec<Complex<f64>>,
    signal_len: usize,
    plan: Radix2,
}

impl FrequencyDomain {
    /// Length of the signal before padding
    pub fn signal_len(&self) -> usize {
        self.signal_len
    }

    /// Padded transform length N
    pub fn transform_len(&self) -> usize {
        self.coefficients.len()
    }

    /// All N coefficients, including the redundant upper half
    pub fn coefficients(&self) -> &[Complex<f64>] {
        &self.coefficients
    }

    fn lower_half(&self) -> &[Complex<f64>] {
        &self.coefficients[..self.coefficients.len() / 2]
    }

    /// `|X[k]|` for bins `0..N/2`
    pub fn magnitude_spectrum(&self) -> Vec<f64> {
        self.lower_half().iter().map(|c| c.norm()).collect()
    }

    /// `arg X[k]` for bins `0..N/2`
    pub fn phase_spectrum(&self) -> Vec<f64> {
        self.lower_half().iter().map(|c| c.arg()).collect()
    }

    pub fn spectrum(&self) -> Spectrum {
        Spectrum {
            transform_len: self.transform_len(),
            magnitude: self.magnitude_spectrum(),
            phase: self.phase_spectrum(),
        }
    }

    /// The `top_k` strongest bins among `1..N/2`, strongest first.
    ///
    /// The DC bin is never ranked. Equal magnitudes keep ascending bin order.
    pub fn dominant_frequencies(&self, top_k: usize) -> Vec<DominantFrequency> {
        let mut ranked: Vec<DominantFrequency> = self
            .magnitude_spectrum()
            .into_iter()
            .enumerate()
            .skip(1)
            .map(|(bin, magnitude)| DominantFrequency::new(bin, magnitude))
            .collect();
        ranked.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
        ranked.truncate(top_k);
        ranked
    }

    /// Inverse transform of the coefficients: the padded input sequence
    pub fn inverse(&self) -> Vec<Complex<f64>> {
        let mut buffer = self.coefficients.clone();
        self.plan.invert(&mut buffer);
        buffer
    }

    /// Real parts of the inverse, truncated to the unpadded length
    pub fn reconstruct(&self) -> Vec<f64> {
        self.inverse()
            .into_iter()
            .take(self.signal_len)
            .map(|c| c.re)
            .collect()
    }
}

/// Rank the dominant frequencies of a raw sample sequence
pub fn dominant_frequencies(samples: &[f64], top_k: usize) -> Result<Vec<DominantFrequency>> {
    Ok(SpectralTransform::new(samples)?
        .compute()
        .dominant_frequencies(top_k))
}
