//! Trait for in-place complex frequency transforms

use num_complex::Complex;

use crate::error::Result;

/// In-place discrete Fourier transform over a power-of-two buffer
pub trait FrequencyTransform: Send + Sync {
    /// Forward transform with rotation factors `e^{-2πik/N}`.
    ///
    /// Implementations reject buffers whose length is not a power of two
    /// with `SpectralError::NotPowerOfTwo`, leaving the buffer untouched.
    /// Buffers of length 0 or 1 are returned unchanged.
    fn forward(&self, buffer: &mut [Complex<f64>]) -> Result<()>;

    /// Inverse transform: conjugate, forward, conjugate, divide by N
    fn inverse(&self, buffer: &mut [Complex<f64>]) -> Result<()> {
        if buffer.is_empty() {
            return Ok(());
        }
        buffer.iter_mut().for_each(|c| *c = c.conj());
        if let Err(e) = self.forward(buffer) {
            buffer.iter_mut().for_each(|c| *c = c.conj());
            return Err(e);
        }
        let scale = buffer.len() as f64;
        buffer.iter_mut().for_each(|c| *c = c.conj() / scale);
        Ok(())
    }
}
