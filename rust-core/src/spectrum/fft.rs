//! FFT engine using realfft for real-valued signals
//!
//! Signals shorter than the transform length are zero-filled, which is how the
//! one-sided spectrum gets its finer bin spacing.

use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

use super::SpectrumError;

/// FFT engine for real-valued signals
pub struct FftEngine {
    /// FFT size (N)
    fft_size: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Reusable input buffer
    input_buffer: Vec<f64>,

    /// Reusable output buffer (complex spectrum)
    output_buffer: Vec<Complex<f64>>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples, padding included)
    pub fn new(fft_size: usize) -> Result<Self, SpectrumError> {
        if fft_size == 0 {
            return Err(SpectrumError::EmptyTransform);
        }

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        let input_buffer = r2c.make_input_vec();
        let output_buffer = r2c.make_output_vec();

        Ok(Self {
            fft_size,
            r2c,
            input_buffer,
            output_buffer,
        })
    }

    /// Compute the one-sided spectrum X[k] for k = 0..=N/2
    ///
    /// # Arguments
    /// * `signal` - Input signal, zero-padded when shorter than fft_size and
    ///   truncated when longer
    pub fn compute(&mut self, signal: &[f64]) -> Result<Vec<Complex<f64>>, SpectrumError> {
        let copy_len = signal.len().min(self.fft_size);
        self.input_buffer[..copy_len].copy_from_slice(&signal[..copy_len]);
        self.input_buffer[copy_len..].fill(0.0);

        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)
            .map_err(|e| SpectrumError::Fft(e.to_string()))?;

        Ok(self.output_buffer.clone())
    }

    /// Compute FFT and return magnitude spectrum |X[k]|
    pub fn compute_magnitude(&mut self, signal: &[f64]) -> Result<Vec<f64>, SpectrumError> {
        Ok(self.compute(signal)?.iter().map(|c| c.norm()).collect())
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Get number of frequency bins (fft_size/2 + 1 for real FFT)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }
}
