//! High-level spectrum analyzer
//!
//! Windows the samples, zero-pads them to `pad_factor` times their length,
//! runs the real FFT and converts the one-sided result to dB against a
//! frequency axis.

use num_complex::Complex;

use super::axis::{frequency_axis, AxisBound};
use super::db::{spectrum_to_db, DbFloor};
use super::fft::FftEngine;
use super::windowing::{apply_window, window_correction_factor, WindowType};
use super::SpectrumError;

/// Spectrum analyzer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Transform length as a multiple of the signal length (N = pad_factor * M)
    pub pad_factor: usize,

    /// Window type for spectral analysis
    pub window_type: WindowType,

    /// Apply amplitude correction for windowing
    pub apply_correction: bool,

    /// Frequency the last bin is labelled with
    pub axis_bound: AxisBound,

    /// Magnitude that maps to 0 dB
    pub reference: f64,

    /// Handling of zero magnitudes
    pub db_floor: DbFloor,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48000.0,
            pad_factor: 2,
            window_type: WindowType::Rectangular,
            apply_correction: false,
            axis_bound: AxisBound::SampleRate,
            reference: 1.0,
            db_floor: DbFloor::NegInfinity,
        }
    }
}

impl AnalyzerConfig {
    /// Transform length for a signal of `samples` samples
    pub fn fft_size_for(&self, samples: usize) -> Result<usize, SpectrumError> {
        if self.pad_factor == 0 {
            return Err(SpectrumError::InvalidPadFactor(self.pad_factor));
        }
        samples
            .checked_mul(self.pad_factor)
            .ok_or(SpectrumError::TransformTooLarge {
                samples,
                pad_factor: self.pad_factor,
            })
    }

    /// Switch window, correcting amplitude whenever the window is not rectangular
    pub fn with_window(mut self, window_type: WindowType) -> Self {
        self.window_type = window_type;
        self.apply_correction = window_type != WindowType::Rectangular;
        self
    }

    fn validate(&self) -> Result<(), SpectrumError> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(SpectrumError::InvalidSampleRate(self.sample_rate));
        }
        if self.pad_factor == 0 {
            return Err(SpectrumError::InvalidPadFactor(self.pad_factor));
        }
        Ok(())
    }
}

/// One-sided spectrum of a sample buffer
///
/// `bins`, `magnitude_db` and `frequencies_hz` always have the same length,
/// N/2 + 1.
#[derive(Debug, Clone)]
pub struct Spectrum {
    pub bins: Vec<Complex<f64>>,
    pub magnitude_db: Vec<f64>,
    pub frequencies_hz: Vec<f64>,
    pub fft_size: usize,
    pub sample_rate: f64,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Spacing between neighbouring points on the frequency axis
    pub fn bin_width_hz(&self) -> f64 {
        match self.frequencies_hz.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        }
    }

    /// |X[k]| for every bin
    pub fn magnitudes(&self) -> Vec<f64> {
        self.bins.iter().map(|c| c.norm()).collect()
    }

    /// Frequency and level of the loudest bin
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.frequencies_hz
            .iter()
            .zip(self.magnitude_db.iter())
            .filter(|(_, db)| !db.is_nan())
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(&hz, &db)| (hz, db))
    }
}

/// Spectrum analyzer for whole-buffer debug captures
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    fft_engine: Option<FftEngine>,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            fft_engine: None,
        }
    }

    /// Analyze a signal
    ///
    /// # Arguments
    /// * `signal` - Time-domain samples (M of them)
    ///
    /// # Returns
    /// Spectrum with M*pad_factor/2 + 1 bins
    pub fn analyze(&mut self, signal: &[f64]) -> Result<Spectrum, SpectrumError> {
        self.config.validate()?;
        if signal.is_empty() {
            return Err(SpectrumError::EmptySignal);
        }

        let fft_size = self.config.fft_size_for(signal.len())?;
        let windowed = apply_window(signal, self.config.window_type);

        let bins = self.engine_for(fft_size)?.compute(&windowed)?;

        let correction = if self.config.apply_correction {
            window_correction_factor(self.config.window_type, signal.len())
        } else {
            1.0
        };
        let magnitudes: Vec<f64> = bins.iter().map(|c| c.norm() * correction).collect();
        let magnitude_db = spectrum_to_db(&magnitudes, self.config.reference, self.config.db_floor);

        let frequencies_hz =
            frequency_axis(bins.len(), self.config.sample_rate, self.config.axis_bound);

        log::debug!(
            "Analyzed {} samples with N = {} into {} bins",
            signal.len(),
            fft_size,
            bins.len()
        );

        Ok(Spectrum {
            bins,
            magnitude_db,
            frequencies_hz,
            fft_size,
            sample_rate: self.config.sample_rate,
        })
    }

    /// Reuse the planned FFT while the transform length stays the same
    fn engine_for(&mut self, fft_size: usize) -> Result<&mut FftEngine, SpectrumError> {
        let reusable = matches!(&self.fft_engine, Some(engine) if engine.fft_size() == fft_size);
        if !reusable {
            log::debug!("Planning real FFT of length {}", fft_size);
            self.fft_engine = Some(FftEngine::new(fft_size)?);
        }
        Ok(self.fft_engine.as_mut().expect("FFT engine initialized above"))
    }

    /// Update configuration
    pub fn update_config(&mut self, config: AnalyzerConfig) {
        self.config = config;
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}
