//! Python bindings for spectrum analysis

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::spectrum::{AnalyzerConfig, AxisBound, DbFloor, SpectrumAnalyzer, WindowType};

/// Window type enum exposed to Python
#[pyclass(name = "WindowType")]
#[derive(Clone)]
pub enum PyWindowType {
    Rectangular,
    Hann,
    Hamming,
    Blackman,
}

impl From<PyWindowType> for WindowType {
    fn from(py_win: PyWindowType) -> Self {
        match py_win {
            PyWindowType::Rectangular => WindowType::Rectangular,
            PyWindowType::Hann => WindowType::Hann,
            PyWindowType::Hamming => WindowType::Hamming,
            PyWindowType::Blackman => WindowType::Blackman,
        }
    }
}

/// Axis bound enum exposed to Python
#[pyclass(name = "AxisBound")]
#[derive(Clone)]
pub enum PyAxisBound {
    SampleRate,
    Nyquist,
}

impl From<PyAxisBound> for AxisBound {
    fn from(py_bound: PyAxisBound) -> Self {
        match py_bound {
            PyAxisBound::SampleRate => AxisBound::SampleRate,
            PyAxisBound::Nyquist => AxisBound::Nyquist,
        }
    }
}

/// Spectrum analyzer exposed to Python
#[pyclass(name = "SpectrumAnalyzer")]
pub struct PySpectrumAnalyzer {
    analyzer: SpectrumAnalyzer,
}

#[pymethods]
impl PySpectrumAnalyzer {
    /// Create a new spectrum analyzer
    ///
    /// Args:
    ///     sample_rate: Sample rate in Hz
    ///     pad_factor: Transform length as a multiple of the signal length
    ///     window_type: Window applied to the samples
    ///     axis_bound: Frequency the last bin is labelled with
    ///     floor_db: Clamp for silent bins, None keeps -inf
    ///     apply_correction: Amplitude correction for windowing, None turns it
    ///         on for every window but the rectangular one
    #[new]
    #[pyo3(signature = (sample_rate=48000.0, pad_factor=2, window_type=PyWindowType::Rectangular, axis_bound=PyAxisBound::SampleRate, floor_db=None, apply_correction=None))]
    fn new(
        sample_rate: f64,
        pad_factor: usize,
        window_type: PyWindowType,
        axis_bound: PyAxisBound,
        floor_db: Option<f64>,
        apply_correction: Option<bool>,
    ) -> Self {
        let mut config = AnalyzerConfig {
            sample_rate,
            pad_factor,
            axis_bound: axis_bound.into(),
            db_floor: floor_db.map_or(DbFloor::NegInfinity, DbFloor::Clamp),
            ..AnalyzerConfig::default()
        }
        .with_window(window_type.into());
        if let Some(correct) = apply_correction {
            config.apply_correction = correct;
        }

        Self {
            analyzer: SpectrumAnalyzer::new(config),
        }
    }

    /// Analyze a signal
    ///
    /// Args:
    ///     signal: Samples as numpy array
    ///
    /// Returns:
    ///     (frequencies_hz, magnitude_db) numpy arrays
    fn analyze<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
        let sig = signal
            .as_slice()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let spectrum = self
            .analyzer
            .analyze(sig)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok((
            PyArray1::from_vec(py, spectrum.frequencies_hz),
            PyArray1::from_vec(py, spectrum.magnitude_db),
        ))
    }

    /// Get current sample rate
    fn get_sample_rate(&self) -> f64 {
        self.analyzer.config().sample_rate
    }

    /// Get current pad factor
    fn get_pad_factor(&self) -> usize {
        self.analyzer.config().pad_factor
    }
}
