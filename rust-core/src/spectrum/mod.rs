//! Spectral analysis with FFT

pub mod analysis;
pub mod axis;
pub mod db;
pub mod fft;
pub mod windowing;

use thiserror::Error;

pub use analysis::{AnalyzerConfig, Spectrum, SpectrumAnalyzer};
pub use axis::{frequency_axis, linspace, AxisBound};
pub use db::{magnitude_to_db, DbFloor};
pub use fft::FftEngine;
pub use windowing::{apply_window, WindowType};

#[derive(Error, Debug)]
pub enum SpectrumError {
    #[error("Cannot analyze an empty signal")]
    EmptySignal,

    #[error("FFT size must be at least one sample")]
    EmptyTransform,

    #[error("Pad factor must be at least 1 (got {0})")]
    InvalidPadFactor(usize),

    #[error("Sample rate must be a positive number of Hz (got {0})")]
    InvalidSampleRate(f64),

    #[error("Transform length overflows for {samples} samples padded {pad_factor}x")]
    TransformTooLarge { samples: usize, pad_factor: usize },

    #[error("FFT processing failed: {0}")]
    Fft(String),
}
