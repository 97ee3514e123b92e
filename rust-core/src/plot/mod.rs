//! Log-frequency spectrum plots
//!
//! The spectrum is reduced to the points a logarithmic x-axis can show before
//! it reaches either renderer.

pub mod png;
#[cfg(feature = "gui")]
pub mod window;

use thiserror::Error;

use crate::spectrum::Spectrum;

pub use self::png::{render_image, render_png};

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("No bin has a positive frequency and a finite level, nothing to plot")]
    NothingToPlot,

    #[error("Plot size {width}x{height} is too small")]
    InvalidSize { width: u32, height: u32 },

    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Plot window failed: {0}")]
    Window(String),
}

/// (frequency in Hz, level in dB) pairs ready for a log-x plot
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    points: Vec<[f64; 2]>,
}

impl PlotSeries {
    /// Build the series from a spectrum
    ///
    /// 0 Hz has no place on a log axis and -inf dB has none on the y axis, so
    /// both are dropped along with NaNs.
    pub fn from_spectrum(spectrum: &Spectrum) -> Result<Self, PlotError> {
        let points: Vec<[f64; 2]> = spectrum
            .frequencies_hz
            .iter()
            .zip(spectrum.magnitude_db.iter())
            .filter(|&(&hz, &db)| hz > 0.0 && hz.is_finite() && db.is_finite())
            .map(|(&hz, &db)| [hz, db])
            .collect();

        let dropped = spectrum.len() - points.len();
        if dropped > 0 {
            log::debug!("Dropped {} of {} bins that a log plot cannot show", dropped, spectrum.len());
        }

        if points.is_empty() {
            return Err(PlotError::NothingToPlot);
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Lowest and highest frequency
    pub fn x_range(&self) -> (f64, f64) {
        Self::range(self.points.iter().map(|p| p[0]))
    }

    /// Lowest and highest level
    pub fn y_range(&self) -> (f64, f64) {
        Self::range(self.points.iter().map(|p| p[1]))
    }

    fn range(values: impl Iterator<Item = f64>) -> (f64, f64) {
        values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
    }
}
