//! Raw Spectrum - zero-padded spectrum plots of raw f64 debug dumps
//!
//! Loads a headerless dump of doubles, runs a real FFT padded to twice the
//! signal length and turns the one-sided result into dB against a frequency
//! axis ready for a log-x plot.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod export;
pub mod io;
pub mod plot;
pub mod spectrum;
#[cfg(feature = "python")]
pub mod python_bindings;

use std::path::PathBuf;
use thiserror::Error;

pub use io::{load_raw, ByteOrder, SampleBuffer};
pub use plot::PlotSeries;
pub use spectrum::{AnalyzerConfig, Spectrum, SpectrumAnalyzer};

/// Dump analyzed when no path is given
pub const DEFAULT_INPUT: &str = "debug.raw";

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Raw(#[from] io::RawError),

    #[error(transparent)]
    Spectrum(#[from] spectrum::SpectrumError),

    #[error(transparent)]
    Plot(#[from] plot::PlotError),
}

/// Where the samples come from and how they are analyzed
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub byte_order: ByteOrder,
    pub analyzer: AnalyzerConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            byte_order: ByteOrder::Native,
            analyzer: AnalyzerConfig::default(),
        }
    }
}

/// Load the dump and compute its spectrum
///
/// This is everything up to the plot: the caller decides whether the result
/// goes to a window, a PNG or a CSV.
pub fn run(config: &RunConfig) -> Result<Spectrum, Error> {
    let samples = load_raw(&config.input, config.byte_order)?;
    let mut analyzer = SpectrumAnalyzer::new(config.analyzer.clone());
    let spectrum = analyzer.analyze(samples.as_slice())?;

    log::info!("N = {}, {} bins", spectrum.fft_size, spectrum.len());
    if let Some(summary) = peak_summary(&spectrum) {
        log::info!("{}", summary);
    }
    Ok(spectrum)
}

/// Loudest bin, left out when every bin is silent
fn peak_summary(spectrum: &Spectrum) -> Option<String> {
    spectrum
        .peak()
        .filter(|(_, db)| db.is_finite())
        .map(|(hz, db)| format!("Peak {:.2} dB at {:.1} Hz", db, hz))
}
