//! Plots the zero-padded spectrum of a raw f64 dump.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use raw_spectrum::export::save_csv;
use raw_spectrum::plot::{render_png, PlotSeries};
use raw_spectrum::spectrum::{AnalyzerConfig, AxisBound, DbFloor, WindowType};
use raw_spectrum::{ByteOrder, RunConfig, DEFAULT_INPUT};

#[derive(Parser, Debug)]
#[command(version, about = "Plot the magnitude spectrum of a raw f64 sample dump")]
struct Cli {
    /// Headerless dump of 64-bit floats
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 48000.0)]
    sample_rate: f64,

    /// Frequency the last bin is labelled with
    #[arg(long, value_enum, default_value_t = AxisBound::SampleRate)]
    axis_bound: AxisBound,

    /// Transform length as a multiple of the sample count
    #[arg(long, default_value_t = 2)]
    pad_factor: usize,

    /// Byte order of the dump
    #[arg(long, value_enum, default_value_t = ByteOrder::Native)]
    byte_order: ByteOrder,

    /// Window applied before the FFT
    #[arg(long, value_enum, default_value_t = WindowType::Rectangular)]
    window: WindowType,

    /// Raise silent bins to this level instead of -inf dB
    #[arg(long, allow_negative_numbers = true)]
    floor_db: Option<f64>,

    /// Write the plot to this PNG instead of opening a window
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the spectrum as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// PNG width in pixels
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// PNG height in pixels
    #[arg(long, default_value_t = 700)]
    height: u32,

    /// Log level, RUST_LOG takes precedence
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            input: self.input.clone(),
            byte_order: self.byte_order,
            analyzer: AnalyzerConfig {
                sample_rate: self.sample_rate,
                pad_factor: self.pad_factor,
                axis_bound: self.axis_bound,
                db_floor: self.floor_db.map_or(DbFloor::NegInfinity, DbFloor::Clamp),
                ..AnalyzerConfig::default()
            }
            .with_window(self.window),
        }
    }
}

/// `<stem>_spectrum.png` next to the input
#[cfg_attr(feature = "gui", allow(dead_code))]
fn default_png_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "spectrum".to_owned());
    input.with_file_name(format!("{stem}_spectrum.png"))
}

#[cfg(feature = "gui")]
fn show_or_save(cli: &Cli, series: &PlotSeries) -> anyhow::Result<()> {
    match &cli.output {
        Some(path) => render_png(series, path, cli.width, cli.height)
            .with_context(|| format!("Failed to plot to {}", path.display())),
        None => raw_spectrum::plot::window::show(series, &cli.input.display().to_string())
            .context("Failed to show plot window"),
    }
}

#[cfg(not(feature = "gui"))]
fn show_or_save(cli: &Cli, series: &PlotSeries) -> anyhow::Result<()> {
    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| default_png_path(&cli.input));
    render_png(series, &path, cli.width, cli.height)
        .with_context(|| format!("Failed to plot to {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .parse_default_env()
        .init();

    let config = cli.run_config();
    let spectrum = raw_spectrum::run(&config)
        .with_context(|| format!("Failed to analyze {}", config.input.display()))?;

    if let Some(csv) = &cli.csv {
        save_csv(&spectrum, csv).with_context(|| format!("Failed to write {}", csv.display()))?;
    }

    let series = PlotSeries::from_spectrum(&spectrum)?;
    show_or_save(&cli, &series)
}
