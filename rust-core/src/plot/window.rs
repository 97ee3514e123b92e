//! Interactive spectrum window
//!
//! egui plots have no log axis, so x carries log10(Hz) and the hover label
//! converts back.

use std::ops::RangeInclusive;

use eframe::egui;
use egui::plot::{Line, Plot, PlotPoint, PlotPoints};

use super::{PlotError, PlotSeries};

/// Open a window with the spectrum and block until it is closed
pub fn show(series: &PlotSeries, title: &str) -> Result<(), PlotError> {
    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1000.0, 600.0)),
        ..Default::default()
    };

    let points: Vec<[f64; 2]> = series
        .points()
        .iter()
        .map(|&[hz, db]| [hz.log10(), db])
        .collect();
    let heading = title.to_owned();

    log::info!("Opening plot window with {} points", points.len());
    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Box::new(SpectrumApp::new(heading, points))),
    )
    .map_err(|e| PlotError::Window(e.to_string()))
}

/// Tick labels in Hz for the log10(Hz) axis
fn axis_label(x: f64, _range: &RangeInclusive<f64>) -> String {
    format!("{:.0} Hz", 10f64.powf(x))
}

/// Formats a hovered point back into Hz and dB
fn hover_label(_name: &str, value: &PlotPoint) -> String {
    format!("{:.1} Hz\n{:.2} dB", 10f64.powf(value.x), value.y)
}

struct SpectrumApp {
    heading: String,
    points: Vec<[f64; 2]>,
}

impl SpectrumApp {
    fn new(heading: String, points: Vec<[f64; 2]>) -> Self {
        Self { heading, points }
    }
}

impl eframe::App for SpectrumApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.heading.as_str());
            let line = Line::new(PlotPoints::from(self.points.clone()));
            Plot::new("spectrum")
                .x_axis_formatter(axis_label)
                .label_formatter(hover_label)
                .show(ui, |plot_ui| plot_ui.line(line));
        });
    }
}
