//! Headless rendering of a spectrum plot to PNG
//!
//! Draws decade and per-digit gridlines on the log frequency axis, evenly
//! stepped dB gridlines, and the trace as a polyline.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use super::{PlotError, PlotSeries};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const FRAME: Rgb<u8> = Rgb([96, 96, 96]);
const MAJOR_GRID: Rgb<u8> = Rgb([200, 200, 200]);
const MINOR_GRID: Rgb<u8> = Rgb([235, 235, 235]);
const TRACE: Rgb<u8> = Rgb([31, 119, 180]);

const MARGIN_LEFT: u32 = 50;
const MARGIN_RIGHT: u32 = 20;
const MARGIN_TOP: u32 = 20;
const MARGIN_BOTTOM: u32 = 40;
const MIN_PLOT_SIZE: u32 = 16;

/// Maps (Hz, dB) to pixel coordinates inside the plot area
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    log_hz: (f64, f64),
    db: (f64, f64),
}

impl Frame {
    fn new(width: u32, height: u32, series: &PlotSeries) -> (Self, f64) {
        let (hz_lo, hz_hi) = series.x_range();
        let lx0 = hz_lo.log10().floor();
        let mut lx1 = hz_hi.log10().ceil();
        if lx1 <= lx0 {
            lx1 = lx0 + 1.0;
        }

        let (db_lo, db_hi) = series.y_range();
        let step = db_step(db_hi - db_lo);
        let y0 = (db_lo / step).floor() * step;
        let mut y1 = (db_hi / step).ceil() * step;
        if y1 <= y0 {
            y1 = y0 + step;
        }

        let frame = Self {
            left: MARGIN_LEFT as f64,
            top: MARGIN_TOP as f64,
            width: (width - MARGIN_LEFT - MARGIN_RIGHT) as f64,
            height: (height - MARGIN_TOP - MARGIN_BOTTOM) as f64,
            log_hz: (lx0, lx1),
            db: (y0, y1),
        };
        (frame, step)
    }

    fn x(&self, hz: f64) -> i64 {
        let (lo, hi) = self.log_hz;
        (self.left + (hz.log10() - lo) / (hi - lo) * self.width).round() as i64
    }

    fn y(&self, db: f64) -> i64 {
        let (lo, hi) = self.db;
        (self.top + (hi - db) / (hi - lo) * self.height).round() as i64
    }

    fn right(&self) -> i64 {
        (self.left + self.width) as i64
    }

    fn bottom(&self) -> i64 {
        (self.top + self.height) as i64
    }
}

/// A 1/2/5 step giving roughly eight gridlines over `span` dB
fn db_step(span: f64) -> f64 {
    if !(span.is_finite() && span > 0.0) {
        return 10.0;
    }
    let raw = span / 8.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|&step| step >= raw)
        .unwrap_or(10.0 * magnitude)
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Bresenham line between two pixel positions
fn draw_line(img: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put(img, x, y, color);
        if x == to.0 && y == to.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn draw_grid(img: &mut RgbImage, frame: &Frame, step: f64) {
    let (lx0, lx1) = frame.log_hz;
    for decade in lx0 as i32..=lx1 as i32 {
        for digit in 1..10 {
            let hz = digit as f64 * 10f64.powi(decade);
            if hz.log10() > lx1 + 1e-9 {
                break;
            }
            let x = frame.x(hz);
            let color = if digit == 1 { MAJOR_GRID } else { MINOR_GRID };
            draw_line(img, (x, frame.top as i64), (x, frame.bottom()), color);
        }
    }

    let (y0, y1) = frame.db;
    let lines = ((y1 - y0) / step).round() as i64;
    for i in 0..=lines {
        let y = frame.y(y0 + step * i as f64);
        draw_line(img, (frame.left as i64, y), (frame.right(), y), MAJOR_GRID);
    }

    let (left, top, right, bottom) = (frame.left as i64, frame.top as i64, frame.right(), frame.bottom());
    draw_line(img, (left, top), (right, top), FRAME);
    draw_line(img, (right, top), (right, bottom), FRAME);
    draw_line(img, (right, bottom), (left, bottom), FRAME);
    draw_line(img, (left, bottom), (left, top), FRAME);
}

/// Render the series into an in-memory image
pub fn render_image(series: &PlotSeries, width: u32, height: u32) -> Result<RgbImage, PlotError> {
    if width < MARGIN_LEFT + MARGIN_RIGHT + MIN_PLOT_SIZE
        || height < MARGIN_TOP + MARGIN_BOTTOM + MIN_PLOT_SIZE
    {
        return Err(PlotError::InvalidSize { width, height });
    }
    if series.is_empty() {
        return Err(PlotError::NothingToPlot);
    }

    let (frame, step) = Frame::new(width, height, series);
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    draw_grid(&mut img, &frame, step);

    let pixels: Vec<(i64, i64)> = series
        .points()
        .iter()
        .map(|&[hz, db]| (frame.x(hz), frame.y(db)))
        .collect();

    if let [(x, y)] = pixels.as_slice() {
        for dx in -1..=1 {
            for dy in -1..=1 {
                put(&mut img, x + dx, y + dy, TRACE);
            }
        }
    }
    for pair in pixels.windows(2) {
        draw_line(&mut img, pair[0], pair[1], TRACE);
    }

    Ok(img)
}

/// Render the series and write it as a PNG file
pub fn render_png<P: AsRef<Path>>(
    series: &PlotSeries,
    path: P,
    width: u32,
    height: u32,
) -> Result<(), PlotError> {
    let path = path.as_ref();
    let img = render_image(series, width, height)?;
    img.save_with_format(path, ImageFormat::Png)?;

    log::info!("Wrote {}x{} spectrum plot to {}", width, height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::{AnalyzerConfig, SpectrumAnalyzer};

    fn noise_series() -> PlotSeries {
        // Deterministic pseudo-random signal
        let mut state = 12345u64;
        let signal: Vec<f64> = (0..512)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                (state >> 11) as f64 / (1u64 << 53) as f64 - 0.5
            })
            .collect();

        let mut analyzer = SpectrumAnalyzer::new(AnalyzerConfig::default());
        let spectrum = analyzer.analyze(&signal).unwrap();
        PlotSeries::from_spectrum(&spectrum).unwrap()
    }

    #[test]
    fn test_db_step() {
        assert_eq!(db_step(80.0), 10.0);
        assert_eq!(db_step(16.0), 2.0);
        assert_eq!(db_step(0.0), 10.0);
        assert_eq!(db_step(350.0), 50.0);
    }

    #[test]
    fn test_trace_stays_inside_plot_area() {
        let img = render_image(&noise_series(), 400, 300).unwrap();
        assert_eq!(img.dimensions(), (400, 300));

        let trace: Vec<(u32, u32)> = img
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == TRACE)
            .map(|(x, y, _)| (x, y))
            .collect();

        assert!(!trace.is_empty());
        for (x, y) in trace {
            assert!(x >= MARGIN_LEFT && x <= 400 - MARGIN_RIGHT);
            assert!(y >= MARGIN_TOP && y <= 300 - MARGIN_BOTTOM);
        }
    }

    #[test]
    fn test_single_point_is_visible() {
        let mut analyzer = SpectrumAnalyzer::new(AnalyzerConfig::default());
        let spectrum = analyzer.analyze(&[1.0]).unwrap();
        let series = PlotSeries::from_spectrum(&spectrum).unwrap();

        let img = render_image(&series, 200, 120).unwrap();
        assert!(img.pixels().any(|p| *p == TRACE));
    }

    #[test]
    fn test_too_small() {
        assert!(matches!(
            render_image(&noise_series(), 40, 300),
            Err(PlotError::InvalidSize { width: 40, height: 300 })
        ));
    }

    #[test]
    fn test_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spectrum.png");

        render_png(&noise_series(), &path, 320, 200).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (320, 200));
    }
}
