//! End-to-end runs over dumps written to a temporary directory

use std::f64::consts::PI;
use std::fs;

use raw_spectrum::io::{write_raw, RawError};
use raw_spectrum::plot::{render_png, PlotSeries};
use raw_spectrum::spectrum::{AnalyzerConfig, AxisBound, DbFloor};
use raw_spectrum::{run, ByteOrder, Error, RunConfig};

fn config_for(path: &std::path::Path) -> RunConfig {
    RunConfig {
        input: path.to_path_buf(),
        ..RunConfig::default()
    }
}

#[test]
fn test_zero_dump() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("debug.raw");
    write_raw(&path, &[0.0; 4], ByteOrder::Native).unwrap();

    let spectrum = run(&config_for(&path)).unwrap();

    assert_eq!(spectrum.fft_size, 8);
    assert_eq!(spectrum.len(), 5);
    assert_eq!(spectrum.frequencies_hz, vec![0.0, 12000.0, 24000.0, 36000.0, 48000.0]);
    assert!(spectrum.magnitudes().iter().all(|&m| m == 0.0));
    assert!(spectrum.magnitude_db.iter().all(|db| db.is_infinite() && *db < 0.0));
}

#[test]
fn test_lengths_and_axis() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("debug.raw");
    let samples: Vec<f64> = (0..777).map(|n| ((n * 37 % 101) as f64 - 50.0) / 50.0).collect();
    write_raw(&path, &samples, ByteOrder::Native).unwrap();

    let spectrum = run(&config_for(&path)).unwrap();

    assert_eq!(spectrum.len(), 778);
    assert_eq!(spectrum.frequencies_hz.len(), 778);
    assert_eq!(spectrum.frequencies_hz[0], 0.0);
    assert_eq!(*spectrum.frequencies_hz.last().unwrap(), 48000.0);

    let step = 48000.0 / 777.0;
    for pair in spectrum.frequencies_hz.windows(2) {
        assert!(pair[1] > pair[0]);
        assert!((pair[1] - pair[0] - step).abs() < 1e-6);
    }
}

#[test]
fn test_sine_dump_peaks_at_tone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.raw");
    let sample_rate = 48000.0;
    let tone_hz = 3000.0;
    let samples: Vec<f64> = (0..2400)
        .map(|n| (2.0 * PI * tone_hz * n as f64 / sample_rate).sin())
        .collect();
    write_raw(&path, &samples, ByteOrder::Little).unwrap();

    let config = RunConfig {
        input: path,
        byte_order: ByteOrder::Little,
        analyzer: AnalyzerConfig {
            sample_rate,
            axis_bound: AxisBound::Nyquist,
            ..AnalyzerConfig::default()
        },
    };
    let spectrum = run(&config).unwrap();

    let (peak_hz, _) = spectrum.peak().unwrap();
    assert!((peak_hz - tone_hz).abs() <= spectrum.bin_width_hz());
}

#[test]
fn test_misaligned_dump_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("debug.raw");
    fs::write(&path, [0u8; 9]).unwrap();

    match run(&config_for(&path)) {
        Err(Error::Raw(RawError::Misaligned { len })) => assert_eq!(len, 9),
        other => panic!("expected misaligned dump error, got {:?}", other),
    }
}

#[test]
fn test_empty_and_missing_dumps() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty.raw");
    fs::write(&empty, b"").unwrap();

    assert!(matches!(run(&config_for(&empty)), Err(Error::Raw(RawError::Empty))));
    assert!(matches!(
        run(&config_for(&dir.path().join("missing.raw"))),
        Err(Error::Raw(RawError::Io { .. }))
    ));
}

#[test]
fn test_plot_written_for_floored_silence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("debug.raw");
    write_raw(&path, &[0.0; 32], ByteOrder::Native).unwrap();

    // -inf everywhere leaves nothing, a floor makes the silence plottable
    let mut config = config_for(&path);
    config.analyzer.db_floor = DbFloor::Clamp(-300.0);
    let spectrum = run(&config).unwrap();

    let series = PlotSeries::from_spectrum(&spectrum).unwrap();
    assert_eq!(series.len(), 32);
    assert_eq!(series.y_range(), (-300.0, -300.0));

    let png = dir.path().join("debug_spectrum.png");
    render_png(&series, &png, 640, 360).unwrap();
    assert!(fs::metadata(&png).unwrap().len() > 0);
}
