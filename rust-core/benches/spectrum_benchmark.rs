use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use raw_spectrum::spectrum::{AnalyzerConfig, SpectrumAnalyzer};

fn spectrum_benchmark(c: &mut Criterion) {
    let signal: Vec<f64> = (0..48000).map(|n| (n as f64 * 0.01).sin()).collect();
    let mut analyzer = SpectrumAnalyzer::new(AnalyzerConfig::default());

    let mut group = c.benchmark_group("spectrum");
    group.sample_size(50).measurement_time(Duration::from_secs(10));
    group.bench_function("one second at 48 kHz", |b| {
        b.iter(|| analyzer.analyze(black_box(&signal)))
    });
    group.finish();
}

criterion_group!(benches, spectrum_benchmark);
criterion_main!(benches);
