//! Benchmarks for the HLI formula paths and the full evaluation pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use heatload::{compute_black_globe_index, compute_no_black_globe_index, evaluate, Measurements};

fn bench_formulas(c: &mut Criterion) {
    c.bench_function("black_globe_index", |b| {
        b.iter(|| compute_black_globe_index(black_box(39.0), black_box(93.0), black_box(12.9)))
    });

    c.bench_function("no_black_globe_index", |b| {
        b.iter(|| {
            compute_no_black_globe_index(
                black_box(27.4),
                black_box(66.0),
                black_box(0.0),
                black_box(9.7),
            )
        })
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let bag = Measurements {
        bg_temp: Some(39.0),
        rel_hum: Some(93.0),
        wind_speed: Some(12.9),
        ..Default::default()
    };

    c.bench_function("evaluate_with_indicator", |b| {
        b.iter(|| evaluate(black_box(&bag), black_box(true)))
    });
}

criterion_group!(benches, bench_formulas, bench_evaluate);
criterion_main!(benches);
