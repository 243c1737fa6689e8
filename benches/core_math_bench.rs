use chartpath::core::{HighLow, compute_bounds};
use chartpath::interpolation::{
    MonotoneCubicOptions, ProjectedPoint, SegmentData, monotone_cubic,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_compute_bounds(c: &mut Criterion) {
    c.bench_function("compute_bounds", |b| {
        b.iter(|| {
            let _ = compute_bounds(
                black_box(480.0),
                black_box(HighLow::new(13_287.4, -92.6)),
                black_box(25.0),
                black_box(false),
            )
            .expect("bounds computation should succeed");
        })
    });
}

fn synthetic_series(len: usize) -> Vec<ProjectedPoint<()>> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            let y = 300.0 + (t * 0.05).sin() * 120.0 + (i % 7) as f64;
            ProjectedPoint {
                x: t * 0.5,
                y,
                data: SegmentData {
                    value: Some(y),
                    index: i,
                    meta: (),
                },
            }
        })
        .collect()
}

fn bench_monotone_cubic_10k(c: &mut Criterion) {
    let points = synthetic_series(10_000);
    let options = MonotoneCubicOptions::default();

    c.bench_function("monotone_cubic_10k", |b| {
        b.iter(|| {
            let _ = monotone_cubic(black_box(&points), black_box(&options));
        })
    });
}

fn bench_stringify_10k(c: &mut Criterion) {
    let points = synthetic_series(10_000);
    let path = monotone_cubic(&points, &MonotoneCubicOptions::default());

    c.bench_function("stringify_10k", |b| {
        b.iter(|| {
            let _ = black_box(&path).stringify();
        })
    });
}

criterion_group!(
    benches,
    bench_compute_bounds,
    bench_monotone_cubic_10k,
    bench_stringify_10k
);
criterion_main!(benches);
