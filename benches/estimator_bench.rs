//! Estimator Benchmarks
//!
//! Benchmarks for the hot paths of the error sweep:
//! - Phase-model vector generation
//! - Exhaustive direction search at several domain resolutions
//! - One full (sigma, frequency) sweep condition
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use disha_df::{
    phase_differences, AngleDomain, AntennaArray, CancelToken, DirectionFinder, ErrorSweep,
    NullProgress, SweepConfig,
};
use std::f64::consts::PI;

// ============================================================================
// Test Fixtures
// ============================================================================

const FREQ: f64 = 250e6;

/// Standard 4-element ring (6 pairs).
fn bench_array() -> AntennaArray {
    AntennaArray::circular(0.5, 4).unwrap()
}

/// Larger 8-element ring (28 pairs).
fn wide_array() -> AntennaArray {
    AntennaArray::circular(0.5, 8).unwrap()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_phase_model(c: &mut Criterion) {
    let small = bench_array();
    let wide = wide_array();

    let mut group = c.benchmark_group("phase_model");
    group.bench_function("4_elements", |b| {
        b.iter(|| phase_differences(black_box(&small), black_box(0.7), black_box(FREQ)))
    });
    group.bench_function("8_elements", |b| {
        b.iter(|| phase_differences(black_box(&wide), black_box(0.7), black_box(FREQ)))
    });
    group.finish();
}

fn bench_direction_search(c: &mut Criterion) {
    let array = bench_array();
    let measured = phase_differences(&array, 0.85, FREQ);

    let mut group = c.benchmark_group("direction_search");
    for points in [90usize, 360, 720] {
        let finder =
            DirectionFinder::new(array.clone(), FREQ, AngleDomain::full_circle(points));
        group.bench_with_input(
            BenchmarkId::from_parameter(points),
            &finder,
            |b, finder| b.iter(|| finder.estimate(black_box(&measured)).unwrap()),
        );
    }
    group.finish();
}

fn bench_sweep_condition(c: &mut Criterion) {
    let array = bench_array();
    let config = SweepConfig {
        freq_start: 249e6,
        freq_stop: 251e6,
        freq_points: 1,
        phi_min: -PI,
        phi_max: PI,
        phi_points: 36,
        noise_sigmas: vec![0.3],
        search_points: 180,
        seed: 42,
        workers: 1,
    };

    c.bench_function("sweep_single_condition", |b| {
        b.iter(|| {
            let sweep = ErrorSweep::new(config.clone()).unwrap();
            sweep
                .run(black_box(&array), &NullProgress, &CancelToken::new())
                .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_phase_model,
    bench_direction_search,
    bench_sweep_condition
);
criterion_main!(benches);
