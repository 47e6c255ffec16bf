//! Criterion benchmarks for prng_distributions samplers.
//!
//! Measures per-draw cost of the closed-form samplers, the piecewise table
//! lookup across segment counts, and the cost of one-shot validation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prng_core::engines::{XorShift128Plus, XorShiftAdd};
use prng_distributions::closed_form::{
    linear_sample, HermiteDistribution, LinearDistribution, TrapezoidalDistribution,
    TriangularDistribution, UniformDistribution,
};
use prng_distributions::piecewise::{CdfWidth, PiecewiseHermite, PiecewiseLinear};
use prng_distributions::standard::{ExponentialDistribution, NormalDistribution};
use prng_distributions::Sampler;

/// Benchmark precomputed closed-form draws.
fn bench_closed_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("closed_form");
    let mut engine = XorShift128Plus::from_seed_value(1_u64).unwrap();

    let uniform = UniformDistribution::new(0.0_f64, 1.0).unwrap();
    group.bench_function("uniform", |b| b.iter(|| black_box(uniform.sample(&mut engine))));

    let triangular = TriangularDistribution::new(0.0_f64, 3.0, 10.0).unwrap();
    group.bench_function("triangular", |b| {
        b.iter(|| black_box(triangular.sample(&mut engine)))
    });

    let trapezoidal = TrapezoidalDistribution::new(0.0_f64, 1.0, 3.0, 4.0).unwrap();
    group.bench_function("trapezoidal", |b| {
        b.iter(|| black_box(trapezoidal.sample(&mut engine)))
    });

    let linear = LinearDistribution::new(0.0_f64, 1.0, 0.5, 2.0).unwrap();
    group.bench_function("linear", |b| b.iter(|| black_box(linear.sample(&mut engine))));

    let hermite = HermiteDistribution::new(0.0_f64, 1.0, 0.5, 2.0, -1.0, 3.0).unwrap();
    group.bench_function("hermite", |b| b.iter(|| black_box(hermite.sample(&mut engine))));

    let normal = NormalDistribution::new(0.0_f64, 1.0).unwrap();
    group.bench_function("normal", |b| b.iter(|| black_box(normal.sample(&mut engine))));

    let exponential = ExponentialDistribution::new(1.0_f64).unwrap();
    group.bench_function("exponential", |b| {
        b.iter(|| black_box(exponential.sample(&mut engine)))
    });

    group.bench_function("linear_one_shot", |b| {
        b.iter(|| black_box(linear_sample(&mut engine, 0.0_f64, 1.0, 0.5, 2.0).unwrap()))
    });

    group.finish();
}

/// Benchmark piecewise draws as the segment count grows.
fn bench_piecewise(c: &mut Criterion) {
    let mut group = c.benchmark_group("piecewise");

    for size in [4usize, 64, 1024] {
        let xs: Vec<f64> = (0..=size).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 1.0 + (x * 0.1).sin().abs()).collect();
        let slopes: Vec<f64> = (0..size).flat_map(|_| [0.0, 0.0]).collect();

        for width in [CdfWidth::Narrow, CdfWidth::Wide] {
            let linear = PiecewiseLinear::new(&xs, &ys, width).unwrap();
            let mut engine = XorShiftAdd::from_seed_value(2_u64).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("linear_{:?}", width), size),
                &linear,
                |b, dist| b.iter(|| black_box(dist.sample(&mut engine))),
            );
        }

        let hermite = PiecewiseHermite::from_arrays(&xs, &ys, &slopes, CdfWidth::Wide).unwrap();
        let mut engine = XorShift128Plus::from_seed_value(3_u64).unwrap();
        group.bench_with_input(BenchmarkId::new("hermite", size), &hermite, |b, dist| {
            b.iter(|| black_box(dist.sample(&mut engine)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_closed_form, bench_piecewise);
criterion_main!(benches);
