//! Statistical and structural properties of the samplers, exercised through
//! the public API with real engines.

use approx::assert_relative_eq;
use prng_core::engine::EngineSeedExt;
use prng_core::engines::{EngineKind, SplitMix64, XorShift128Plus, XorShiftAdd};
use prng_core::seed::SeedDiffuser;
use prng_distributions::closed_form::{
    hermite_sample, linear_sample, trapezoidal_sample, triangular_sample, uniform_sample,
    HermiteDistribution, LinearDistribution, TriangularDistribution,
};
use prng_distributions::piecewise::{
    piecewise_hermite_sample, piecewise_linear_sample, CdfWidth, PiecewiseLinear,
    PiecewiseUniform,
};
use prng_distributions::standard::NormalDistribution;
use prng_distributions::{DistributionError, Generator, SampleFloat, Sampler};
use proptest::prelude::*;
use std::cell::RefCell;

// ========================================
// Triangular (0, 3, 10)
// ========================================

#[test]
fn test_triangular_support_and_peak() {
    let mut engine = XorShiftAdd::from_seed_value(2024_u64).unwrap();
    let dist = TriangularDistribution::new(0.0_f64, 3.0, 10.0).unwrap();

    let mut histogram = [0usize; 10];
    for _ in 0..100_000 {
        let x = dist.sample(&mut engine);
        assert!((0.0..=10.0).contains(&x));
        histogram[(x as usize).min(9)] += 1;
    }

    // Unit bins either side of the mode dominate
    let peak = histogram
        .iter()
        .enumerate()
        .max_by_key(|(_, count)| **count)
        .map(|(bin, _)| bin)
        .unwrap();
    assert!(peak == 2 || peak == 3, "peak bin was {}", peak);

    // Left of the mode holds 30% of the mass
    let left: usize = histogram[..3].iter().sum();
    assert_relative_eq!(left as f64 / 100_000.0, 0.3, epsilon = 0.01);
}

// ========================================
// Linear degeneracy
// ========================================

#[test]
fn test_linear_with_equal_heights_is_uniform_map() {
    let mut sampled = SplitMix64::new(5150);
    let mut reference = SplitMix64::new(5150);
    for _ in 0..1000 {
        let x = linear_sample(&mut sampled, -3.0_f64, 5.0, 2.0, 2.0).unwrap();
        let u = f64::open_unit(&mut reference);
        assert_eq!(x, u * (5.0 - -3.0) + -3.0);
    }
}

// ========================================
// Hermite vs linear closed form
// ========================================

#[test]
fn test_hermite_with_chord_slopes_matches_linear() {
    let (x0, x1, y0, y1) = (1.0_f64, 4.0, 0.5, 2.0);
    let slope = (y1 - y0) / (x1 - x0);
    let hermite = HermiteDistribution::new(x0, x1, y0, y1, slope, slope).unwrap();
    let linear = LinearDistribution::new(x0, x1, y0, y1).unwrap();

    let mut a = XorShift128Plus::from_seed_value(8_u64).unwrap();
    let mut b = XorShift128Plus::from_seed_value(8_u64).unwrap();
    for _ in 0..1000 {
        assert_relative_eq!(hermite.sample(&mut a), linear.sample(&mut b), epsilon = 1e-12);
    }
}

#[test]
fn test_hermite_bump_mean() {
    // Symmetric bump on [0, 2]
    let mut engine = SplitMix64::new(33);
    let n = 100_000;
    let mean = (0..n)
        .map(|_| hermite_sample(&mut engine, 0.0_f64, 2.0, 0.0, 0.0, 2.0, -2.0).unwrap())
        .sum::<f64>()
        / n as f64;
    assert_relative_eq!(mean, 1.0, epsilon = 0.01);
}

// ========================================
// Piecewise
// ========================================

#[test]
fn test_piecewise_linear_one_shot_width_follows_engine() {
    let mut narrow = XorShiftAdd::from_seed_value(1_u64).unwrap();
    let mut wide = XorShift128Plus::from_seed_value(1_u64).unwrap();
    let xs = [0.0_f64, 1.0, 2.0];
    let ys = [1.0, 1.0, 1.0];
    for _ in 0..100 {
        let a = piecewise_linear_sample(&mut narrow, &xs, &ys).unwrap();
        let b = piecewise_linear_sample(&mut wide, &xs, &ys).unwrap();
        assert!((0.0..=2.0).contains(&a) && (0.0..=2.0).contains(&b));
    }
}

#[test]
fn test_piecewise_hermite_one_shot() {
    let mut engine = SplitMix64::new(17);
    let x = piecewise_hermite_sample(
        &mut engine,
        &[0.0_f64, 1.0, 2.0],
        &[0.0, 1.0, 0.0],
        &[2.0, 0.0, 0.0, -2.0],
    )
    .unwrap();
    assert!(x > 0.0 && x < 2.0);
}

#[test]
fn test_piecewise_uniform_segment_frequencies() {
    let heights = [1.0_f64, 2.0, 3.0, 4.0];
    let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
    for width in [CdfWidth::Narrow, CdfWidth::Wide] {
        let dist = PiecewiseUniform::new(&xs, &heights, width).unwrap();
        let mut engine = XorShift128Plus::from_seed_value(99_u64).unwrap();
        let mut counts = [0usize; 4];
        let n = 100_000;
        for _ in 0..n {
            let x = dist.sample(&mut engine);
            counts[(x as usize).min(3)] += 1;
        }
        for (i, &count) in counts.iter().enumerate() {
            assert_relative_eq!(count as f64 / n as f64, heights[i] / 10.0, epsilon = 0.01);
        }
    }
}

// ========================================
// Generators and determinism
// ========================================

#[test]
fn test_generators_interleave_on_shared_engine() {
    let shared = RefCell::new(SplitMix64::new(400));
    let normal = Generator::new(NormalDistribution::new(0.0_f64, 1.0).unwrap(), &shared);
    let tri = Generator::new(TriangularDistribution::new(0.0_f64, 1.0, 2.0).unwrap(), &shared);

    let mut replay = SplitMix64::new(400);
    let normal_dist = NormalDistribution::new(0.0_f64, 1.0).unwrap();
    let tri_dist = TriangularDistribution::new(0.0_f64, 1.0, 2.0).unwrap();
    for _ in 0..100 {
        assert_eq!(normal.sample(), normal_dist.sample(&mut replay));
        assert_eq!(tri.sample(), tri_dist.sample(&mut replay));
    }
}

#[test]
fn test_samplers_deterministic_for_every_engine() {
    for kind in EngineKind::ALL {
        let mut a = kind.create(&mut SeedDiffuser::from_text("dists")).unwrap();
        let mut b = kind.create(&mut SeedDiffuser::from_text("dists")).unwrap();
        for _ in 0..10_000 {
            let left = trapezoidal_sample(&mut *a, 0.0_f64, 1.0, 2.0, 4.0).unwrap();
            let right = trapezoidal_sample(&mut *b, 0.0_f64, 1.0, 2.0, 4.0).unwrap();
            assert_eq!(left, right);
        }
    }
}

#[test]
fn test_rejection_leaves_engine_untouched() {
    let mut engine = XorShiftAdd::from_seed_value(3_u64).unwrap();
    engine.merge_seed_text("untouched").unwrap();
    let before = engine.words();

    assert!(matches!(
        piecewise_linear_sample(&mut engine, &[0.0_f64, 1.0], &[1.0]),
        Err(DistributionError::LengthMismatch { .. })
    ));
    assert!(uniform_sample(&mut engine, f64::NAN, 1.0).is_err());
    assert!(triangular_sample(&mut engine, 0.0_f64, 5.0, 1.0).is_err());
    assert_eq!(engine.words(), before);
}

// ========================================
// Properties
// ========================================

proptest! {
    #[test]
    fn prop_piecewise_linear_stays_in_support(
        ys in prop::collection::vec(0.0f64..10.0, 2..12),
        seed in any::<u64>(),
    ) {
        prop_assume!(ys.iter().any(|&y| y > 0.0));
        let xs: Vec<f64> = (0..ys.len()).map(|i| i as f64 * 0.5).collect();
        let dist = PiecewiseLinear::new(&xs, &ys, CdfWidth::Wide).unwrap();
        let mut engine = SplitMix64::new(seed);
        let upper = *xs.last().unwrap();
        for _ in 0..64 {
            let x = dist.sample(&mut engine);
            prop_assert!(x >= 0.0 && x <= upper);
        }
    }

    #[test]
    fn prop_uniform_bounds(lo in -1e6f64..1e6, span in 0.0f64..1e6, seed in any::<u64>()) {
        let mut engine = SplitMix64::new(seed);
        let x = uniform_sample(&mut engine, lo, lo + span).unwrap();
        prop_assert!(x >= lo && x <= lo + span);
    }

    #[test]
    fn prop_next32_draws_map_into_support(seed in any::<u64>()) {
        let mut engine = XorShiftAdd::from_seed_value(seed).unwrap();
        let dist = TriangularDistribution::new(-1.0_f32, 0.0, 1.0).unwrap();
        for _ in 0..32 {
            let x = dist.sample(&mut engine);
            prop_assert!((-1.0..=1.0).contains(&x));
        }
    }
}
