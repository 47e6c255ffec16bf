//! Unit-interval draws and the float abstraction shared by every sampler.
//!
//! Two draw disciplines are used:
//!
//! | Draw | Range | Resolution (`f64` / `f32`) |
//! |------|-------|----------------------------|
//! | [`SampleFloat::closed_unit`] | `[0, 1]` | 53 / 24 bits |
//! | [`SampleFloat::open_unit`] | `(0, 1)` | 52 / 23 bits, centred in each cell |
//!
//! Samplers whose support edges must be reachable use the closed draw. The
//! linear and Hermite samplers divide by quantities that vanish at the edges
//! and use the open draw.

use num_traits::Float;
use prng_core::engine::{BitEngine, EngineRng};
use rand_distr::{Distribution, Exp1, StandardNormal};
use std::fmt::{Debug, Display};

/// Floating-point types the samplers can produce.
///
/// Implemented for `f32` and `f64`. Each implementation consumes exactly one
/// native-width engine draw per unit value (`next32` for `f32`, `next64` for
/// `f64`).
pub trait SampleFloat: Float + Debug + Display + Send + Sync + 'static {
    /// Uniform draw on the closed interval `[0, 1]`.
    fn closed_unit<E: BitEngine + ?Sized>(engine: &mut E) -> Self;

    /// Uniform draw on the open interval `(0, 1)`.
    fn open_unit<E: BitEngine + ?Sized>(engine: &mut E) -> Self;

    /// Standard normal variate via the `rand_distr` ziggurat.
    fn standard_normal<E: BitEngine + ?Sized>(engine: &mut E) -> Self;

    /// Unit-rate exponential variate via the `rand_distr` ziggurat.
    fn standard_exponential<E: BitEngine + ?Sized>(engine: &mut E) -> Self;

    /// Converts an `f64` constant, rounding to the nearest representable value.
    fn cast(value: f64) -> Self;

    /// Widens to `f64` for accumulation in CDF tables.
    fn widen(self) -> f64;
}

const F64_CLOSED_DIVISOR: f64 = ((1u64 << 53) - 1) as f64;
const F64_OPEN_SCALE: f64 = 1.0 / (1u64 << 52) as f64;
const F32_CLOSED_DIVISOR: f32 = ((1u32 << 24) - 1) as f32;
const F32_OPEN_SCALE: f32 = 1.0 / (1u32 << 23) as f32;

impl SampleFloat for f64 {
    #[inline]
    fn closed_unit<E: BitEngine + ?Sized>(engine: &mut E) -> Self {
        (engine.next64() >> 11) as f64 / F64_CLOSED_DIVISOR
    }

    #[inline]
    fn open_unit<E: BitEngine + ?Sized>(engine: &mut E) -> Self {
        ((engine.next64() >> 12) as f64 + 0.5) * F64_OPEN_SCALE
    }

    fn standard_normal<E: BitEngine + ?Sized>(engine: &mut E) -> Self {
        StandardNormal.sample(&mut EngineRng::new(engine))
    }

    fn standard_exponential<E: BitEngine + ?Sized>(engine: &mut E) -> Self {
        Exp1.sample(&mut EngineRng::new(engine))
    }

    #[inline]
    fn cast(value: f64) -> Self {
        value
    }

    #[inline]
    fn widen(self) -> f64 {
        self
    }
}

impl SampleFloat for f32 {
    #[inline]
    fn closed_unit<E: BitEngine + ?Sized>(engine: &mut E) -> Self {
        (engine.next32() >> 8) as f32 / F32_CLOSED_DIVISOR
    }

    #[inline]
    fn open_unit<E: BitEngine + ?Sized>(engine: &mut E) -> Self {
        ((engine.next32() >> 9) as f32 + 0.5) * F32_OPEN_SCALE
    }

    fn standard_normal<E: BitEngine + ?Sized>(engine: &mut E) -> Self {
        StandardNormal.sample(&mut EngineRng::new(engine))
    }

    fn standard_exponential<E: BitEngine + ?Sized>(engine: &mut E) -> Self {
        Exp1.sample(&mut EngineRng::new(engine))
    }

    #[inline]
    fn cast(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn widen(self) -> f64 {
        self as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Engine returning a fixed word forever.
    struct Constant(u64);

    impl BitEngine for Constant {
        fn next64(&mut self) -> u64 {
            self.0
        }
    }

    #[test]
    fn test_closed_unit_reaches_both_edges() {
        assert_eq!(f64::closed_unit(&mut Constant(0)), 0.0);
        assert_eq!(f64::closed_unit(&mut Constant(u64::MAX)), 1.0);
        assert_eq!(f32::closed_unit(&mut Constant(0)), 0.0);
        assert_eq!(f32::closed_unit(&mut Constant(u64::MAX)), 1.0);
    }

    #[test]
    fn test_open_unit_excludes_edges() {
        let low = f64::open_unit(&mut Constant(0));
        let high = f64::open_unit(&mut Constant(u64::MAX));
        assert!(low > 0.0 && high < 1.0);

        let low = f32::open_unit(&mut Constant(0));
        let high = f32::open_unit(&mut Constant(u64::MAX));
        assert!(low > 0.0 && high < 1.0);
    }

    #[test]
    fn test_open_unit_is_symmetric() {
        let low = f64::open_unit(&mut Constant(0));
        let high = f64::open_unit(&mut Constant(u64::MAX));
        assert_eq!(low, 1.0 - high);
    }

    #[test]
    fn test_f32_uses_low_word() {
        // next32 defaults to the low half of next64
        let value = f32::closed_unit(&mut Constant(0xFFFF_FFFF_0000_0000));
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_cast_and_widen() {
        assert_eq!(f32::cast(0.5), 0.5_f32);
        assert_eq!(0.25_f32.widen(), 0.25_f64);
    }
}
