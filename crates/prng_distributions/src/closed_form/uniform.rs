//! Uniform distribution on `[x0, x1]`.

use super::{ensure_finite, ensure_ordered};
use crate::error::DistributionError;
use crate::generator::Sampler;
use crate::unit::SampleFloat;
use prng_core::engine::BitEngine;

/// Draws `x0 + u (x1 - x0)` with `u` on the closed unit interval.
///
/// Both bounds are reachable. `x0 == x1` is allowed and always returns `x0`.
///
/// # Errors
///
/// `ArgumentOutOfRange` for non-finite bounds, `InvalidArgument` when
/// `x0 > x1`.
///
/// # Examples
///
/// ```rust
/// use prng_core::engines::SplitMix64;
/// use prng_distributions::closed_form::uniform_sample;
///
/// let mut engine = SplitMix64::new(1);
/// let x = uniform_sample(&mut engine, -2.0_f64, 2.0).unwrap();
/// assert!((-2.0..=2.0).contains(&x));
/// ```
pub fn uniform_sample<T, E>(engine: &mut E, x0: T, x1: T) -> Result<T, DistributionError>
where
    T: SampleFloat,
    E: BitEngine + ?Sized,
{
    Ok(UniformDistribution::new(x0, x1)?.sample(engine))
}

/// Precomputed uniform distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformDistribution<T> {
    x0: T,
    x1: T,
    width: T,
}

impl<T: SampleFloat> UniformDistribution<T> {
    /// Validates and stores the bounds.
    pub fn new(x0: T, x1: T) -> Result<Self, DistributionError> {
        ensure_finite("x0", x0)?;
        ensure_finite("x1", x1)?;
        ensure_ordered("x", x0, x1)?;
        Ok(Self {
            x0,
            x1,
            width: x1 - x0,
        })
    }

    /// Lower bound.
    pub fn lower(&self) -> T {
        self.x0
    }

    /// Upper bound.
    pub fn upper(&self) -> T {
        self.x1
    }

    /// Maps a unit value in `[0, 1]` onto the support.
    #[inline]
    pub(crate) fn at(&self, u: T) -> T {
        (self.x0 + u * self.width).min(self.x1)
    }
}

impl<T: SampleFloat> Sampler for UniformDistribution<T> {
    type Output = T;

    #[inline]
    fn sample<E: BitEngine + ?Sized>(&self, engine: &mut E) -> T {
        self.at(T::closed_unit(engine))
    }
}
