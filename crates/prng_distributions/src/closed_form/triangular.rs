//! Triangular distribution on `[x0, x1]` with peak at `mode`.

use super::{ensure_finite, ensure_ordered};
use crate::error::DistributionError;
use crate::generator::Sampler;
use crate::unit::SampleFloat;
use prng_core::engine::BitEngine;

/// One-shot triangular draw.
///
/// # Errors
///
/// `ArgumentOutOfRange` for non-finite parameters; `InvalidArgument` unless
/// `x0 <= mode <= x1` and `x0 < x1`.
///
/// # Examples
///
/// ```rust
/// use prng_core::engines::SplitMix64;
/// use prng_distributions::closed_form::triangular_sample;
///
/// let mut engine = SplitMix64::new(5);
/// let x = triangular_sample(&mut engine, 0.0_f64, 3.0, 10.0).unwrap();
/// assert!((0.0..=10.0).contains(&x));
/// ```
pub fn triangular_sample<T, E>(
    engine: &mut E,
    x0: T,
    mode: T,
    x1: T,
) -> Result<T, DistributionError>
where
    T: SampleFloat,
    E: BitEngine + ?Sized,
{
    Ok(TriangularDistribution::new(x0, mode, x1)?.sample(engine))
}

/// Precomputed triangular distribution.
///
/// The draw `u` is compared against the split point
/// `(mode - x0) / (x1 - x0)`; each side inverts its quadratic CDF directly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriangularDistribution<T> {
    x0: T,
    mode: T,
    x1: T,
    split: T,
    lower_scale: T,
    upper_scale: T,
}

impl<T: SampleFloat> TriangularDistribution<T> {
    /// Validates the shape and precomputes the split point.
    pub fn new(x0: T, mode: T, x1: T) -> Result<Self, DistributionError> {
        ensure_finite("x0", x0)?;
        ensure_finite("mode", mode)?;
        ensure_finite("x1", x1)?;
        ensure_ordered("mode", x0, mode)?;
        ensure_ordered("mode", mode, x1)?;
        if !(x0 < x1) {
            return Err(DistributionError::invalid(
                "x",
                format!("support must have positive width, got [{}, {}]", x0, x1),
            ));
        }

        let range = x1 - x0;
        Ok(Self {
            x0,
            mode,
            x1,
            split: (mode - x0) / range,
            lower_scale: range * (mode - x0),
            upper_scale: range * (x1 - mode),
        })
    }

    /// Peak location.
    pub fn mode(&self) -> T {
        self.mode
    }

    #[inline]
    fn invert(&self, u: T) -> T {
        let x = if u <= self.split {
            self.x0 + (u * self.lower_scale).sqrt()
        } else {
            self.x1 - ((T::one() - u) * self.upper_scale).sqrt()
        };
        x.max(self.x0).min(self.x1)
    }
}

impl<T: SampleFloat> Sampler for TriangularDistribution<T> {
    type Output = T;

    #[inline]
    fn sample<E: BitEngine + ?Sized>(&self, engine: &mut E) -> T {
        self.invert(T::closed_unit(engine))
    }
}
