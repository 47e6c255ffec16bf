//! Trapezoidal distribution: linear ramp up on `[x0, x1]`, plateau on
//! `[x1, x2]`, linear ramp down on `[x2, x3]`.

use super::{ensure_finite, ensure_ordered};
use crate::error::DistributionError;
use crate::generator::Sampler;
use crate::unit::SampleFloat;
use prng_core::engine::BitEngine;

/// One-shot trapezoidal draw.
///
/// # Errors
///
/// `ArgumentOutOfRange` for non-finite corners; `InvalidArgument` unless
/// `x0 <= x1 <= x2 <= x3` and `x0 < x3`.
pub fn trapezoidal_sample<T, E>(
    engine: &mut E,
    x0: T,
    x1: T,
    x2: T,
    x3: T,
) -> Result<T, DistributionError>
where
    T: SampleFloat,
    E: BitEngine + ?Sized,
{
    Ok(TrapezoidalDistribution::new(x0, x1, x2, x3)?.sample(engine))
}

/// Precomputed trapezoidal distribution.
///
/// With unit plateau height the three regions have areas
/// `(x1 - x0) / 2`, `x2 - x1` and `(x3 - x2) / 2`. The draw selects the
/// region by cumulative area and is inverted in closed form within it.
///
/// # Examples
///
/// ```rust
/// use prng_core::engines::SplitMix64;
/// use prng_distributions::closed_form::TrapezoidalDistribution;
/// use prng_distributions::Sampler;
///
/// let dist = TrapezoidalDistribution::new(0.0_f64, 1.0, 3.0, 4.0).unwrap();
/// let mut engine = SplitMix64::new(8);
/// let x = dist.sample(&mut engine);
/// assert!((0.0..=4.0).contains(&x));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrapezoidalDistribution<T> {
    corners: [T; 4],
    /// Cumulative fraction at the end of the rising ramp.
    rise_end: T,
    /// Cumulative fraction at the end of the plateau.
    plateau_end: T,
    total_area: T,
}

impl<T: SampleFloat> TrapezoidalDistribution<T> {
    /// Validates the corners and precomputes region boundaries.
    pub fn new(x0: T, x1: T, x2: T, x3: T) -> Result<Self, DistributionError> {
        for (name, value) in [("x0", x0), ("x1", x1), ("x2", x2), ("x3", x3)] {
            ensure_finite(name, value)?;
        }
        ensure_ordered("x1", x0, x1)?;
        ensure_ordered("x2", x1, x2)?;
        ensure_ordered("x3", x2, x3)?;
        if !(x0 < x3) {
            return Err(DistributionError::invalid(
                "x",
                format!("support must have positive width, got [{}, {}]", x0, x3),
            ));
        }

        let half = T::cast(0.5);
        let rise = (x1 - x0) * half;
        let plateau = x2 - x1;
        let fall = (x3 - x2) * half;
        let total_area = rise + plateau + fall;

        Ok(Self {
            corners: [x0, x1, x2, x3],
            rise_end: rise / total_area,
            plateau_end: (rise + plateau) / total_area,
            total_area,
        })
    }

    /// Corner abscissae `[x0, x1, x2, x3]`.
    pub fn corners(&self) -> [T; 4] {
        self.corners
    }

    #[inline]
    fn invert(&self, u: T) -> T {
        let [x0, x1, x2, x3] = self.corners;
        let two = T::cast(2.0);
        let x = if u < self.rise_end {
            x0 + (u * self.total_area * two * (x1 - x0)).sqrt()
        } else if u <= self.plateau_end {
            x1 + (u - self.rise_end) * self.total_area
        } else {
            x3 - ((T::one() - u) * self.total_area * two * (x3 - x2)).sqrt()
        };
        x.max(x0).min(x3)
    }
}

impl<T: SampleFloat> Sampler for TrapezoidalDistribution<T> {
    type Output = T;

    #[inline]
    fn sample<E: BitEngine + ?Sized>(&self, engine: &mut E) -> T {
        self.invert(T::closed_unit(engine))
    }
}
