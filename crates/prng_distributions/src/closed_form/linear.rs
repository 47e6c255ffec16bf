//! Linear density on `[x0, x1]` running from `y0` to `y1`.

use super::{ensure_finite, ensure_non_negative};
use crate::error::DistributionError;
use crate::generator::Sampler;
use crate::unit::SampleFloat;
use prng_core::engine::BitEngine;

/// One-shot draw from the density that interpolates linearly between
/// `(x0, y0)` and `(x1, y1)`.
///
/// # Errors
///
/// `ArgumentOutOfRange` for non-finite parameters or negative heights;
/// `InvalidArgument` unless `x0 < x1` and `y0 + y1 > 0`.
///
/// # Examples
///
/// ```rust
/// use prng_core::engines::SplitMix64;
/// use prng_distributions::closed_form::linear_sample;
///
/// let mut engine = SplitMix64::new(2);
/// let x = linear_sample(&mut engine, 0.0_f64, 1.0, 0.0, 2.0).unwrap();
/// assert!(x > 0.0 && x < 1.0);
/// ```
pub fn linear_sample<T, E>(
    engine: &mut E,
    x0: T,
    x1: T,
    y0: T,
    y1: T,
) -> Result<T, DistributionError>
where
    T: SampleFloat,
    E: BitEngine + ?Sized,
{
    Ok(LinearDistribution::new(x0, x1, y0, y1)?.sample(engine))
}

/// Precomputed linear-density distribution.
///
/// Heights are scaled by the larger of the two, so the inversion works on
/// `h(t) = h0 + (h1 - h0) t` over `t` in `[0, 1]` and never squares a
/// coordinate or a raw height. The CDF root is taken in the form
///
/// ```text
/// t = u (h0 + h1) / (h0 + sqrt(h0² + u (h1² - h0²)))
/// ```
///
/// which has no cancellation because `h0 >= 0`. Equal heights reduce to the
/// uniform map `x0 + u (x1 - x0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearDistribution<T> {
    x0: T,
    x1: T,
    dx: T,
    h0: T,
    h0_sq: T,
    h_sum: T,
    h_sq_span: T,
    area: T,
    flat: bool,
}

impl<T: SampleFloat> LinearDistribution<T> {
    /// Validates the segment and precomputes the normalised heights.
    pub fn new(x0: T, x1: T, y0: T, y1: T) -> Result<Self, DistributionError> {
        ensure_finite("x0", x0)?;
        ensure_finite("x1", x1)?;
        ensure_non_negative("y0", y0)?;
        ensure_non_negative("y1", y1)?;
        if !(x0 < x1) {
            return Err(DistributionError::invalid(
                "x",
                format!("segment must have positive width, got [{}, {}]", x0, x1),
            ));
        }
        if y0 + y1 <= T::zero() {
            return Err(DistributionError::invalid(
                "y",
                "segment must have positive area",
            ));
        }

        let dx = x1 - x0;
        if !dx.is_finite() {
            return Err(DistributionError::out_of_range(
                "x",
                format!("width of [{}, {}] is not representable", x0, x1),
            ));
        }

        let half = T::cast(0.5);
        let y_max = y0.max(y1);
        let h0 = y0 / y_max;
        let h1 = y1 / y_max;
        let flat = (y1 - y0).abs() <= T::epsilon() * (y0 + y1);

        Ok(Self {
            x0,
            x1,
            dx,
            h0,
            h0_sq: h0 * h0,
            h_sum: h0 + h1,
            h_sq_span: h1 * h1 - h0 * h0,
            area: (half * y0 + half * y1) * dx,
            flat,
        })
    }

    /// Area under the density.
    pub fn area(&self) -> T {
        self.area
    }

    /// Maps `u` in `(0, 1)` onto the support.
    #[inline]
    pub(crate) fn invert(&self, u: T) -> T {
        if self.flat {
            return self.x0 + u * self.dx;
        }

        let r = (self.h0_sq + u * self.h_sq_span).sqrt();
        let t = u * self.h_sum / (self.h0 + r);
        (self.x0 + t * self.dx).max(self.x0).min(self.x1)
    }
}

impl<T: SampleFloat> Sampler for LinearDistribution<T> {
    type Output = T;

    #[inline]
    fn sample<E: BitEngine + ?Sized>(&self, engine: &mut E) -> T {
        self.invert(T::open_unit(engine))
    }
}
