//! Cubic Hermite density segment.
//!
//! The density on `[x0, x1]` is the cubic Hermite interpolant through
//! `(x0, y0)` and `(x1, y1)` with end slopes `m0` and `m1`. In the local
//! coordinate `t = (x - x0) / (x1 - x0)` it reads
//!
//! ```text
//! p(t) = c0 + c1 t + c2 t² + c3 t³
//! c0 = y0
//! c1 = dx m0
//! c2 = -3 y0 + 3 y1 - 2 dx m0 - dx m1
//! c3 =  2 y0 - 2 y1 +   dx m0 + dx m1
//! ```
//!
//! and the CDF is the quartic `∫ p`. Sampling inverts the quartic with a
//! bracketed Newton–Halley iteration started at the draw itself.

use super::{ensure_finite, ensure_non_negative, LinearDistribution};
use crate::error::DistributionError;
use crate::generator::Sampler;
use crate::unit::SampleFloat;
use prng_core::engine::BitEngine;
use prng_core::math::solvers::{NewtonHalleySolver, SolverConfig};

/// Endpoint description of one Hermite segment.
///
/// This is the single representation every Hermite input shape (arrays,
/// knots, explicit records) is reduced to before validation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HermiteSegment<T> {
    /// Left abscissa.
    pub x0: T,
    /// Right abscissa.
    pub x1: T,
    /// Density at `x0`.
    pub y0: T,
    /// Density at `x1`.
    pub y1: T,
    /// Slope leaving `x0`.
    pub m0: T,
    /// Slope arriving at `x1`.
    pub m1: T,
}

impl<T: SampleFloat> HermiteSegment<T> {
    /// Builds a segment record.
    pub fn new(x0: T, x1: T, y0: T, y1: T, m0: T, m1: T) -> Self {
        Self {
            x0,
            x1,
            y0,
            y1,
            m0,
            m1,
        }
    }

    /// Local polynomial coefficients `[c0, c1, c2, c3]`.
    fn coefficients(&self) -> [T; 4] {
        let dx = self.x1 - self.x0;
        let two = T::cast(2.0);
        let three = T::cast(3.0);
        let (y0, y1) = (self.y0, self.y1);
        let (s0, s1) = (dx * self.m0, dx * self.m1);
        [
            y0,
            s0,
            -three * y0 + three * y1 - two * s0 - s1,
            two * y0 - two * y1 + s0 + s1,
        ]
    }

    /// Area under the density, `dx ∫₀¹ p(t) dt`.
    pub fn area(&self) -> T {
        let [c0, c1, c2, c3] = self.coefficients();
        let unit = c0 + c1 / T::cast(2.0) + c2 / T::cast(3.0) + c3 / T::cast(4.0);
        (self.x1 - self.x0) * unit
    }
}

/// One-shot Hermite-segment draw.
///
/// # Errors
///
/// See [`HermiteDistribution::new`].
///
/// # Examples
///
/// ```rust
/// use prng_core::engines::SplitMix64;
/// use prng_distributions::closed_form::hermite_sample;
///
/// let mut engine = SplitMix64::new(77);
/// // Bell-shaped bump on [0, 1]
/// let x = hermite_sample(&mut engine, 0.0_f64, 1.0, 0.0, 0.0, 4.0, -4.0).unwrap();
/// assert!(x > 0.0 && x < 1.0);
/// ```
pub fn hermite_sample<T, E>(
    engine: &mut E,
    x0: T,
    x1: T,
    y0: T,
    y1: T,
    m0: T,
    m1: T,
) -> Result<T, DistributionError>
where
    T: SampleFloat,
    E: BitEngine + ?Sized,
{
    let segment = HermiteSegment::new(x0, x1, y0, y1, m0, m1);
    Ok(HermiteDistribution::from_segment(segment)?.sample(engine))
}

/// Precomputed Hermite-segment distribution.
///
/// Shapes whose cubic and quadratic coefficients vanish to within the float
/// width's epsilon are sampled by [`LinearDistribution`] instead.
#[derive(Debug, Clone)]
pub struct HermiteDistribution<T: SampleFloat> {
    segment: HermiteSegment<T>,
    coefficients: [T; 4],
    /// Quartic CDF coefficients `[c0, c1/2, c2/3, c3/4]`.
    cdf_coefficients: [T; 4],
    unit_area: T,
    linear: Option<LinearDistribution<T>>,
    solver: NewtonHalleySolver<T>,
}

impl<T: SampleFloat> HermiteDistribution<T> {
    /// Builds from endpoint values and slopes.
    pub fn new(x0: T, x1: T, y0: T, y1: T, m0: T, m1: T) -> Result<Self, DistributionError> {
        Self::from_segment(HermiteSegment::new(x0, x1, y0, y1, m0, m1))
    }

    /// Validates a segment record and precomputes the CDF.
    ///
    /// # Errors
    ///
    /// `ArgumentOutOfRange` for non-finite values or a density that is
    /// negative at an endpoint or anywhere inside the segment;
    /// `InvalidArgument` unless `x0 < x1` and the area is positive.
    pub fn from_segment(segment: HermiteSegment<T>) -> Result<Self, DistributionError> {
        ensure_finite("x0", segment.x0)?;
        ensure_finite("x1", segment.x1)?;
        ensure_non_negative("y0", segment.y0)?;
        ensure_non_negative("y1", segment.y1)?;
        ensure_finite("m0", segment.m0)?;
        ensure_finite("m1", segment.m1)?;
        if !(segment.x0 < segment.x1) {
            return Err(DistributionError::invalid(
                "x",
                format!(
                    "segment must have positive width, got [{}, {}]",
                    segment.x0, segment.x1
                ),
            ));
        }

        let coefficients = segment.coefficients();
        let [c0, c1, c2, c3] = coefficients;
        let cdf_coefficients = [c0, c1 / T::cast(2.0), c2 / T::cast(3.0), c3 / T::cast(4.0)];
        let unit_area = cdf_coefficients.iter().fold(T::zero(), |acc, &c| acc + c);
        if !(unit_area > T::zero()) {
            return Err(DistributionError::invalid(
                "y",
                format!("segment must have positive area, got {}", unit_area),
            ));
        }

        let dx = segment.x1 - segment.x0;
        let scale = segment.y0.abs()
            + segment.y1.abs()
            + dx * (segment.m0.abs() + segment.m1.abs());
        let tolerance = T::epsilon() * T::cast(8.0) * scale;

        let lowest = interior_minimum(coefficients);
        if lowest < -tolerance {
            return Err(DistributionError::out_of_range(
                "y",
                format!("density falls to {} inside the segment", lowest),
            ));
        }

        let linear = if c2.abs() <= tolerance && c3.abs() <= tolerance {
            Some(LinearDistribution::new(
                segment.x0, segment.x1, segment.y0, segment.y1,
            )?)
        } else {
            None
        };

        Ok(Self {
            segment,
            coefficients,
            cdf_coefficients,
            unit_area,
            linear,
            solver: NewtonHalleySolver::new(SolverConfig::sampling()),
        })
    }

    /// The validated segment.
    pub fn segment(&self) -> &HermiteSegment<T> {
        &self.segment
    }

    /// Area under the density.
    pub fn area(&self) -> T {
        self.unit_area * (self.segment.x1 - self.segment.x0)
    }

    /// Whether draws are delegated to the linear sampler.
    pub fn is_linear(&self) -> bool {
        self.linear.is_some()
    }

    /// Maps `u` in `(0, 1)` onto the support.
    #[inline]
    pub(crate) fn invert(&self, u: T) -> T {
        match &self.linear {
            Some(linear) => linear.invert(u),
            None => self.invert_cubic(u),
        }
    }

    /// Solves `P(t) = u P(1)` for `t` and maps back to `x`.
    fn invert_cubic(&self, u: T) -> T {
        let [c0, c1, c2, c3] = self.coefficients;
        let [q1, q2, q3, q4] = self.cdf_coefficients;
        let target = u * self.unit_area;
        let two = T::cast(2.0);
        let three = T::cast(3.0);

        let eval = |t: T| {
            let cdf = (((q4 * t + q3) * t + q2) * t + q1) * t;
            let density = ((c3 * t + c2) * t + c1) * t + c0;
            let slope = (three * c3 * t + two * c2) * t + c1;
            (cdf - target, density, slope)
        };

        let t = self
            .solver
            .solve_bracketed(eval, u, T::zero(), T::one());
        let dx = self.segment.x1 - self.segment.x0;
        (self.segment.x0 + t * dx).max(self.segment.x0).min(self.segment.x1)
    }
}

impl<T: SampleFloat> Sampler for HermiteDistribution<T> {
    type Output = T;

    #[inline]
    fn sample<E: BitEngine + ?Sized>(&self, engine: &mut E) -> T {
        self.invert(T::open_unit(engine))
    }
}

/// Smallest value of the cubic `c0 + c1 t + c2 t² + c3 t³` at its critical
/// points inside `(0, 1)`, or zero when there are none.
fn interior_minimum<T: SampleFloat>(coefficients: [T; 4]) -> T {
    let [c0, c1, c2, c3] = coefficients;
    let density = |t: T| ((c3 * t + c2) * t + c1) * t + c0;

    // Critical points solve 3 c3 t² + 2 c2 t + c1 = 0
    let a = T::cast(3.0) * c3;
    let b = T::cast(2.0) * c2;
    let discriminant = b * b - T::cast(4.0) * a * c1;
    if discriminant < T::zero() {
        return T::zero();
    }
    let root = discriminant.sqrt();
    let q = T::cast(-0.5) * if b < T::zero() { b - root } else { b + root };

    let mut lowest = T::zero();
    for t in [q / a, c1 / q] {
        if t > T::zero() && t < T::one() {
            lowest = lowest.min(density(t));
        }
    }
    lowest
}
