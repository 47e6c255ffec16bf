//! Piecewise-linear density through `(xs[i], ys[i])`.

use super::{validate_length, validate_non_negative, validate_partition, CdfWidth, SegmentTable};
use crate::closed_form::LinearDistribution;
use crate::error::DistributionError;
use crate::generator::Sampler;
use crate::unit::SampleFloat;
use prng_core::engine::{BitEngine, Engine};

/// One-shot draw from a piecewise-linear density.
pub fn piecewise_linear_sample<T, E>(
    engine: &mut E,
    xs: &[T],
    ys: &[T],
) -> Result<T, DistributionError>
where
    T: SampleFloat,
    E: Engine + ?Sized,
{
    let width = CdfWidth::for_engine(engine);
    Ok(PiecewiseLinear::new(xs, ys, width)?.sample(engine))
}

/// Density interpolating linearly between consecutive knots.
///
/// # Examples
///
/// ```rust
/// use prng_core::engines::XorShiftAdd;
/// use prng_distributions::piecewise::{CdfWidth, PiecewiseLinear};
/// use prng_distributions::Sampler;
///
/// // Tent on [0, 2]
/// let dist = PiecewiseLinear::new(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 0.0], CdfWidth::Narrow).unwrap();
/// let mut engine = XorShiftAdd::from_seed_value(4_u64).unwrap();
/// let x = dist.sample(&mut engine);
/// assert!(x > 0.0 && x < 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct PiecewiseLinear<T> {
    table: SegmentTable<LinearDistribution<T>>,
}

impl<T: SampleFloat> PiecewiseLinear<T> {
    /// Validates the knots and builds the CDF table.
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` unless `xs` and `ys` have equal length of at least 2
    /// - `InvalidArgument` for a decreasing partition or zero total area
    /// - `ArgumentOutOfRange` for non-finite values or negative densities
    pub fn new(xs: &[T], ys: &[T], width: CdfWidth) -> Result<Self, DistributionError> {
        validate_partition(xs, 2)?;
        validate_length("ys", ys, xs.len())?;
        validate_non_negative("ys", ys)?;

        let half = T::cast(0.5);
        let mut candidates = Vec::with_capacity(xs.len() - 1);
        for (i, (x, y)) in xs.windows(2).zip(ys.windows(2)).enumerate() {
            let area = (half * (y[0] + y[1]) * (x[1] - x[0])).widen();
            if area > 0.0 {
                candidates.push((i, area, LinearDistribution::new(x[0], x[1], y[0], y[1])?));
            } else {
                tracing::trace!(index = i, "dropping zero-area linear segment");
            }
        }

        Ok(Self {
            table: SegmentTable::build("piecewise_linear", candidates, width)?,
        })
    }

    /// Number of drawable (positive-area) segments.
    pub fn segment_count(&self) -> usize {
        self.table.segments().len()
    }

    /// CDF table resolution.
    pub fn cdf_width(&self) -> CdfWidth {
        self.table.width()
    }

    /// Total area under the density.
    pub fn area(&self) -> T {
        self.table
            .segments()
            .iter()
            .fold(T::zero(), |acc, segment| acc + segment.area())
    }
}

impl<T: SampleFloat> Sampler for PiecewiseLinear<T> {
    type Output = T;

    #[inline]
    fn sample<E: BitEngine + ?Sized>(&self, engine: &mut E) -> T {
        self.table.sample(engine)
    }
}
