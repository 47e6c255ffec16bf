//! Piecewise-constant density given by segment heights.

use super::{validate_length, validate_non_negative, validate_partition, CdfWidth, SegmentTable};
use crate::closed_form::UniformDistribution;
use crate::error::DistributionError;
use crate::generator::Sampler;
use crate::unit::SampleFloat;
use prng_core::engine::{BitEngine, Engine};

/// One-shot draw from a piecewise-constant density.
///
/// The CDF resolution follows the engine's native step width.
pub fn piecewise_uniform_sample<T, E>(
    engine: &mut E,
    xs: &[T],
    heights: &[T],
) -> Result<T, DistributionError>
where
    T: SampleFloat,
    E: Engine + ?Sized,
{
    let width = CdfWidth::for_engine(engine);
    Ok(PiecewiseUniform::new(xs, heights, width)?.sample(engine))
}

/// Piecewise-constant density: height `heights[i]` on `[xs[i], xs[i+1]]`.
///
/// Segment `i` has area `heights[i] * (xs[i+1] - xs[i])`.
///
/// # Examples
///
/// ```rust
/// use prng_core::engines::SplitMix64;
/// use prng_distributions::piecewise::{CdfWidth, PiecewiseUniform};
/// use prng_distributions::Sampler;
///
/// // Twice as dense on [1, 2] as on [0, 1]
/// let dist = PiecewiseUniform::new(&[0.0_f64, 1.0, 2.0], &[1.0, 2.0], CdfWidth::Wide).unwrap();
/// let x = dist.sample(&mut SplitMix64::new(3));
/// assert!((0.0..=2.0).contains(&x));
/// ```
#[derive(Debug, Clone)]
pub struct PiecewiseUniform<T> {
    table: SegmentTable<UniformDistribution<T>>,
}

impl<T: SampleFloat> PiecewiseUniform<T> {
    /// Validates the shape and builds the CDF table.
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` unless `xs.len() == heights.len() + 1` with at least
    ///   one segment
    /// - `InvalidArgument` for a decreasing partition or zero total area
    /// - `ArgumentOutOfRange` for non-finite values or negative heights
    pub fn new(xs: &[T], heights: &[T], width: CdfWidth) -> Result<Self, DistributionError> {
        validate_partition(xs, 2)?;
        validate_length("heights", heights, xs.len() - 1)?;
        validate_non_negative("heights", heights)?;

        let mut candidates = Vec::with_capacity(heights.len());
        for (i, (pair, &height)) in xs.windows(2).zip(heights).enumerate() {
            let area = (height * (pair[1] - pair[0])).widen();
            candidates.push((i, area, UniformDistribution::new(pair[0], pair[1])?));
        }

        Ok(Self {
            table: SegmentTable::build("piecewise_uniform", candidates, width)?,
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
}

impl<T: SampleFloat> Sampler for PiecewiseUniform<T> {
    type Output = T;

    #[inline]
    fn sample<E: BitEngine + ?Sized>(&self, engine: &mut E) -> T {
        self.table.sample(engine)
    }
}
