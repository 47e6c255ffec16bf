//! Piecewise-uniform density given by segment probabilities.

use super::{validate_length, validate_non_negative, validate_partition, CdfWidth, SegmentTable};
use crate::closed_form::UniformDistribution;
use crate::error::DistributionError;
use crate::generator::Sampler;
use crate::unit::SampleFloat;
use prng_core::engine::{BitEngine, Engine};

/// One-shot draw from a weighted piecewise-uniform distribution.
pub fn piecewise_weighted_uniform_sample<T, E>(
    engine: &mut E,
    xs: &[T],
    weights: &[T],
) -> Result<T, DistributionError>
where
    T: SampleFloat,
    E: Engine + ?Sized,
{
    let width = CdfWidth::for_engine(engine);
    Ok(PiecewiseWeightedUniform::new(xs, weights, width)?.sample(engine))
}

/// Segment `i` is chosen with probability `weights[i] / Σ weights`, then
/// sampled uniformly on `[xs[i], xs[i+1]]`.
///
/// Unlike [`PiecewiseUniform`](super::PiecewiseUniform) the weight is the
/// segment's probability mass, independent of its width. A zero-width
/// segment with positive weight is a point mass at that abscissa.
#[derive(Debug, Clone)]
pub struct PiecewiseWeightedUniform<T> {
    table: SegmentTable<UniformDistribution<T>>,
}

impl<T: SampleFloat> PiecewiseWeightedUniform<T> {
    /// Validates the shape and builds the CDF table.
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` unless `xs.len() == weights.len() + 1` with at least
    ///   one segment
    /// - `InvalidArgument` for a decreasing partition or all-zero weights
    /// - `ArgumentOutOfRange` for non-finite values or negative weights
    pub fn new(xs: &[T], weights: &[T], width: CdfWidth) -> Result<Self, DistributionError> {
        validate_partition(xs, 2)?;
        validate_length("weights", weights, xs.len() - 1)?;
        validate_non_negative("weights", weights)?;

        let mut candidates = Vec::with_capacity(weights.len());
        for (i, (pair, &weight)) in xs.windows(2).zip(weights).enumerate() {
            candidates.push((
                i,
                weight.widen(),
                UniformDistribution::new(pair[0], pair[1])?,
            ));
        }

        Ok(Self {
            table: SegmentTable::build("piecewise_weighted_uniform", candidates, width)?,
        })
    }

    /// Number of drawable (positive-weight) segments.
    pub fn segment_count(&self) -> usize {
        self.table.segments().len()
    }

    /// CDF table resolution.
    pub fn cdf_width(&self) -> CdfWidth {
        self.table.width()
    }
}

impl<T: SampleFloat> Sampler for PiecewiseWeightedUniform<T> {
    type Output = T;

    #[inline]
    fn sample<E: BitEngine + ?Sized>(&self, engine: &mut E) -> T {
        self.table.sample(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use prng_core::engines::XorShift128Plus;

    #[test]
    fn test_weights_ignore_width() {
        // Narrow segment carries most of the mass
        let dist = PiecewiseWeightedUniform::new(
            &[0.0_f64, 0.1, 10.0],
            &[3.0, 1.0],
            CdfWidth::Wide,
        )
        .unwrap();
        let mut engine = XorShift128Plus::from_seed_value(70_u64).unwrap();
        let n = 100_000;
        let narrow = (0..n).filter(|_| dist.sample(&mut engine) <= 0.1).count();
        assert_relative_eq!(narrow as f64 / n as f64, 0.75, epsilon = 0.01);
    }

    #[test]
    fn test_point_mass() {
        let dist =
            PiecewiseWeightedUniform::new(&[1.0_f64, 1.0], &[2.0], CdfWidth::Narrow).unwrap();
        let mut engine = XorShift128Plus::from_seed_value(71_u64).unwrap();
        assert_eq!(dist.sample(&mut engine), 1.0);
        assert_eq!(dist.cdf_width(), CdfWidth::Narrow);
    }

    #[test]
    fn test_one_shot() {
        let mut engine = XorShift128Plus::from_seed_value(72_u64).unwrap();
        let x = piecewise_weighted_uniform_sample(&mut engine, &[0.0_f32, 1.0, 2.0], &[0.0, 1.0])
            .unwrap();
        assert!((1.0..=2.0).contains(&x));
    }

    #[test]
    fn test_rejects_negative_weight() {
        assert!(matches!(
            PiecewiseWeightedUniform::new(&[0.0_f64, 1.0, 2.0], &[1.0, -1.0], CdfWidth::Wide),
            Err(DistributionError::ArgumentOutOfRange { name: "weights", .. })
        ));
    }
}
