//! Normal sampler over the standard ziggurat variate.

use crate::closed_form::{ensure_finite, ensure_non_negative};
use crate::error::DistributionError;
use crate::generator::Sampler;
use crate::unit::SampleFloat;
use prng_core::engine::BitEngine;

/// One-shot normal draw with the given mean and standard deviation.
///
/// # Errors
///
/// `ArgumentOutOfRange` for a non-finite mean or a negative / non-finite
/// standard deviation.
pub fn normal_sample<T, E>(engine: &mut E, mean: T, std_dev: T) -> Result<T, DistributionError>
where
    T: SampleFloat,
    E: BitEngine + ?Sized,
{
    Ok(NormalDistribution::new(mean, std_dev)?.sample(engine))
}

/// Normal distribution `N(mean, std_dev²)`.
///
/// A zero standard deviation is accepted and yields `mean` on every draw
/// (the engine is still advanced).
///
/// # Examples
///
/// ```rust
/// use prng_core::engines::XorShiftAdd;
/// use prng_distributions::standard::NormalDistribution;
/// use prng_distributions::Sampler;
///
/// let mut engine = XorShiftAdd::from_seed_value(1_u32).unwrap();
/// let dist = NormalDistribution::new(100.0_f64, 15.0).unwrap();
/// let x = dist.sample(&mut engine);
/// assert!(x.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalDistribution<T> {
    mean: T,
    std_dev: T,
}

impl<T: SampleFloat> NormalDistribution<T> {
    /// Validates the parameters.
    pub fn new(mean: T, std_dev: T) -> Result<Self, DistributionError> {
        ensure_finite("mean", mean)?;
        ensure_non_negative("std_dev", std_dev)?;
        Ok(Self { mean, std_dev })
    }

    /// Mean.
    pub fn mean(&self) -> T {
        self.mean
    }

    /// Standard deviation.
    pub fn std_dev(&self) -> T {
        self.std_dev
    }
}

impl<T: SampleFloat> Sampler for NormalDistribution<T> {
    type Output = T;

    #[inline]
    fn sample<E: BitEngine + ?Sized>(&self, engine: &mut E) -> T {
        self.mean + self.std_dev * T::standard_normal(engine)
    }
}
