//! Exponential sampler over the unit-rate ziggurat variate.

use crate::closed_form::ensure_finite;
use crate::error::DistributionError;
use crate::generator::Sampler;
use crate::unit::SampleFloat;
use prng_core::engine::BitEngine;

/// One-shot exponential draw with the given rate.
///
/// # Errors
///
/// `ArgumentOutOfRange` unless `rate` is finite and strictly positive.
pub fn exponential_sample<T, E>(engine: &mut E, rate: T) -> Result<T, DistributionError>
where
    T: SampleFloat,
    E: BitEngine + ?Sized,
{
    Ok(ExponentialDistribution::new(rate)?.sample(engine))
}

/// Exponential distribution with density `rate · exp(-rate x)` on `[0, ∞)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExponentialDistribution<T> {
    inverse_rate: T,
}

impl<T: SampleFloat> ExponentialDistribution<T> {
    /// Validates the rate.
    pub fn new(rate: T) -> Result<Self, DistributionError> {
        ensure_finite("rate", rate)?;
        if rate <= T::zero() {
            return Err(DistributionError::out_of_range(
                "rate",
                format!("must be positive, got {}", rate),
            ));
        }
        Ok(Self {
            inverse_rate: T::one() / rate,
        })
    }

    /// Rate parameter.
    pub fn rate(&self) -> T {
        T::one() / self.inverse_rate
    }
}

impl<T: SampleFloat> Sampler for ExponentialDistribution<T> {
    type Output = T;

    #[inline]
    fn sample<E: BitEngine + ?Sized>(&self, engine: &mut E) -> T {
        T::standard_exponential(engine) * self.inverse_rate
    }
}
