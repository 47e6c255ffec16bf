//! # Closed-Form Samplers
//!
//! Single-segment continuous distributions sampled by exact inversion of
//! their CDF (or, for the Hermite segment, by a bracketed Newton–Halley
//! inversion).
//!
//! | Distribution | One-shot | Precomputed | Draw |
//! |--------------|----------|-------------|------|
//! | Uniform | [`uniform_sample`] | [`UniformDistribution`] | closed |
//! | Triangular | [`triangular_sample`] | [`TriangularDistribution`] | closed |
//! | Trapezoidal | [`trapezoidal_sample`] | [`TrapezoidalDistribution`] | closed |
//! | Linear density | [`linear_sample`] | [`LinearDistribution`] | open |
//! | Cubic Hermite density | [`hermite_sample`] | [`HermiteDistribution`] | open |
//!
//! One-shot functions validate their arguments on every call and return a
//! [`DistributionError`] before touching the engine. Precomputed
//! distributions validate once in `new` and implement [`Sampler`].
//!
//! [`Sampler`]: crate::Sampler

mod hermite;
mod linear;
mod trapezoidal;
mod triangular;
mod uniform;

pub use hermite::{hermite_sample, HermiteDistribution, HermiteSegment};
pub use linear::{linear_sample, LinearDistribution};
pub use trapezoidal::{trapezoidal_sample, TrapezoidalDistribution};
pub use triangular::{triangular_sample, TriangularDistribution};
pub use uniform::{uniform_sample, UniformDistribution};

use crate::error::DistributionError;
use crate::unit::SampleFloat;

/// Rejects NaN and infinite parameters.
pub(crate) fn ensure_finite<T: SampleFloat>(
    name: &'static str,
    value: T,
) -> Result<(), DistributionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DistributionError::out_of_range(
            name,
            format!("must be finite, got {}", value),
        ))
    }
}

/// Rejects negative or non-finite densities and weights.
pub(crate) fn ensure_non_negative<T: SampleFloat>(
    name: &'static str,
    value: T,
) -> Result<(), DistributionError> {
    ensure_finite(name, value)?;
    if value < T::zero() {
        return Err(DistributionError::out_of_range(
            name,
            format!("must be non-negative, got {}", value),
        ));
    }
    Ok(())
}

/// Requires `lower <= upper`.
pub(crate) fn ensure_ordered<T: SampleFloat>(
    name: &'static str,
    lower: T,
    upper: T,
) -> Result<(), DistributionError> {
    if lower <= upper {
        Ok(())
    } else {
        Err(DistributionError::invalid(
            name,
            format!("bounds not ordered: {} > {}", lower, upper),
        ))
    }
}
