//! # Piecewise Samplers
//!
//! Densities defined segment by segment over a partition `x[0] <= ... <= x[n]`.
//! Sampling takes two draws: one native-width integer selects a segment
//! through an integer CDF table, the second is spent by that segment's
//! closed-form sampler.
//!
//! | Distribution | Segment sampler | Inputs |
//! |--------------|-----------------|--------|
//! | [`PiecewiseUniform`] | uniform | `xs` (n+1), heights (n) |
//! | [`PiecewiseWeightedUniform`] | uniform | `xs` (n+1), weights (n) |
//! | [`PiecewiseLinear`] | linear density | `xs` (n), `ys` (n) |
//! | [`PiecewiseHermite`] | cubic Hermite density | arrays, knots or segment records |
//!
//! Zero-area segments are dropped at construction and can never be drawn.
//!
//! ## CDF resolution
//!
//! Tables are either 32-bit ([`CdfWidth::Narrow`]) or 64-bit
//! ([`CdfWidth::Wide`]). The one-shot functions pick the width matching the
//! engine's `step_bit_count`; precomputed distributions take it explicitly.

mod cdf;
mod hermite;
mod linear;
mod uniform;
mod weighted_uniform;

pub use cdf::CdfWidth;
pub use hermite::{piecewise_hermite_sample, PiecewiseHermite};
pub use linear::{piecewise_linear_sample, PiecewiseLinear};
pub use uniform::{piecewise_uniform_sample, PiecewiseUniform};
pub use weighted_uniform::{piecewise_weighted_uniform_sample, PiecewiseWeightedUniform};

use crate::closed_form::ensure_finite;
use crate::error::DistributionError;
use crate::generator::Sampler;
use crate::unit::SampleFloat;
use cdf::CdfTable;
use prng_core::engine::BitEngine;

/// Positive-area segments with their parallel CDF table.
#[derive(Debug, Clone)]
pub(crate) struct SegmentTable<S> {
    segments: Vec<S>,
    cdf: CdfTable,
}

impl<S: Sampler> SegmentTable<S> {
    /// Keeps candidates with positive area and builds the CDF over them.
    ///
    /// `candidates` yields `(index, area, segment)` in partition order. Areas
    /// are divided by the largest before the CDF is formed, so a total beyond
    /// `f64::MAX` still yields the right fractions.
    ///
    /// # Errors
    ///
    /// `ArgumentOutOfRange` if any area is NaN or infinite;
    /// `InvalidArgument` if no area is positive.
    pub(crate) fn build<I>(
        kind: &'static str,
        candidates: I,
        width: CdfWidth,
    ) -> Result<Self, DistributionError>
    where
        I: IntoIterator<Item = (usize, f64, S)>,
    {
        let mut segments = Vec::new();
        let mut areas = Vec::new();
        let mut dropped = 0usize;

        for (index, area, segment) in candidates {
            if !area.is_finite() {
                return Err(DistributionError::out_of_range(
                    "weights",
                    format!("area of segment {} is not finite", index),
                ));
            }
            if area > 0.0 {
                segments.push(segment);
                areas.push(area);
            } else {
                dropped += 1;
                tracing::trace!(kind, index, "dropping zero-area segment");
            }
        }

        if segments.is_empty() {
            return Err(DistributionError::invalid(
                "weights",
                "total area must be positive",
            ));
        }

        let largest = areas.iter().copied().fold(0.0_f64, f64::max);
        for area in &mut areas {
            *area /= largest;
        }

        let cdf = CdfTable::from_areas(&areas, width);
        tracing::trace!(
            kind,
            segments = segments.len(),
            dropped,
            ?width,
            "built piecewise CDF table"
        );
        Ok(Self { segments, cdf })
    }

    /// Segments that can be drawn.
    pub(crate) fn segments(&self) -> &[S] {
        &self.segments
    }

    pub(crate) fn width(&self) -> CdfWidth {
        self.cdf.width()
    }

    #[inline]
    pub(crate) fn sample<E: BitEngine + ?Sized>(&self, engine: &mut E) -> S::Output {
        let index = self.cdf.select(engine);
        self.segments[index].sample(engine)
    }
}

/// Validates a partition: at least `min_len` finite, non-decreasing entries.
pub(crate) fn validate_partition<T: SampleFloat>(
    xs: &[T],
    min_len: usize,
) -> Result<(), DistributionError> {
    if xs.len() < min_len {
        return Err(DistributionError::LengthMismatch {
            name: "xs",
            expected: min_len,
            got: xs.len(),
        });
    }
    for &x in xs {
        ensure_finite("xs", x)?;
    }
    if let Some(i) = xs.windows(2).position(|w| w[1] < w[0]) {
        return Err(DistributionError::invalid(
            "xs",
            format!("must be non-decreasing, x[{}] > x[{}]", i, i + 1),
        ));
    }
    Ok(())
}

/// Requires `values.len() == expected`.
pub(crate) fn validate_length<T>(
    name: &'static str,
    values: &[T],
    expected: usize,
) -> Result<(), DistributionError> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(DistributionError::LengthMismatch {
            name,
            expected,
            got: values.len(),
        })
    }
}

/// Rejects negative or non-finite entries, naming the first offender.
pub(crate) fn validate_non_negative<T: SampleFloat>(
    name: &'static str,
    values: &[T],
) -> Result<(), DistributionError> {
    for (i, &value) in values.iter().enumerate() {
        if !value.is_finite() || value < T::zero() {
            return Err(DistributionError::out_of_range(
                name,
                format!("entry {} must be finite and non-negative, got {}", i, value),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_partition() {
        assert!(validate_partition(&[0.0_f64, 1.0, 1.0, 2.0], 2).is_ok());
        assert!(matches!(
            validate_partition(&[0.0_f64], 2),
            Err(DistributionError::LengthMismatch { expected: 2, got: 1, .. })
        ));
        assert!(matches!(
            validate_partition(&[0.0_f64, 2.0, 1.0], 2),
            Err(DistributionError::InvalidArgument { name: "xs", .. })
        ));
        assert!(validate_partition(&[0.0_f64, f64::NAN], 2).is_err());
    }

    #[test]
    fn test_validate_non_negative_names_index() {
        let err = validate_non_negative("ys", &[1.0_f64, 0.0, -2.0]).unwrap_err();
        assert!(format!("{}", err).contains("entry 2"));
    }

    #[test]
    fn test_validate_length() {
        assert!(validate_length("ys", &[1.0, 2.0], 2).is_ok());
        assert!(validate_length("ys", &[1.0], 2).is_err());
    }
}
