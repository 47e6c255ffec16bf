//! Piecewise cubic Hermite density.
//!
//! Three input shapes are accepted and all reduce to a list of
//! [`HermiteSegment`] records before a single constructor validates them:
//!
//! - arrays `(xs, ys, slopes)` with `slopes.len() == 2 * (xs.len() - 1)`;
//!   `slopes[2i]` leaves `xs[i]` and `slopes[2i + 1]` arrives at `xs[i + 1]`
//! - knots `(x, y, slope)` with one slope shared by both adjoining segments
//! - explicit segment records

use super::{validate_length, validate_non_negative, validate_partition, CdfWidth, SegmentTable};
use crate::closed_form::{ensure_finite, HermiteDistribution, HermiteSegment};
use crate::error::DistributionError;
use crate::generator::Sampler;
use crate::unit::SampleFloat;
use prng_core::engine::{BitEngine, Engine};

/// One-shot draw from a piecewise Hermite density given as arrays.
pub fn piecewise_hermite_sample<T, E>(
    engine: &mut E,
    xs: &[T],
    ys: &[T],
    slopes: &[T],
) -> Result<T, DistributionError>
where
    T: SampleFloat,
    E: Engine + ?Sized,
{
    let width = CdfWidth::for_engine(engine);
    Ok(PiecewiseHermite::from_arrays(xs, ys, slopes, width)?.sample(engine))
}

/// Piecewise cubic Hermite density.
///
/// # Examples
///
/// ```rust
/// use prng_core::engines::SplitMix64;
/// use prng_distributions::piecewise::{CdfWidth, PiecewiseHermite};
/// use prng_distributions::Sampler;
///
/// // Smooth bump through three knots with zero slope at the peak
/// let knots = [(0.0_f64, 0.0, 1.0), (1.0, 1.0, 0.0), (2.0, 0.0, -1.0)];
/// let dist = PiecewiseHermite::from_knots(&knots, CdfWidth::Wide).unwrap();
/// let x = dist.sample(&mut SplitMix64::new(12));
/// assert!(x > 0.0 && x < 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct PiecewiseHermite<T: SampleFloat> {
    table: SegmentTable<HermiteDistribution<T>>,
}

impl<T: SampleFloat> PiecewiseHermite<T> {
    /// Builds from knot abscissae, densities and per-segment end slopes.
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` unless `ys.len() == xs.len() >= 2` and
    ///   `slopes.len() == 2 * (xs.len() - 1)`
    /// - otherwise as [`from_segments`](Self::from_segments)
    pub fn from_arrays(
        xs: &[T],
        ys: &[T],
        slopes: &[T],
        width: CdfWidth,
    ) -> Result<Self, DistributionError> {
        validate_partition(xs, 2)?;
        validate_length("ys", ys, xs.len())?;
        validate_length("slopes", slopes, 2 * (xs.len() - 1))?;

        let segments: Vec<HermiteSegment<T>> = xs
            .windows(2)
            .zip(ys.windows(2))
            .zip(slopes.chunks_exact(2))
            .map(|((x, y), m)| HermiteSegment::new(x[0], x[1], y[0], y[1], m[0], m[1]))
            .collect();
        Self::from_segments(&segments, width)
    }

    /// Builds from `(x, y, slope)` knots; the slope is continuous across
    /// each interior knot.
    pub fn from_knots(knots: &[(T, T, T)], width: CdfWidth) -> Result<Self, DistributionError> {
        if knots.len() < 2 {
            return Err(DistributionError::LengthMismatch {
                name: "knots",
                expected: 2,
                got: knots.len(),
            });
        }
        let segments: Vec<HermiteSegment<T>> = knots
            .windows(2)
            .map(|pair| {
                let (x0, y0, m0) = pair[0];
                let (x1, y1, m1) = pair[1];
                HermiteSegment::new(x0, x1, y0, y1, m0, m1)
            })
            .collect();
        Self::from_segments(&segments, width)
    }

    /// Builds from explicit segment records.
    ///
    /// Segments must be in order; adjacent records need not share endpoint
    /// values, so discontinuous densities are allowed.
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` for an empty list
    /// - `InvalidArgument` for overlapping or reversed segments, or zero
    ///   total area
    /// - `ArgumentOutOfRange` for non-finite values or negative endpoint
    ///   densities
    pub fn from_segments(
        segments: &[HermiteSegment<T>],
        width: CdfWidth,
    ) -> Result<Self, DistributionError> {
        if segments.is_empty() {
            return Err(DistributionError::LengthMismatch {
                name: "segments",
                expected: 1,
                got: 0,
            });
        }

        for segment in segments {
            ensure_finite("x", segment.x0)?;
            ensure_finite("x", segment.x1)?;
            ensure_finite("slopes", segment.m0)?;
            ensure_finite("slopes", segment.m1)?;
            validate_non_negative("ys", &[segment.y0, segment.y1])?;
            if segment.x1 < segment.x0 {
                return Err(DistributionError::invalid(
                    "x",
                    format!("segment [{}, {}] is reversed", segment.x0, segment.x1),
                ));
            }
        }
        if let Some(i) = segments.windows(2).position(|w| w[1].x0 < w[0].x1) {
            return Err(DistributionError::invalid(
                "x",
                format!("segment {} overlaps segment {}", i + 1, i),
            ));
        }

        let mut candidates = Vec::with_capacity(segments.len());
        for (i, segment) in segments.iter().enumerate() {
            let area = if segment.x0 < segment.x1 {
                segment.area().widen()
            } else {
                0.0
            };
            if area > 0.0 {
                candidates.push((i, area, HermiteDistribution::from_segment(*segment)?));
            } else {
                tracing::trace!(index = i, "dropping zero-area hermite segment");
            }
        }

        Ok(Self {
            table: SegmentTable::build("piecewise_hermite", candidates, width)?,
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

impl<T: SampleFloat> Sampler for PiecewiseHermite<T> {
    type Output = T;

    #[inline]
    fn sample<E: BitEngine + ?Sized>(&self, engine: &mut E) -> T {
        self.table.sample(engine)
    }
}
