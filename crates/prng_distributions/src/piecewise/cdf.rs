//! Integer CDF tables for piece selection.
//!
//! Segment areas are accumulated in `f64` and rescaled to the full range of
//! an unsigned integer type, so a single native-width engine draw selects a
//! segment with a binary search and no floating-point work.

use prng_core::engine::{BitEngine, Engine};

/// Resolution of a CDF table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CdfWidth {
    /// 32-bit entries, selected with `next32`.
    Narrow,
    /// 64-bit entries, selected with `next64`.
    #[default]
    Wide,
}

impl CdfWidth {
    /// The width matching an engine's native step size.
    pub fn for_engine<E: Engine + ?Sized>(engine: &E) -> Self {
        if engine.step_bit_count() <= 32 {
            CdfWidth::Narrow
        } else {
            CdfWidth::Wide
        }
    }
}

/// 2^64 - 2^11: the largest `f64` strictly below 2^64 that is a multiple of
/// the `f64` spacing near 2^64, so `fraction * ADJUSTED_MAX` never saturates.
const ADJUSTED_MAX: f64 = 18_446_744_073_709_549_568.0;
const ADJUSTED_REMAINDER: f64 = (u64::MAX - 18_446_744_073_709_549_568) as f64;
const NARROW_SCALE: f64 = 4_294_967_296.0;

/// Monotone integer CDF whose last entry is the type's maximum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CdfTable {
    Narrow(Vec<u32>),
    Wide(Vec<u64>),
}

impl CdfTable {
    /// Builds the table from strictly positive segment areas.
    pub(crate) fn from_areas(areas: &[f64], width: CdfWidth) -> Self {
        let total: f64 = areas.iter().sum();
        let mut running = 0.0_f64;
        let fractions = areas.iter().map(|area| {
            running += area;
            running / total
        });

        match width {
            CdfWidth::Narrow => {
                let mut table = Vec::with_capacity(areas.len());
                let mut previous = 0u32;
                for fraction in fractions {
                    let scaled = (fraction * NARROW_SCALE).floor().min(u32::MAX as f64) as u32;
                    previous = scaled.max(previous);
                    table.push(previous);
                }
                if let Some(last) = table.last_mut() {
                    *last = u32::MAX;
                }
                CdfTable::Narrow(table)
            }
            CdfWidth::Wide => {
                let mut table = Vec::with_capacity(areas.len());
                let mut previous = 0u64;
                for fraction in fractions {
                    let base = (fraction * ADJUSTED_MAX).floor() as u64;
                    let extra = (fraction * ADJUSTED_REMAINDER).floor() as u64;
                    let scaled = base.saturating_add(extra);
                    previous = scaled.max(previous);
                    table.push(previous);
                }
                if let Some(last) = table.last_mut() {
                    *last = u64::MAX;
                }
                CdfTable::Wide(table)
            }
        }
    }

    /// Resolution of this table.
    pub(crate) fn width(&self) -> CdfWidth {
        match self {
            CdfTable::Narrow(_) => CdfWidth::Narrow,
            CdfTable::Wide(_) => CdfWidth::Wide,
        }
    }

    /// Number of segments.
    pub(crate) fn len(&self) -> usize {
        match self {
            CdfTable::Narrow(table) => table.len(),
            CdfTable::Wide(table) => table.len(),
        }
    }

    /// Index of the first entry strictly greater than `n`, or the last index.
    #[inline]
    pub(crate) fn lookup_narrow(table: &[u32], n: u32) -> usize {
        table.partition_point(|&c| c <= n).min(table.len().saturating_sub(1))
    }

    /// Index of the first entry strictly greater than `n`, or the last index.
    #[inline]
    pub(crate) fn lookup_wide(table: &[u64], n: u64) -> usize {
        table.partition_point(|&c| c <= n).min(table.len().saturating_sub(1))
    }

    /// Selects a segment with one native-width draw.
    #[inline]
    pub(crate) fn select<E: BitEngine + ?Sized>(&self, engine: &mut E) -> usize {
        match self {
            CdfTable::Narrow(table) => Self::lookup_narrow(table, engine.next32()),
            CdfTable::Wide(table) => Self::lookup_wide(table, engine.next64()),
        }
    }
}
