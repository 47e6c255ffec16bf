//! # Concrete Engines
//!
//! | Engine | State | Native bits | Zero state | Skip-ahead |
//! |--------|-------|-------------|------------|------------|
//! | [`SplitMix64`] | 1 × u64 | 64 | allowed | single step |
//! | [`XorShiftAdd`] | 4 × u32 | 32 | forbidden | 3^41 steps |
//! | [`XorShift128Plus`] | 2 × u64 | 64 | forbidden | 2^64 steps |
//!
//! None of the engines support skipping backwards.

mod split_mix;
mod xor_shift_128_plus;
mod xor_shift_add;

pub use split_mix::SplitMix64;
pub use xor_shift_128_plus::XorShift128Plus;
pub use xor_shift_add::XorShiftAdd;

use crate::engine::{BitEngine, Engine};
use crate::types::EngineError;
use std::fmt;
use std::str::FromStr;

/// Selector for the built-in engines.
///
/// # Examples
///
/// ```rust
/// use prng_core::engines::EngineKind;
///
/// let kind: EngineKind = "xorshift-add".parse().unwrap();
/// assert_eq!(kind, EngineKind::XorShiftAdd);
/// assert_eq!(kind.to_string(), "xorshift-add");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineKind {
    /// [`SplitMix64`]
    #[cfg_attr(feature = "serde", serde(rename = "splitmix64"))]
    SplitMix64,
    /// [`XorShiftAdd`]
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "xorshift-add"))]
    XorShiftAdd,
    /// [`XorShift128Plus`]
    #[cfg_attr(feature = "serde", serde(rename = "xorshift128plus"))]
    XorShift128Plus,
}

impl EngineKind {
    /// All built-in engine kinds.
    pub const ALL: [EngineKind; 3] = [
        EngineKind::SplitMix64,
        EngineKind::XorShiftAdd,
        EngineKind::XorShift128Plus,
    ];

    /// Canonical command-line name.
    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::SplitMix64 => "splitmix64",
            EngineKind::XorShiftAdd => "xorshift-add",
            EngineKind::XorShift128Plus => "xorshift128plus",
        }
    }

    /// Builds an engine of this kind seeded from `source`.
    pub fn create(&self, source: &mut dyn BitEngine) -> Result<Box<dyn Engine>, EngineError> {
        Ok(match self {
            EngineKind::SplitMix64 => Box::new(SplitMix64::new(source.next64())),
            EngineKind::XorShiftAdd => Box::new(XorShiftAdd::from_bit_engine(source)?),
            EngineKind::XorShift128Plus => Box::new(XorShift128Plus::from_bit_engine(source)?),
        })
    }
}

impl FromStr for EngineKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "splitmix64" | "splitmix" | "split-mix" => Ok(EngineKind::SplitMix64),
            "xorshift-add" | "xorshiftadd" | "xsadd" => Ok(EngineKind::XorShiftAdd),
            "xorshift128plus" | "xorshift128+" | "xorshift-128-plus" => {
                Ok(EngineKind::XorShift128Plus)
            }
            other => Err(EngineError::InvalidArgument(format!(
                "unknown engine '{}': expected splitmix64, xorshift-add or xorshift128plus",
                other
            ))),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
