//! # prng_distributions: Continuous Samplers (Layer 2)
//!
//! Converts uniform engine bits into values following continuous
//! distributions. Every sampler works with any [`prng_core::BitEngine`] and
//! is generic over `f32` / `f64` through [`SampleFloat`].
//!
//! This crate provides:
//! - Unit-interval draws with closed and open discipline (`unit`)
//! - Single-segment samplers: uniform, triangular, trapezoidal, linear,
//!   cubic Hermite (`closed_form`)
//! - Piecewise samplers over integer CDF tables (`piecewise`)
//! - Normal and exponential samplers via the `rand_distr` ziggurat (`standard`)
//! - The [`Sampler`] trait and the engine-bound [`Generator`] handle
//!
//! ## Usage Examples
//!
//! ```rust
//! use prng_core::engines::XorShiftAdd;
//! use prng_distributions::closed_form::{triangular_sample, TriangularDistribution};
//! use prng_distributions::Generator;
//! use std::cell::RefCell;
//!
//! let mut engine = XorShiftAdd::from_seed_value(7_u64).unwrap();
//!
//! // One-shot: validates on every call
//! let x: f64 = triangular_sample(&mut engine, 0.0, 3.0, 10.0).unwrap();
//! assert!((0.0..=10.0).contains(&x));
//!
//! // Precomputed: validate once, draw many
//! let dist = TriangularDistribution::new(0.0_f64, 3.0, 10.0).unwrap();
//! let shared = RefCell::new(engine);
//! let generator = Generator::new(dist, &shared);
//! let mut batch = [0.0; 16];
//! generator.fill(&mut batch);
//! ```
//!
//! ## Error Handling
//!
//! Constructors and one-shot functions return [`DistributionError`] before
//! drawing from the engine, so a rejected call leaves the engine untouched.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod closed_form;
pub mod error;
pub mod generator;
pub mod piecewise;
pub mod standard;
pub mod unit;

pub use error::DistributionError;
pub use generator::{Generator, Sampler};
pub use unit::SampleFloat;
