//! Normal and exponential samplers.
//!
//! Both delegate to the ziggurat tables in `rand_distr`, reached through
//! [`prng_core::engine::EngineRng`]. Only parameter validation and the affine
//! transform live here.

mod exponential;
mod normal;

pub use exponential::{exponential_sample, ExponentialDistribution};
pub use normal::{normal_sample, NormalDistribution};
