//! Numerical helpers shared by the samplers.
//!
//! - [`solvers`]: Newton–Halley root finding with solver configuration

pub mod solvers;
