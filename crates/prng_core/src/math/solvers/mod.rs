//! Root-finding solvers for inverting cumulative distribution functions.
//!
//! ## Available Solvers
//!
//! - [`NewtonHalleySolver`]: Second-order iteration using the first and second
//!   derivative, with a Newton fallback when the Halley denominator degenerates
//!   and a bisection safeguard in bracketed mode
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence threshold on the step size
//! - `max_iterations`: Maximum iteration count
//!
//! [`SolverConfig::sampling`] gives the setting used by the spline samplers:
//! 32 iterations and a tolerance scaled to the float type's machine epsilon.
//!
//! ## Examples
//!
//! ```
//! use prng_core::math::solvers::{NewtonHalleySolver, SolverConfig};
//!
//! // Solve x³ = 2 on [1, 2]
//! let solver = NewtonHalleySolver::new(SolverConfig::sampling());
//! let root = solver.solve_bracketed(|x: f64| (x * x * x - 2.0, 3.0 * x * x, 6.0 * x), 1.0, 1.0, 2.0);
//! assert!((root - 2.0_f64.cbrt()).abs() < 1e-10);
//! ```

mod config;
mod newton_halley;

pub use config::SolverConfig;
pub use newton_halley::NewtonHalleySolver;
