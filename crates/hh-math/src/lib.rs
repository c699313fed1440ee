//! # hh-math
//!
//! Classical numerical-analysis routines: convergence testing, 1D
//! root-finding, quadrature, ODE integration, and polynomial interpolation.
//!
//! All routines are referentially transparent: no state is carried between
//! calls, and diagnostic reporting happens through caller-supplied observer
//! callbacks rather than printing.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Convergence tests for iterative processes.
pub mod convergence;

/// Numerical quadrature.
pub mod integrals;

/// 1D polynomial interpolation.
pub mod interpolations;

/// Fixed-step ODE integration.
pub mod ode;

/// 1D root-finding solvers.
pub mod solvers1d;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use convergence::{close, has_converged, x_ratio_err, ConvergenceTest};
pub use integrals::{simpson_1_3, Integrator, Simpson13};
pub use interpolations::{lagrange_poly, Interpolation1D, LagrangeInterpolation};
pub use ode::{integrate_scalar, OdeTrajectory, RungeKutta4, StateDerivative};
pub use solvers1d::{newton_raphson, newton_raphson_observed, RootResult};
