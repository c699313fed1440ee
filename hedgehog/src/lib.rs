//! # hedgehog
//!
//! Classical numerical-analysis routines: root-finding by Newton-Raphson,
//! definite integrals by Simpson's 1/3 rule, ODE integration by classical
//! 4th-order Runge-Kutta, and Lagrange polynomial interpolation.
//!
//! This crate is a **façade** that re-exports the public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `hh-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! hedgehog = "0.1"
//! ```
//!
//! ```rust
//! use hedgehog::math::{newton_raphson, ConvergenceTest};
//!
//! let root = newton_raphson(
//!     |x| x * x - 2.0,
//!     |x| 2.0 * x,
//!     1.0,
//!     None,
//!     1e-10,
//!     ConvergenceTest::XRatio,
//! );
//! assert!(root.is_converged());
//! assert!((root.value() - 2.0_f64.sqrt()).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use hh_core as core;

/// Numerical routines: convergence tests, solvers, quadrature, ODE
/// integration, interpolation.
pub use hh_math as math;
