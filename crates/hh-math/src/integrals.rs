//! Numerical quadrature.

use hh_core::{
    errors::{Error, Result},
    Real,
};

/// A numerical integrator.
pub trait Integrator {
    /// Integrate `f` on `[a, b]`.
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real>;
}

// ── Simpson's 1/3 rule ────────────────────────────────────────────────────────

/// Composite Simpson's 1/3 rule on a fixed uniform grid.
///
/// The grid runs from the lower bound in increments of `step`, stopping
/// strictly below the upper bound, with the exact upper bound appended as the
/// final point.  Consecutive triples of points are combined with the
/// `(1, 4, 1)` Simpson weights; when the point count leaves an incomplete
/// final triple, the trailing points are ignored, so the result covers only
/// the sub-intervals spanned by complete triples.
#[derive(Debug, Clone)]
pub struct Simpson13 {
    /// Grid spacing.
    pub step: Real,
}

impl Simpson13 {
    /// Create a Simpson integrator with the given grid spacing.
    pub fn new(step: Real) -> Self {
        Self { step }
    }
}

impl Integrator for Simpson13 {
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real> {
        let h = self.step;
        if h <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "Simpson13: step must be positive, got {h}"
            )));
        }
        if a >= b {
            return Err(Error::InvalidArgument(format!(
                "Simpson13: empty interval [{a}, {b}]"
            )));
        }

        // Uniform grid below b, then the exact endpoint.
        let mut ys = Vec::new();
        let mut i = 0usize;
        loop {
            let x = a + i as Real * h;
            if x >= b {
                break;
            }
            ys.push(f(x));
            i += 1;
        }
        ys.push(f(b));

        let n = ys.len();
        let mut sum = 0.0;
        let mut i = 0;
        while i + 2 < n {
            sum += ys[i] + 4.0 * ys[i + 1] + ys[i + 2];
            i += 2;
        }
        Ok(sum * h / 3.0)
    }
}

/// Approximate the definite integral of `f` over `[x0, xn]` with Simpson's
/// 1/3 rule on a grid of spacing `h`.
pub fn simpson_1_3<F: Fn(Real) -> Real>(f: F, x0: Real, xn: Real, h: Real) -> Result<Real> {
    Simpson13::new(h).integrate(f, x0, xn)
}
