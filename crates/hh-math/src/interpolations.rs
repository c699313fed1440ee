//! 1D polynomial interpolation.

use hh_core::{ensure, errors::Result, Real};

/// A 1D interpolation function `f: R → R` defined by a set of known points.
pub trait Interpolation1D: std::fmt::Debug {
    /// Evaluate the interpolation at `x`.
    fn operator(&self, x: Real) -> Real;

    /// Return the lower bound of the interpolation domain.
    fn x_min(&self) -> Real;

    /// Return the upper bound of the interpolation domain.
    fn x_max(&self) -> Real;

    /// Return `true` if `x` is within the interpolation range.
    fn is_in_range(&self, x: Real) -> bool {
        x >= self.x_min() && x <= self.x_max()
    }
}

// ── Lagrange ──────────────────────────────────────────────────────────────────

/// Lagrange interpolation: the unique polynomial of degree `n - 1` through
/// `n` data points.
///
/// The nodes need not be sorted, but they must be pairwise distinct: a
/// repeated node puts a zero in a basis denominator, and the resulting
/// non-finite value propagates to the evaluation result unguarded.
#[derive(Debug, Clone)]
pub struct LagrangeInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
}

impl LagrangeInterpolation {
    /// Construct a Lagrange interpolation through the given points.
    ///
    /// # Errors
    /// Returns an error if the slices have different lengths or are empty.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        ensure!(!xs.is_empty(), "need at least 1 point for interpolation");
        ensure!(
            xs.len() == ys.len(),
            "xs and ys must have the same length, got {} and {}",
            xs.len(),
            ys.len()
        );
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Degree of the interpolating polynomial.
    pub fn degree(&self) -> usize {
        self.xs.len() - 1
    }
}

impl Interpolation1D for LagrangeInterpolation {
    fn x_min(&self) -> Real {
        self.xs.iter().cloned().fold(f64::INFINITY, Real::min)
    }

    fn x_max(&self) -> Real {
        self.xs.iter().cloned().fold(f64::NEG_INFINITY, Real::max)
    }

    fn operator(&self, x: Real) -> Real {
        let mut sum = 0.0;
        for (i, (&xi, &yi)) in self.xs.iter().zip(self.ys.iter()).enumerate() {
            let mut term = yi;
            for (j, &xj) in self.xs.iter().enumerate() {
                if j != i {
                    term *= (x - xj) / (xi - xj);
                }
            }
            sum += term;
        }
        sum
    }
}

/// Evaluate the Lagrange polynomial through `(xs, ys)` at `a`.
///
/// # Errors
/// Returns an error if the slices have different lengths or are empty.
pub fn lagrange_poly(xs: &[Real], ys: &[Real], a: Real) -> Result<Real> {
    Ok(LagrangeInterpolation::new(xs, ys)?.operator(a))
}
