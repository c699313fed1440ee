//! 1D root-finding solvers.

use hh_core::Real;

use crate::convergence::{has_converged, ConvergenceTest};

/// Tolerance applied when the caller passes a non-positive one.
pub const DEFAULT_TOLERANCE: Real = 1.0e-4;

// ── Root-finding result ───────────────────────────────────────────────────────

/// Outcome of an iterative root search.
///
/// Divergence and budget exhaustion are ordinary outcomes of Newton's method,
/// not errors, so they are reported here rather than through `Result`.
/// Callers inspect the variant instead of testing the returned estimate for
/// special floating-point values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootResult {
    /// The iteration satisfied the convergence test; the payload is the root
    /// estimate.
    Converged(Real),
    /// The iteration produced a non-finite estimate (including the zero
    /// derivative case, reported as negative infinity).
    Diverged(Real),
    /// The iteration budget ran out; the payload is the last finite estimate.
    IterationLimitReached(Real),
}

impl RootResult {
    /// The estimate carried by any variant.
    pub fn value(&self) -> Real {
        match *self {
            RootResult::Converged(x)
            | RootResult::Diverged(x)
            | RootResult::IterationLimitReached(x) => x,
        }
    }

    /// Returns `true` iff the search converged.
    pub fn is_converged(&self) -> bool {
        matches!(self, RootResult::Converged(_))
    }
}

// ── Newton-Raphson ────────────────────────────────────────────────────────────

/// Newton-Raphson method using a function and its derivative.
///
/// Starting from `x0`, repeatedly applies `x1 = x0 - f(x0) / fp(x0)` until
/// the convergence test passes, the estimate leaves the finite range, or the
/// iteration budget is exhausted.  `max_iter = None` means unbounded:
/// termination then relies entirely on convergence or divergence.
///
/// A non-positive `tolerance` falls back to [`DEFAULT_TOLERANCE`].
///
/// A derivative of exactly zero makes the update step undefined; the search
/// reports this as [`RootResult::Diverged`] with a negative-infinity payload.
pub fn newton_raphson<F, D>(
    f: F,
    fp: D,
    x0: Real,
    max_iter: Option<u32>,
    tolerance: Real,
    test: ConvergenceTest,
) -> RootResult
where
    F: Fn(Real) -> Real,
    D: Fn(Real) -> Real,
{
    newton_raphson_observed(f, fp, x0, max_iter, tolerance, test, |_, _| {})
}

/// [`newton_raphson`] with a per-iteration observer.
///
/// The observer receives the 1-based iteration index and the new estimate
/// after every update step.
pub fn newton_raphson_observed<F, D, O>(
    f: F,
    fp: D,
    x0: Real,
    max_iter: Option<u32>,
    tolerance: Real,
    test: ConvergenceTest,
    mut observer: O,
) -> RootResult
where
    F: Fn(Real) -> Real,
    D: Fn(Real) -> Real,
    O: FnMut(u32, Real),
{
    let tol = if tolerance > 0.0 {
        tolerance
    } else {
        DEFAULT_TOLERANCE
    };

    let mut x = x0;
    let mut iteration: u32 = 0;

    loop {
        if let Some(budget) = max_iter {
            if iteration >= budget {
                return RootResult::IterationLimitReached(x);
            }
        }
        iteration += 1;

        let dfx = fp(x);
        if dfx == 0.0 {
            observer(iteration, Real::NEG_INFINITY);
            return RootResult::Diverged(Real::NEG_INFINITY);
        }
        let x_new = x - f(x) / dfx;
        observer(iteration, x_new);

        // Convergence is checked before finiteness, so a step that lands
        // exactly on the previous iterate still counts as converged.
        if has_converged(x, x_new, tol, test) {
            return RootResult::Converged(x_new);
        }
        if !x_new.is_finite() {
            return RootResult::Diverged(x_new);
        }
        x = x_new;
    }
}
