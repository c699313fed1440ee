//! Convergence tests for iterative processes.

use hh_core::Real;

/// The kind of error metric used to decide convergence of an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvergenceTest {
    /// Relative change between the last two iterates, `|(x2 - x1) / x1|`.
    #[default]
    XRatio,
}

/// Relative-change error between two successive iterates.
///
/// Returns `|(x2 - x1) / x1|` when `x1` is nonzero.  At `x1 == 0` the ratio
/// is undefined, so the error is defined as `tol + 1`, which can never
/// satisfy a tolerance `>= 0` and therefore never falsely signals
/// convergence.
pub fn x_ratio_err(x1: Real, x2: Real, tol: Real) -> Real {
    if x1 != 0.0 {
        ((x2 - x1) / x1).abs()
    } else {
        tol + 1.0
    }
}

/// Returns `true` iff the iteration moving from `x1` to `x2` has converged
/// under the given test and tolerance.
pub fn has_converged(x1: Real, x2: Real, tol: Real, test: ConvergenceTest) -> bool {
    let err = match test {
        ConvergenceTest::XRatio => x_ratio_err(x1, x2, tol),
    };
    err <= tol
}

/// Return `true` if `|a - b| <= epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn x_ratio_err_basic() {
        assert_eq!(x_ratio_err(2.0, 1.0, 1e-4), 0.5);
        assert_eq!(x_ratio_err(-2.0, -1.0, 1e-4), 0.5);
        assert_eq!(x_ratio_err(1.0, 1.0, 1e-4), 0.0);
    }

    #[test]
    fn zero_previous_iterate_never_converges() {
        let tol = 1e-4;
        assert_eq!(x_ratio_err(0.0, 5.0, tol), tol + 1.0);
        assert!(!has_converged(0.0, 5.0, tol, ConvergenceTest::XRatio));
        assert!(!has_converged(0.0, 0.0, tol, ConvergenceTest::XRatio));
    }

    #[test]
    fn has_converged_thresholds() {
        // err == tol counts as converged
        assert!(has_converged(1.0, 1.0 + 1e-4, 1e-4, ConvergenceTest::XRatio));
        assert!(!has_converged(1.0, 1.0 + 2e-4, 1e-4, ConvergenceTest::XRatio));
    }

    #[test]
    fn close_basic() {
        assert!(close(1.0, 1.0 + 1e-11, 1e-10));
        assert!(!close(1.0, 1.0 + 1e-9, 1e-10));
    }

    proptest! {
        #[test]
        fn x_ratio_err_matches_definition(
            x1 in -1e6f64..1e6f64,
            x2 in -1e6f64..1e6f64,
        ) {
            prop_assume!(x1 != 0.0);
            prop_assert_eq!(x_ratio_err(x1, x2, 1e-4), ((x2 - x1) / x1).abs());
        }

        #[test]
        fn x_ratio_err_is_non_negative(
            x1 in -1e6f64..1e6f64,
            x2 in -1e6f64..1e6f64,
        ) {
            prop_assert!(x_ratio_err(x1, x2, 1e-4) >= 0.0);
        }
    }
}
