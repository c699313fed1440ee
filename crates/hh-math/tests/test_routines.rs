//! Integration tests exercising the numerical routines through the public
//! API, including the interplay between the root finder and the convergence
//! test.

use hh_math::{
    has_converged, integrate_scalar, lagrange_poly, newton_raphson, newton_raphson_observed,
    simpson_1_3, ConvergenceTest, LagrangeInterpolation, RootResult, RungeKutta4,
    StateDerivative,
};

#[test]
fn newton_converges_under_the_x_ratio_test() {
    // Every accepted step must itself satisfy the convergence test the
    // solver was configured with.
    let tol = 1e-6;
    let mut last_two = (1.0, f64::NAN);
    let result = newton_raphson_observed(
        |x| x * x - 2.0,
        |x| 2.0 * x,
        1.0,
        None,
        tol,
        ConvergenceTest::XRatio,
        |_, estimate| last_two = (last_two.1, estimate),
    );
    assert!(result.is_converged());
    assert!(has_converged(last_two.0, last_two.1, tol, ConvergenceTest::XRatio));
    assert!((result.value() - 2.0_f64.sqrt()).abs() < 1e-9);
}

#[test]
fn newton_reports_the_iteration_budget() {
    let result = newton_raphson(
        |x| x.tanh(),
        |x| 1.0 / x.cosh().powi(2),
        0.5,
        Some(2),
        1e-15,
        ConvergenceTest::XRatio,
    );
    assert!(matches!(result, RootResult::IterationLimitReached(_)));
}

#[test]
fn simpson_quadrature_matches_known_integrals() {
    let squared = simpson_1_3(|x| x * x, 0.0, 3.0, 0.001).unwrap();
    assert!((squared - 9.0).abs() < 1e-7, "got {squared}");

    let cosine = simpson_1_3(|x| x.cos(), 0.0, 1.0, 0.001).unwrap();
    assert!((cosine - 1.0_f64.sin()).abs() < 1e-9, "got {cosine}");
}

#[test]
fn rk4_approximates_the_exponential() {
    let result = integrate_scalar(|_t, u| u, 1.0, 1.0 / 128.0, 0.0, 1.0).unwrap();
    assert!(
        (result - std::f64::consts::E).abs() < 1e-8,
        "got {result}"
    );
}

#[test]
fn rk4_trajectory_agrees_with_final_state() {
    let du1 = |t: f64, _u: &[f64]| 2.0 * t;
    let system: [&dyn StateDerivative; 1] = [&du1];
    let solver = RungeKutta4::new(1.0 / 64.0);

    let final_state = solver.integrate(&system, &[0.0], 0.0, 1.0).unwrap();
    let trajectory = solver.integrate_path(&system, &[0.0], 0.0, 1.0).unwrap();

    assert_eq!(trajectory.final_state(), final_state.as_slice());
    assert_eq!(trajectory.states.len(), 65);
    // du/dt = 2t integrates to t² exactly under RK4.
    assert!((final_state[0] - 1.0).abs() < 1e-12);
}

#[test]
fn lagrange_recovers_rk4_samples() {
    // Sample u(t) = e^t at three points via RK4, then interpolate between
    // them; the quadratic fit of a smooth function stays close on [0, 1].
    let h = 1.0 / 128.0;
    let times = [0.0, 0.5, 1.0];
    let mut samples = Vec::new();
    for &t in &times {
        samples.push(integrate_scalar(|_t, u| u, 1.0, h, 0.0, t).unwrap());
    }
    let value = lagrange_poly(&times, &samples, 0.25).unwrap();
    assert!((value - 0.25_f64.exp()).abs() < 2e-2, "got {value}");
}

#[test]
fn lagrange_is_exact_on_collinear_data() {
    let value = lagrange_poly(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], 1.5).unwrap();
    assert_eq!(value, 1.5);
}

#[test]
fn mismatched_inputs_fail_up_front() {
    assert!(LagrangeInterpolation::new(&[0.0, 1.0, 2.0], &[1.0, 2.0]).is_err());

    let du1 = |_t: f64, u: &[f64]| u[0];
    let du2 = |_t: f64, u: &[f64]| u[0];
    let system: [&dyn StateDerivative; 2] = [&du1, &du2];
    assert!(RungeKutta4::new(0.1).integrate(&system, &[1.0], 0.0, 1.0).is_err());
}
