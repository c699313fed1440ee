//! Fixed-step ODE integration.
//!
//! Integrates a first-order system `du/dt = f(t, u)` with the classical
//! 4th-order Runge-Kutta scheme.  The system is supplied as one derivative
//! function per state dimension, each evaluated against the full state
//! vector.

use hh_core::{
    ensure,
    errors::{Error, Result},
    Real, Time,
};

/// The right-hand side of one component of an ODE system:
/// `du_i/dt = f_i(t, u)`.
pub trait StateDerivative {
    /// Evaluate this component's derivative at time `t` and state `u`.
    fn eval(&self, t: Time, u: &[Real]) -> Real;
}

impl<F> StateDerivative for F
where
    F: Fn(Time, &[Real]) -> Real,
{
    fn eval(&self, t: Time, u: &[Real]) -> Real {
        (self)(t, u)
    }
}

/// The states and times visited by a fixed-step integration, including the
/// initial condition.
#[derive(Debug, Clone, PartialEq)]
pub struct OdeTrajectory {
    /// State vectors, one per visited time.
    pub states: Vec<Vec<Real>>,
    /// Visited times, starting at the initial time.
    pub times: Vec<Time>,
}

impl OdeTrajectory {
    /// The state at the end of the integration.
    pub fn final_state(&self) -> &[Real] {
        self.states
            .last()
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

// ── Classical Runge-Kutta ─────────────────────────────────────────────────────

/// Classical 4th-order Runge-Kutta integrator with a fixed step size.
///
/// The number of steps is `floor((tf - t0) / step)`; the integration stops at
/// the last grid time at or below `tf`, it does not shorten the final step to
/// land on `tf` exactly.
#[derive(Debug, Clone)]
pub struct RungeKutta4 {
    /// Step size.
    pub step: Real,
}

impl RungeKutta4 {
    /// Create an integrator with the given step size.
    pub fn new(step: Real) -> Self {
        Self { step }
    }

    /// Integrate the system from `t0` to `tf`, returning the final state.
    ///
    /// # Errors
    /// Fails if `system` and `u0` have different lengths, or if the step
    /// size is not positive.
    pub fn integrate(
        &self,
        system: &[&dyn StateDerivative],
        u0: &[Real],
        t0: Time,
        tf: Time,
    ) -> Result<Vec<Real>> {
        self.integrate_observed(system, u0, t0, tf, |_, _| {})
    }

    /// [`RungeKutta4::integrate`] with a per-state observer.
    ///
    /// The observer receives every visited `(t, u)` pair, including the
    /// initial condition and the final state.
    pub fn integrate_observed<O>(
        &self,
        system: &[&dyn StateDerivative],
        u0: &[Real],
        t0: Time,
        tf: Time,
        mut observer: O,
    ) -> Result<Vec<Real>>
    where
        O: FnMut(Time, &[Real]),
    {
        ensure!(
            system.len() == u0.len(),
            "RungeKutta4: system has {} derivative functions but the initial \
             state has {} components",
            system.len(),
            u0.len()
        );
        if self.step <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "RungeKutta4: step must be positive, got {}",
                self.step
            )));
        }

        let h = self.step;
        let n_steps = ((tf - t0) / h).floor().max(0.0) as usize;

        let mut t = t0;
        let mut u = u0.to_vec();
        for _ in 0..n_steps {
            observer(t, &u);
            u = rk4_step(system, t, &u, h);
            t += h;
        }
        observer(t, &u);
        Ok(u)
    }

    /// Integrate the system from `t0` to `tf`, returning the full
    /// trajectory of visited states and times.
    pub fn integrate_path(
        &self,
        system: &[&dyn StateDerivative],
        u0: &[Real],
        t0: Time,
        tf: Time,
    ) -> Result<OdeTrajectory> {
        let mut states = Vec::new();
        let mut times = Vec::new();
        self.integrate_observed(system, u0, t0, tf, |t, u| {
            times.push(t);
            states.push(u.to_vec());
        })?;
        Ok(OdeTrajectory { states, times })
    }
}

/// One classical RK4 update of the whole state vector.
fn rk4_step(system: &[&dyn StateDerivative], t: Time, u: &[Real], h: Real) -> Vec<Real> {
    let n = u.len();

    let k1: Vec<Real> = system.iter().map(|f| h * f.eval(t, u)).collect();
    let u2: Vec<Real> = (0..n).map(|i| u[i] + 0.5 * k1[i]).collect();

    let k2: Vec<Real> = system.iter().map(|f| h * f.eval(t + 0.5 * h, &u2)).collect();
    let u3: Vec<Real> = (0..n).map(|i| u[i] + 0.5 * k2[i]).collect();

    let k3: Vec<Real> = system.iter().map(|f| h * f.eval(t + 0.5 * h, &u3)).collect();
    let u4: Vec<Real> = (0..n).map(|i| u[i] + k3[i]).collect();

    let k4: Vec<Real> = system.iter().map(|f| h * f.eval(t + h, &u4)).collect();

    (0..n)
        .map(|i| u[i] + (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]) / 6.0)
        .collect()
}

/// Convenience function: integrate a scalar ODE `du/dt = f(t, u)` from `t0`
/// to `tf` with step `h`, returning the final value.
pub fn integrate_scalar<F>(f: F, u0: Real, h: Real, t0: Time, tf: Time) -> Result<Real>
where
    F: Fn(Time, Real) -> Real,
{
    let wrapped = move |t: Time, u: &[Real]| f(t, u[0]);
    let system: [&dyn StateDerivative; 1] = [&wrapped];
    let u = RungeKutta4::new(h).integrate(&system, &[u0], t0, tf)?;
    Ok(u[0])
}
