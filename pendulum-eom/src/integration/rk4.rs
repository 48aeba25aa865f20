// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Classical fourth-order Runge-Kutta step for the pendulum
//!
//! The phase point is y = (θ, θ̇) and f is [`EquationOfMotion::derivative`].
//! Time does not appear in the equation, so each stage only needs a trial
//! phase point:
//!
//! ```text
//! k1 = f(y)
//! k2 = f(y + k1*h/2)
//! k3 = f(y + k2*h/2)
//! k4 = f(y + k3*h)
//! y(t + h) = y(t) + (k1 + 2*k2 + 2*k3 + k4)*h/6
//! ```
//!
//! Global error scales as h⁴. With drag off, the energy error over a
//! 30 s swing at 1 ms sub-steps stays far below anything the display shows,
//! though it is not conserved exactly.

use super::{EquationOfMotion, Integrator, PhaseState};

/// Runge-Kutta 4th order integrator
///
/// Stateless; one shared instance serves every session.
///
/// # Example
///
/// ```
/// use pendulum_eom::integration::{EquationOfMotion, Integrator, PhaseState, RK4Integrator};
///
/// let eom = EquationOfMotion::undamped(9.8, 1.0);
/// let y = RK4Integrator.step(&eom, PhaseState::new(0.1, 0.0), 0.001);
/// assert!(y.theta < 0.1);
/// assert!(y.omega < 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4Integrator;

impl Integrator for RK4Integrator {
    fn name(&self) -> &str {
        "Runge-Kutta 4"
    }

    fn order(&self) -> u32 {
        4
    }

    fn step(&self, eom: &EquationOfMotion, y: PhaseState, h: f64) -> PhaseState {
        let h_2 = h * 0.5;
        let h_6 = h / 6.0;

        let k1 = eom.derivative(&y);
        let k2 = eom.derivative(&y.advanced(&k1, h_2));
        let k3 = eom.derivative(&y.advanced(&k2, h_2));
        let k4 = eom.derivative(&y.advanced(&k3, h));

        // y(t+h) = y(t) + (k1 + 2*k2 + 2*k3 + k4)*h/6
        PhaseState {
            theta: y.theta + (k1.theta + 2.0 * k2.theta + 2.0 * k3.theta + k4.theta) * h_6,
            omega: y.omega + (k1.omega + 2.0 * k2.omega + 2.0 * k3.omega + k4.omega) * h_6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::integrate_fixed;

    #[test]
    fn test_rk4_metadata() {
        assert_eq!(RK4Integrator.name(), "Runge-Kutta 4");
        assert_eq!(RK4Integrator.order(), 4);
    }

    #[test]
    fn test_rk4_equilibrium_is_fixed_point() {
        let eom = EquationOfMotion::undamped(9.8, 1.0);
        let y = integrate_fixed(&RK4Integrator, &eom, PhaseState::default(), 0.01, 100);
        assert_eq!(y, PhaseState::default());
    }

    #[test]
    fn test_rk4_small_angle_matches_harmonic() {
        // θ(t) = θ0 cos(ω0 t) for small θ0
        let eom = EquationOfMotion::undamped(9.8, 1.0);
        let theta0 = 1.0e-3;
        let h = 1.0e-3;
        let y = integrate_fixed(&RK4Integrator, &eom, PhaseState::new(theta0, 0.0), h, 1000);

        let expected = theta0 * (9.8_f64.sqrt() * 1.0).cos();
        assert!((y.theta - expected).abs() < 1e-9, "theta = {}, expected {}", y.theta, expected);
    }

    #[test]
    fn test_rk4_error_shrinks_with_step() {
        let eom = EquationOfMotion::undamped(9.8, 1.0);
        let y0 = PhaseState::new(1.0, 0.0);
        let reference = integrate_fixed(&RK4Integrator, &eom, y0, 1.0e-4, 10_000);

        let coarse = integrate_fixed(&RK4Integrator, &eom, y0, 0.02, 50);
        let fine = integrate_fixed(&RK4Integrator, &eom, y0, 0.01, 100);

        let coarse_err = (coarse.theta - reference.theta).abs();
        let fine_err = (fine.theta - reference.theta).abs();
        // Fourth order: halving h cuts the error by ~16x
        assert!(fine_err < coarse_err / 8.0, "coarse {} fine {}", coarse_err, fine_err);
    }
}
