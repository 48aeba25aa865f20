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
//! Numerical integration of the pendulum equation of motion
//!
//! The pendulum is a second-order ODE in θ. It is integrated as a first-order
//! system on the phase vector (θ, θ̇):
//!
//! ```text
//! dθ/dt = θ̇
//! dθ̇/dt = −(g/L)·sin θ − k·r²·θ̇·|θ̇| − c·θ̇
//! ```
//!
//! The quadratic term is the inertial (aerodynamic) drag torque and the
//! linear term is viscous (Stokes) drag. Either may be switched off.
//!
//! # Integrators
//!
//! - **RK4 (Runge-Kutta 4th order)**: Default. Four derivative evaluations
//!   per step, global error O(h⁴).
//! - **Heun (RK2)**: Two evaluations per step, global error O(h²). Cheaper,
//!   and useful as a cross-check of the RK4 results.
//!
//! # Sub-stepping
//!
//! Frame deltas from a host clock vary from tick to tick. Each delta is
//! split into `n = ceil(dt / max_substep)` equal sub-steps so the step size
//! seen by the integrator never exceeds `max_substep`.

use crate::config::PendulumConfig;
use crate::energy::sphere_mass;
use crate::error::PendulumError;
use crate::state::PendulumState;
use std::f64::consts::PI;
use std::str::FromStr;

mod heun;
mod rk4;

pub use heun::HeunIntegrator;
pub use rk4::RK4Integrator;

/// Point in the (θ, θ̇) phase plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhaseState {
    /// Angle (rad)
    pub theta: f64,
    /// Angular velocity (rad/s)
    pub omega: f64,
}

impl PhaseState {
    /// Create a phase point
    pub fn new(theta: f64, omega: f64) -> Self {
        PhaseState { theta, omega }
    }

    /// `self + rate * h`
    #[inline]
    pub fn advanced(&self, rate: &PhaseState, h: f64) -> PhaseState {
        PhaseState {
            theta: self.theta + rate.theta * h,
            omega: self.omega + rate.omega * h,
        }
    }

    /// Check that both components are finite
    pub fn is_valid(&self) -> bool {
        self.theta.is_finite() && self.omega.is_finite()
    }
}

/// Right-hand side of the pendulum ODE with all coefficients resolved
///
/// Built from a [`PendulumState`] and a [`PendulumConfig`]. The drag
/// coefficients are already multiplied by the geometric factors, so
/// evaluation is just a handful of flops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquationOfMotion {
    omega0_sq: f64,
    quadratic_drag: f64,
    viscous_drag: f64,
}

impl EquationOfMotion {
    /// Undamped pendulum with natural angular frequency squared `g / L`
    pub fn undamped(gravity: f64, arm_length: f64) -> Self {
        EquationOfMotion {
            omega0_sq: gravity / arm_length,
            quadratic_drag: 0.0,
            viscous_drag: 0.0,
        }
    }

    /// Resolve the coefficients for `state` under `config`
    ///
    /// The quadratic drag uses F = ½·ρ·C_d·(π r²)·(L θ̇)² acting at the bob,
    /// which gives an angular deceleration of k·r²·θ̇² with
    /// k = ρ·C_d·π·L / (2m). The viscous drag uses Stokes' law
    /// F = 6π·μ·r·(L θ̇), giving 6π·μ·r·θ̇ / m. The bob is treated as a point
    /// mass at distance L. A bob with zero radius has no cross-section and
    /// feels no drag.
    pub fn for_state(state: &PendulumState, config: &PendulumConfig, viscous: bool) -> Self {
        let mut eom = EquationOfMotion::undamped(config.gravity, state.arm_length());

        let r = state.bob_radius();
        let mass = sphere_mass(r, config.bob_density);
        if mass <= 0.0 {
            return eom;
        }

        if state.drag_enabled() {
            let k = config.fluid.density() * config.drag_coefficient * PI * state.arm_length()
                / (2.0 * mass);
            eom.quadratic_drag = k * r * r;
        }
        if viscous {
            eom.viscous_drag = 6.0 * PI * config.fluid.viscosity() * r / mass;
        }

        eom
    }

    /// Evaluate (dθ/dt, dθ̇/dt) at `y`
    #[inline]
    pub fn derivative(&self, y: &PhaseState) -> PhaseState {
        let gravity = -self.omega0_sq * y.theta.sin();
        let drag = self.quadratic_drag * y.omega * y.omega.abs() + self.viscous_drag * y.omega;
        PhaseState {
            theta: y.omega,
            omega: gravity - drag,
        }
    }

    /// Whether any dissipative term is active
    pub fn is_damped(&self) -> bool {
        self.quadratic_drag > 0.0 || self.viscous_drag > 0.0
    }
}

/// Explicit one-step method for the pendulum ODE
pub trait Integrator: Send + Sync {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Global order of accuracy
    fn order(&self) -> u32;

    /// Advance `y` by one step of size `h`
    fn step(&self, eom: &EquationOfMotion, y: PhaseState, h: f64) -> PhaseState;
}

/// Selectable integration method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Classical fourth-order Runge-Kutta
    #[default]
    Rk4,
    /// Heun's second-order method
    Heun,
}

static RK4: RK4Integrator = RK4Integrator;
static HEUN: HeunIntegrator = HeunIntegrator;

impl Method {
    /// Integrator implementing this method
    pub fn integrator(&self) -> &'static dyn Integrator {
        match self {
            Method::Rk4 => &RK4,
            Method::Heun => &HEUN,
        }
    }
}

impl FromStr for Method {
    type Err = PendulumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rk4" => Ok(Method::Rk4),
            "heun" | "rk2" => Ok(Method::Heun),
            other => Err(PendulumError::invalid(
                "method",
                format!("unknown method '{}', expected 'rk4' or 'heun'", other),
            )),
        }
    }
}

/// Upper bound on the number of sub-steps taken for one time delta
pub const MAX_SUBSTEPS: usize = 100_000;

/// Split `dt` into equal sub-steps no longer than `max_substep`
///
/// Returns the number of sub-steps and their size. `dt` must be positive.
/// The count never exceeds [`MAX_SUBSTEPS`]; past that the sub-step grows
/// beyond `max_substep` instead.
pub fn split_substeps(dt: f64, max_substep: f64) -> (usize, f64) {
    let count = (dt / max_substep).ceil().clamp(1.0, MAX_SUBSTEPS as f64) as usize;
    (count, dt / count as f64)
}

/// Apply `count` steps of size `h` starting from `y`
pub fn integrate_fixed(
    integrator: &dyn Integrator,
    eom: &EquationOfMotion,
    mut y: PhaseState,
    h: f64,
    count: usize,
) -> PhaseState {
    for _ in 0..count {
        y = integrator.step(eom, y, h);
    }
    y
}
