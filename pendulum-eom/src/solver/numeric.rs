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
//! Numeric strategy: step the nonlinear ODE forward in time
//!
//! [`NumericIntegrator`] owns a [`PendulumState`] and advances it by the
//! frame deltas the host feeds in. Each delta is split into sub-steps no
//! longer than [`PendulumConfig::max_substep`] and integrated with the
//! configured one-step method.

use crate::config::PendulumConfig;
use crate::energy::{sphere_mass, EnergyModel};
use crate::error::PendulumError;
use crate::integration::{integrate_fixed, split_substeps, EquationOfMotion, PhaseState};
use crate::state::PendulumState;

/// Solver that integrates θ̈ = −(g/L)·sin θ − drag(θ̇)
///
/// # Example
///
/// ```
/// use pendulum_eom::solver::NumericIntegrator;
///
/// let mut pendulum = NumericIntegrator::new(1.0, 0.05, 0.5, false).unwrap();
/// let theta = pendulum.advance(1.0 / 60.0);
/// assert!(theta < 0.5);
/// assert!(pendulum.omega() < 0.0);
/// assert!((pendulum.elapsed_time() - 1.0 / 60.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct NumericIntegrator {
    state: PendulumState,
    config: PendulumConfig,
    energy: EnergyModel,
    viscous_drag: bool,
}

impl NumericIntegrator {
    /// Create a solver at rest at `theta0` with the default configuration
    ///
    /// # Errors
    ///
    /// Returns [`PendulumError::InvalidParameter`] if `arm_length` is not
    /// positive or `bob_radius` is negative.
    pub fn new(
        arm_length: f64,
        bob_radius: f64,
        theta0: f64,
        consider_drag: bool,
    ) -> Result<Self, PendulumError> {
        Self::with_config(
            PendulumConfig::default(),
            arm_length,
            bob_radius,
            theta0,
            consider_drag,
        )
    }

    /// Create a solver at rest at `theta0` with an explicit configuration
    pub fn with_config(
        config: PendulumConfig,
        arm_length: f64,
        bob_radius: f64,
        theta0: f64,
        consider_drag: bool,
    ) -> Result<Self, PendulumError> {
        let state = PendulumState::new(arm_length, bob_radius, theta0, consider_drag)?;
        Self::from_state(state, config)
    }

    /// Wrap an existing state
    pub fn from_state(state: PendulumState, config: PendulumConfig) -> Result<Self, PendulumError> {
        config.validate()?;

        #[cfg(feature = "tracing")]
        {
            if config.max_substep > 0.05 {
                tracing::warn!(
                    max_substep = config.max_substep,
                    "large integration sub-step may be inaccurate"
                );
            }
        }

        let mass = sphere_mass(state.bob_radius(), config.bob_density);
        Ok(NumericIntegrator {
            energy: EnergyModel::new(mass, state.arm_length(), config.gravity),
            state,
            config,
            viscous_drag: false,
        })
    }

    /// Advance the pendulum by `dt` seconds and return the new angle
    ///
    /// A zero, negative, or non-finite `dt` leaves the state untouched.
    /// Very long deltas are split into at most
    /// [`MAX_SUBSTEPS`](crate::integration::MAX_SUBSTEPS) sub-steps.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if dt.is_nan() || dt <= 0.0 {
            return self.state.theta();
        }
        if !dt.is_finite() {
            #[cfg(feature = "tracing")]
            tracing::warn!(dt, "ignoring non-finite time delta");
            return self.state.theta();
        }

        let eom = EquationOfMotion::for_state(&self.state, &self.config, self.viscous_drag);
        let (count, h) = split_substeps(dt, self.config.max_substep);

        #[cfg(feature = "tracing")]
        {
            if count == crate::integration::MAX_SUBSTEPS && h > self.config.max_substep {
                tracing::warn!(
                    dt,
                    substeps = count,
                    h,
                    max_substep = self.config.max_substep,
                    "time delta exceeds the sub-step cap, stepping coarsely"
                );
            }
            tracing::trace!(dt, substeps = count, h, "advancing pendulum");
        }

        let start = PhaseState::new(self.state.theta(), self.state.omega());
        let end = integrate_fixed(self.config.method.integrator(), &eom, start, h, count);

        if !end.is_valid() {
            #[cfg(feature = "tracing")]
            tracing::warn!(theta = end.theta, omega = end.omega, "discarding non-finite step result");
            return self.state.theta();
        }

        self.state.commit(end.theta, end.omega);
        self.state.add_time(dt);
        end.theta
    }

    /// Current angle (rad)
    pub fn theta(&self) -> f64 {
        self.state.theta()
    }

    /// Current angular velocity (rad/s)
    pub fn omega(&self) -> f64 {
        self.state.omega()
    }

    /// Current linear speed of the bob (m/s)
    pub fn velocity(&self) -> f64 {
        self.state.velocity()
    }

    /// Time integrated since the last reset (s)
    pub fn elapsed_time(&self) -> f64 {
        self.state.elapsed_time()
    }

    /// Underlying state record
    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    /// Configuration in use
    pub fn config(&self) -> &PendulumConfig {
        &self.config
    }

    /// Overwrite the current angle
    pub fn set_theta(&mut self, theta: f64) {
        self.state.set_theta(theta);
    }

    /// Overwrite the reset angle
    pub fn set_theta0(&mut self, theta0: f64) {
        self.state.set_theta0(theta0);
    }

    /// Overwrite the angular velocity
    pub fn set_omega(&mut self, omega: f64) {
        self.state.set_omega(omega);
    }

    /// Toggle the quadratic drag torque
    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.state.set_drag_enabled(enabled);
    }

    /// Toggle the linear viscous torque from the configured fluid
    pub fn set_viscous_drag_enabled(&mut self, enabled: bool) {
        self.viscous_drag = enabled;
    }

    /// Whether the viscous torque is applied
    pub fn viscous_drag_enabled(&self) -> bool {
        self.viscous_drag
    }

    /// Zero the elapsed time only
    pub fn time_reset(&mut self) {
        self.state.time_reset();
    }

    /// Return to rest at the reset angle
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Kinetic energy of the current state (J)
    pub fn kinetic_energy(&self) -> f64 {
        self.energy.kinetic_energy(self.state.velocity())
    }

    /// Potential energy of the current state (J)
    pub fn potential_energy(&self) -> f64 {
        self.energy.potential_energy(self.state.theta())
    }

    /// Total mechanical energy of the current state (J)
    pub fn total_energy(&self) -> f64 {
        self.energy.total_energy(self.state.theta(), self.state.velocity())
    }
}
