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
//! Approximate strategy: closed-form large-angle solution
//!
//! The exact period of a pendulum released from rest at θ0 involves a
//! complete elliptic integral. A simple fit, within 0.5% of it at 60° and
//! about 2% at 90°, replaces the small-angle frequency ω0 = √(g/L) by
//!
//! ```text
//! Ω(θ0) = ω0 · √(3 + cos θ0) / 2
//! ```
//!
//! and keeps the harmonic shape:
//!
//! ```text
//! θ(t)  =  θ0 · cos(Ω t)
//! θ̇(t)  = −θ0 · Ω · sin(Ω t)
//! ```
//!
//! For θ0 → 0 the factor tends to 1 and the small-angle solution is
//! recovered. Drag is not modelled on this path.

use crate::config::PendulumConfig;
use crate::energy::{sphere_mass, EnergyModel};
use crate::error::PendulumError;
use crate::integration::PhaseState;
use crate::state::PendulumState;
use std::f64::consts::PI;

/// Angular frequency Ω(θ0) of the approximation
pub fn approximate_frequency(theta0: f64, omega0: f64) -> f64 {
    omega0 * (3.0 + theta0.cos()).sqrt() / 2.0
}

/// Angle and angular velocity of the approximation at time `t`
///
/// The velocity is the analytic time derivative, so it carries no
/// finite-difference error.
pub fn approximate_phase(theta0: f64, omega0: f64, t: f64) -> PhaseState {
    let freq = approximate_frequency(theta0, omega0);
    let (sin, cos) = (freq * t).sin_cos();
    PhaseState {
        theta: theta0 * cos,
        omega: -theta0 * freq * sin,
    }
}

/// Solver that evaluates the closed-form approximation at an accumulated
/// time
///
/// Its time accumulator is independent of any [`NumericIntegrator`]
/// running alongside it.
///
/// [`NumericIntegrator`]: crate::solver::NumericIntegrator
///
/// # Example
///
/// ```
/// use pendulum_eom::solver::AnalyticApproximator;
///
/// let mut approx = AnalyticApproximator::new(1.0, 0.05, 0.5).unwrap();
/// let half_period = approx.period() / 2.0;
/// let theta = approx.evaluate(half_period);
/// assert!((theta + 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct AnalyticApproximator {
    state: PendulumState,
    omega0: f64,
    energy: EnergyModel,
}

impl AnalyticApproximator {
    /// Create an approximator released from rest at `theta0`
    pub fn new(arm_length: f64, bob_radius: f64, theta0: f64) -> Result<Self, PendulumError> {
        Self::with_config(PendulumConfig::default(), arm_length, bob_radius, theta0)
    }

    /// Create an approximator with an explicit configuration
    ///
    /// Only gravity and bob density are read from `config`.
    pub fn with_config(
        config: PendulumConfig,
        arm_length: f64,
        bob_radius: f64,
        theta0: f64,
    ) -> Result<Self, PendulumError> {
        config.validate()?;
        let state = PendulumState::new(arm_length, bob_radius, theta0, false)?;
        let mass = sphere_mass(bob_radius, config.bob_density);

        Ok(AnalyticApproximator {
            omega0: (config.gravity / arm_length).sqrt(),
            energy: EnergyModel::new(mass, arm_length, config.gravity),
            state,
        })
    }

    /// Move the accumulator forward by `delta` and evaluate the formula
    ///
    /// Negative or non-finite deltas count as zero; the formula is still
    /// evaluated at the current accumulated time.
    pub fn evaluate(&mut self, delta: f64) -> f64 {
        if delta > 0.0 && delta.is_finite() {
            self.state.add_time(delta);
        }

        let phase = approximate_phase(self.state.theta0(), self.omega0, self.state.elapsed_time());
        self.state.commit(phase.theta, phase.omega);
        phase.theta
    }

    /// Ω for the current θ0 (rad/s)
    pub fn angular_frequency(&self) -> f64 {
        approximate_frequency(self.state.theta0(), self.omega0)
    }

    /// Period 2π/Ω for the current θ0 (s)
    pub fn period(&self) -> f64 {
        2.0 * PI / self.angular_frequency()
    }

    /// Angle from the last evaluation (rad)
    pub fn theta(&self) -> f64 {
        self.state.theta()
    }

    /// Angular velocity from the last evaluation (rad/s)
    pub fn omega(&self) -> f64 {
        self.state.omega()
    }

    /// Linear speed of the bob from the last evaluation (m/s)
    pub fn velocity(&self) -> f64 {
        self.state.velocity()
    }

    /// Accumulated time (s)
    pub fn elapsed_time(&self) -> f64 {
        self.state.elapsed_time()
    }

    /// Angle the approximation is anchored to (rad)
    pub fn theta0(&self) -> f64 {
        self.state.theta0()
    }

    /// Underlying state record
    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    /// Retarget to a new initial angle without touching the accumulator
    pub fn set_theta0(&mut self, theta0: f64) {
        self.state.set_theta0(theta0);
    }

    /// Zero the accumulator without touching θ0
    pub fn time_reset(&mut self) {
        self.state.time_reset();
    }

    /// Return to rest at θ0 with zero accumulated time
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Kinetic energy from the last evaluation (J)
    pub fn kinetic_energy(&self) -> f64 {
        self.energy.kinetic_energy(self.state.velocity())
    }

    /// Potential energy from the last evaluation (J)
    pub fn potential_energy(&self) -> f64 {
        self.energy.potential_energy(self.state.theta())
    }

    /// Total mechanical energy from the last evaluation (J)
    pub fn total_energy(&self) -> f64 {
        self.energy.total_energy(self.state.theta(), self.state.velocity())
    }
}
