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
//! Independent pendulums run side by side
//!
//! An [`Ensemble`] releases one pendulum per initial angle, all with the same
//! geometry and configuration, and drives each with the same frame delta up
//! to a common end time. Every member owns its own solvers, so members can
//! be simulated in parallel with Rayon when the `parallel` feature is
//! enabled. Results always come back in input order.

use crate::config::PendulumConfig;
use crate::error::{ensure_non_negative, ensure_positive, PendulumError};
use crate::solver::{AnalyticApproximator, NumericIntegrator};
use crate::state::PendulumState;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default frame delta (s), one 60 Hz display frame
pub const DEFAULT_FRAME_DT: f64 = 1.0 / 60.0;

/// Final state of one ensemble member
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnsembleOutcome {
    /// Release angle (rad)
    pub theta0: f64,
    /// Numeric angle at the end time (rad)
    pub theta_numeric: f64,
    /// Numeric angular velocity at the end time (rad/s)
    pub omega_numeric: f64,
    /// Approximate angle at the end time (rad)
    pub theta_approx: f64,
    /// Numeric total energy at release (J)
    pub initial_energy: f64,
    /// Numeric total energy at the end time (J)
    pub final_energy: f64,
}

impl EnsembleOutcome {
    /// Fraction of the release energy lost by the end time
    ///
    /// Zero for a member released at the bottom.
    pub fn energy_loss_fraction(&self) -> f64 {
        if self.initial_energy > 0.0 {
            (self.initial_energy - self.final_energy) / self.initial_energy
        } else {
            0.0
        }
    }
}

/// Shared setup for a family of pendulums differing only in release angle
#[derive(Debug, Clone, Copy)]
pub struct Ensemble {
    config: PendulumConfig,
    arm_length: f64,
    bob_radius: f64,
    consider_drag: bool,
    frame_dt: f64,
}

impl Ensemble {
    /// Validate the shared parameters
    pub fn new(
        config: PendulumConfig,
        arm_length: f64,
        bob_radius: f64,
        consider_drag: bool,
    ) -> Result<Self, PendulumError> {
        config.validate()?;
        PendulumState::new(arm_length, bob_radius, 0.0, consider_drag)?;

        Ok(Ensemble {
            config,
            arm_length,
            bob_radius,
            consider_drag,
            frame_dt: DEFAULT_FRAME_DT,
        })
    }

    /// Use a different frame delta
    pub fn with_frame_dt(mut self, frame_dt: f64) -> Result<Self, PendulumError> {
        self.frame_dt = ensure_positive("frame_dt", frame_dt)?;
        Ok(self)
    }

    /// Simulate every release angle for `duration` seconds
    pub fn run(
        &self,
        initial_angles: &[f64],
        duration: f64,
    ) -> Result<Vec<EnsembleOutcome>, PendulumError> {
        let duration = ensure_non_negative("duration", duration)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(members = initial_angles.len(), duration, "running ensemble");

        #[cfg(feature = "parallel")]
        {
            initial_angles
                .par_iter()
                .map(|&theta0| self.simulate(theta0, duration))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            initial_angles
                .iter()
                .map(|&theta0| self.simulate(theta0, duration))
                .collect()
        }
    }

    fn simulate(&self, theta0: f64, duration: f64) -> Result<EnsembleOutcome, PendulumError> {
        let mut numeric = NumericIntegrator::with_config(
            self.config,
            self.arm_length,
            self.bob_radius,
            theta0,
            self.consider_drag,
        )?;
        let mut approx =
            AnalyticApproximator::with_config(self.config, self.arm_length, self.bob_radius, theta0)?;

        let initial_energy = numeric.total_energy();

        let frames = (duration / self.frame_dt).floor() as usize;
        for _ in 0..frames {
            numeric.advance(self.frame_dt);
            approx.evaluate(self.frame_dt);
        }
        let remainder = duration - frames as f64 * self.frame_dt;
        numeric.advance(remainder);
        approx.evaluate(remainder);

        Ok(EnsembleOutcome {
            theta0,
            theta_numeric: numeric.theta(),
            omega_numeric: numeric.omega(),
            theta_approx: approx.theta(),
            initial_energy,
            final_energy: numeric.total_energy(),
        })
    }
}
