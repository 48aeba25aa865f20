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
//! Physical and numerical configuration
//!
//! [`PendulumConfig`] gathers the constants that are fixed for the lifetime of
//! a session: gravitational acceleration, the fluid the bob swings through,
//! the bob material, the drag coefficient, and integrator settings.
//!
//! # Environment Configuration
//!
//! [`PendulumConfig::from_env`] overlays the following variables on the
//! defaults:
//!
//! ```bash
//! export PENDULUM_GRAVITY=9.81        # m/s²
//! export PENDULUM_FLUID=water         # air | water
//! export PENDULUM_MAX_SUBSTEP=0.0005  # seconds
//! export PENDULUM_METHOD=heun         # rk4 | heun
//! ```

use crate::error::{ensure_positive, PendulumError};
use crate::integration::Method;
use std::str::FromStr;

/// Standard gravitational acceleration (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Density of aluminium (kg/m³), the default bob material
pub const ALUMINIUM_DENSITY: f64 = 2698.9;

/// Drag coefficient of a smooth sphere at moderate Reynolds numbers
pub const SPHERE_DRAG_COEFFICIENT: f64 = 0.47;

/// Default upper bound on a single integration sub-step (seconds)
pub const DEFAULT_MAX_SUBSTEP: f64 = 1.0e-3;

/// Smallest accepted value for [`PendulumConfig::max_substep`] (seconds)
pub const MIN_SUBSTEP: f64 = 1.0e-9;

/// Fluid surrounding the bob
///
/// The fluid sets the density used by the quadratic drag torque and the
/// dynamic viscosity used by the optional viscous (Stokes) torque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fluid {
    /// Air at room temperature
    #[default]
    Air,
    /// Water at room temperature
    Water,
}

impl Fluid {
    /// Dynamic viscosity μ in kg/(m·s)
    pub fn viscosity(&self) -> f64 {
        match self {
            Fluid::Air => 1.822e-5,
            Fluid::Water => 1.004e-3,
        }
    }

    /// Density ρ in kg/m³
    pub fn density(&self) -> f64 {
        match self {
            Fluid::Air => 1.205,
            Fluid::Water => 998.203,
        }
    }
}

impl FromStr for Fluid {
    type Err = PendulumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "air" => Ok(Fluid::Air),
            "water" => Ok(Fluid::Water),
            other => Err(PendulumError::invalid(
                "fluid",
                format!("unknown fluid '{}', expected 'air' or 'water'", other),
            )),
        }
    }
}

/// Configuration shared by both solving strategies
///
/// # Example
///
/// ```
/// use pendulum_eom::config::{Fluid, PendulumConfig};
///
/// let config = PendulumConfig::default()
///     .with_fluid(Fluid::Water)
///     .with_max_substep(5.0e-4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumConfig {
    /// Gravitational acceleration g (m/s²)
    pub gravity: f64,
    /// Fluid the bob moves through
    pub fluid: Fluid,
    /// Density of the bob material (kg/m³)
    pub bob_density: f64,
    /// Dimensionless drag coefficient C_d of the bob
    pub drag_coefficient: f64,
    /// Largest sub-step the numeric integrator takes (seconds)
    pub max_substep: f64,
    /// One-step method used by the numeric integrator
    pub method: Method,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        PendulumConfig {
            gravity: STANDARD_GRAVITY,
            fluid: Fluid::Air,
            bob_density: ALUMINIUM_DENSITY,
            drag_coefficient: SPHERE_DRAG_COEFFICIENT,
            max_substep: DEFAULT_MAX_SUBSTEP,
            method: Method::Rk4,
        }
    }
}

impl PendulumConfig {
    /// Set the gravitational acceleration
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the surrounding fluid
    pub fn with_fluid(mut self, fluid: Fluid) -> Self {
        self.fluid = fluid;
        self
    }

    /// Set the bob material density
    pub fn with_bob_density(mut self, density: f64) -> Self {
        self.bob_density = density;
        self
    }

    /// Set the drag coefficient
    pub fn with_drag_coefficient(mut self, drag_coefficient: f64) -> Self {
        self.drag_coefficient = drag_coefficient;
        self
    }

    /// Set the maximum integration sub-step
    pub fn with_max_substep(mut self, max_substep: f64) -> Self {
        self.max_substep = max_substep;
        self
    }

    /// Set the integration method
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Check that every numeric field is positive and finite, and that
    /// `max_substep` is at least [`MIN_SUBSTEP`]
    pub fn validate(&self) -> Result<(), PendulumError> {
        ensure_positive("gravity", self.gravity)?;
        ensure_positive("bob_density", self.bob_density)?;
        ensure_positive("drag_coefficient", self.drag_coefficient)?;
        ensure_positive("max_substep", self.max_substep)?;
        if self.max_substep < MIN_SUBSTEP {
            return Err(PendulumError::invalid(
                "max_substep",
                format!("{} is below the minimum of {}", self.max_substep, MIN_SUBSTEP),
            ));
        }
        Ok(())
    }

    /// Build a configuration from the defaults and the `PENDULUM_*`
    /// environment variables
    ///
    /// Unset variables keep their default. A variable that is set but cannot
    /// be parsed is an error rather than being silently ignored.
    pub fn from_env() -> Result<Self, PendulumError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, PendulumError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = PendulumConfig::default();

        if let Some(raw) = lookup("PENDULUM_GRAVITY") {
            config.gravity = parse_f64("gravity", &raw)?;
        }
        if let Some(raw) = lookup("PENDULUM_FLUID") {
            config.fluid = raw.parse()?;
        }
        if let Some(raw) = lookup("PENDULUM_MAX_SUBSTEP") {
            config.max_substep = parse_f64("max_substep", &raw)?;
        }
        if let Some(raw) = lookup("PENDULUM_METHOD") {
            config.method = raw.parse()?;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_f64(name: &'static str, raw: &str) -> Result<f64, PendulumError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| PendulumError::invalid(name, format!("'{}' is not a number: {}", raw, e)))
}
