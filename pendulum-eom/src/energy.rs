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
//! Mechanical energy of the bob
//!
//! These are display-only quantities. They are computed from whatever angle
//! and speed the caller passes in and never feed back into a solver, so the
//! same [`EnergyModel`] serves the numeric and the approximate strategy.
//! Mixing the angle of one strategy with the speed of the other is the
//! caller's mistake and is not detected here.

use std::f64::consts::PI;

/// Mass of a solid sphere of the given radius and density
///
/// m = 4/3 · π · r³ · ρ
pub fn sphere_mass(radius: f64, density: f64) -> f64 {
    4.0 / 3.0 * PI * radius * radius * radius * density
}

/// Constants needed to turn (θ, v) into energies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyModel {
    mass: f64,
    arm_length: f64,
    gravity: f64,
}

impl EnergyModel {
    /// Create a model for a bob of `mass` kg on an arm of `arm_length` m
    pub fn new(mass: f64, arm_length: f64, gravity: f64) -> Self {
        EnergyModel {
            mass,
            arm_length,
            gravity,
        }
    }

    /// Bob mass (kg)
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// KE = ½ · m · v², with `v` the linear speed of the bob
    pub fn kinetic_energy(&self, v: f64) -> f64 {
        0.5 * self.mass * v * v
    }

    /// PE = m · g · L · (1 − cos θ), zero at the lowest point
    pub fn potential_energy(&self, theta: f64) -> f64 {
        self.mass * self.gravity * self.arm_length * (1.0 - theta.cos())
    }

    /// KE + PE for a matching (θ, v) pair
    pub fn total_energy(&self, theta: f64, v: f64) -> f64 {
        self.kinetic_energy(v) + self.potential_energy(theta)
    }
}
