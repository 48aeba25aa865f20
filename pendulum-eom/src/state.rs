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
//! Physical state of a single pendulum
//!
//! [`PendulumState`] is plain data. Both solving strategies own one and
//! mutate it through the setters below; nothing in this module advances time.

use crate::error::{ensure_non_negative, ensure_positive, PendulumError};

/// Angle, angular velocity, and elapsed time of one pendulum plus its fixed
/// geometry
///
/// Angles are in radians measured from the downward vertical. The sign
/// convention is whatever the caller used for the initial angle and is kept
/// through resets.
///
/// # Examples
///
/// ```
/// use pendulum_eom::state::PendulumState;
///
/// let state = PendulumState::new(1.0, 0.05, 0.5, false).unwrap();
/// assert_eq!(state.theta(), 0.5);
/// assert_eq!(state.omega(), 0.0);
/// assert!(PendulumState::new(0.0, 0.05, 0.5, false).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumState {
    arm_length: f64,
    bob_radius: f64,
    theta: f64,
    theta0: f64,
    omega: f64,
    elapsed_time: f64,
    consider_drag: bool,
}

impl PendulumState {
    /// Create a state at rest at `theta0`
    ///
    /// # Errors
    ///
    /// Returns [`PendulumError::InvalidParameter`] if `arm_length` is not
    /// positive and finite, or if `bob_radius` is negative or non-finite.
    pub fn new(
        arm_length: f64,
        bob_radius: f64,
        theta0: f64,
        consider_drag: bool,
    ) -> Result<Self, PendulumError> {
        let arm_length = ensure_positive("arm_length", arm_length)?;
        let bob_radius = ensure_non_negative("bob_radius", bob_radius)?;
        if !theta0.is_finite() {
            return Err(PendulumError::invalid("theta0", "initial angle must be finite"));
        }

        Ok(PendulumState {
            arm_length,
            bob_radius,
            theta: theta0,
            theta0,
            omega: 0.0,
            elapsed_time: 0.0,
            consider_drag,
        })
    }

    /// Distance from the pivot to the bob center (m)
    pub fn arm_length(&self) -> f64 {
        self.arm_length
    }

    /// Bob radius (m)
    pub fn bob_radius(&self) -> f64 {
        self.bob_radius
    }

    /// Current angle (rad)
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Angle at the last reset or retarget (rad)
    pub fn theta0(&self) -> f64 {
        self.theta0
    }

    /// Current angular velocity (rad/s)
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Linear speed of the bob center, `arm_length * omega` (m/s)
    pub fn velocity(&self) -> f64 {
        self.arm_length * self.omega
    }

    /// Time since the last reset (s)
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// Whether the quadratic drag torque is applied
    pub fn drag_enabled(&self) -> bool {
        self.consider_drag
    }

    /// Overwrite the current angle; `theta0` is left alone
    pub fn set_theta(&mut self, theta: f64) {
        self.theta = theta;
    }

    /// Overwrite the reset angle; the current angle is left alone
    pub fn set_theta0(&mut self, theta0: f64) {
        self.theta0 = theta0;
    }

    /// Overwrite the angular velocity
    pub fn set_omega(&mut self, omega: f64) {
        self.omega = omega;
    }

    /// Enable or disable the drag torque
    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.consider_drag = enabled;
    }

    /// Zero the elapsed time only
    pub fn time_reset(&mut self) {
        self.elapsed_time = 0.0;
    }

    /// Return to rest at `theta0` with zero elapsed time
    pub fn reset(&mut self) {
        self.theta = self.theta0;
        self.omega = 0.0;
        self.elapsed_time = 0.0;
    }

    /// Check that the dynamic fields are finite
    pub fn is_valid(&self) -> bool {
        self.theta.is_finite() && self.omega.is_finite() && self.elapsed_time.is_finite()
    }

    pub(crate) fn commit(&mut self, theta: f64, omega: f64) {
        self.theta = theta;
        self.omega = omega;
    }

    pub(crate) fn add_time(&mut self, dt: f64) {
        self.elapsed_time += dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_rest() {
        let state = PendulumState::new(2.0, 0.1, -0.3, true).unwrap();
        assert_eq!(state.arm_length(), 2.0);
        assert_eq!(state.bob_radius(), 0.1);
        assert_eq!(state.theta(), -0.3);
        assert_eq!(state.theta0(), -0.3);
        assert_eq!(state.omega(), 0.0);
        assert_eq!(state.elapsed_time(), 0.0);
        assert!(state.drag_enabled());
    }

    #[test]
    fn test_new_rejects_bad_geometry() {
        assert!(matches!(
            PendulumState::new(0.0, 0.05, 0.1, false),
            Err(PendulumError::InvalidParameter { name: "arm_length", .. })
        ));
        assert!(PendulumState::new(-1.0, 0.05, 0.1, false).is_err());
        assert!(PendulumState::new(1.0, -0.05, 0.1, false).is_err());
        assert!(PendulumState::new(1.0, 0.05, f64::NAN, false).is_err());
        assert!(PendulumState::new(1.0, 0.0, 0.1, false).is_ok());
    }

    #[test]
    fn test_setters_touch_one_field() {
        let mut state = PendulumState::new(1.0, 0.05, 0.4, false).unwrap();
        state.add_time(1.5);

        state.set_theta(0.2);
        assert_eq!(state.theta(), 0.2);
        assert_eq!(state.theta0(), 0.4);
        assert_eq!(state.elapsed_time(), 1.5);

        state.set_theta0(0.7);
        assert_eq!(state.theta(), 0.2);
        assert_eq!(state.theta0(), 0.7);

        state.set_omega(-1.0);
        assert_eq!(state.omega(), -1.0);
        assert_eq!(state.velocity(), -1.0);
        assert_eq!(state.elapsed_time(), 1.5);
    }

    #[test]
    fn test_time_reset_keeps_motion() {
        let mut state = PendulumState::new(1.0, 0.05, 0.4, false).unwrap();
        state.commit(0.1, 2.0);
        state.add_time(3.0);

        state.time_reset();
        assert_eq!(state.elapsed_time(), 0.0);
        assert_eq!(state.theta(), 0.1);
        assert_eq!(state.omega(), 2.0);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = PendulumState::new(1.0, 0.05, 0.4, false).unwrap();
        state.commit(0.1, 2.0);
        state.add_time(3.0);

        state.reset();
        let once = state;
        state.reset();
        assert_eq!(state, once);
        assert_eq!(state.theta(), 0.4);
        assert_eq!(state.omega(), 0.0);
        assert_eq!(state.elapsed_time(), 0.0);
    }
}
