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
//! Session: the object a visualization shell holds
//!
//! A [`Session`] bundles one numeric and one approximate solver with the run
//! flag and the strategy selection. The shell owns exactly one session per
//! pendulum, passes it by reference to whatever needs to read or change it,
//! and is the only writer of the run flag. Several sessions never share
//! state.
//!
//! ```text
//!            start / toggle
//!   Stopped ----------------> Running
//!      ^                         |
//!      +-------------------------+
//!            stop / toggle
//!
//!   reset: back to (θ0, ω = 0, t = 0) from either state
//! ```

use crate::config::PendulumConfig;
use crate::error::PendulumError;
use crate::solver::{AnalyticApproximator, NumericIntegrator};

/// Whether ticks advance the solvers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Ticks are ignored
    #[default]
    Stopped,
    /// Ticks advance the active strategy
    Running,
}

/// Which solver(s) a tick drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Numeric integration only
    Numeric,
    /// Closed-form approximation only
    Approximate,
    /// Both, side by side
    #[default]
    Both,
}

impl Strategy {
    fn drives_numeric(&self) -> bool {
        matches!(self, Strategy::Numeric | Strategy::Both)
    }

    fn drives_approximate(&self) -> bool {
        matches!(self, Strategy::Approximate | Strategy::Both)
    }
}

/// Everything a display needs from one strategy at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// Time since the last reset (s)
    pub elapsed_time: f64,
    /// Angle (rad)
    pub theta: f64,
    /// Angular velocity (rad/s)
    pub omega: f64,
    /// Linear speed of the bob (m/s)
    pub velocity: f64,
    /// Kinetic energy (J)
    pub kinetic_energy: f64,
    /// Potential energy (J)
    pub potential_energy: f64,
}

impl Snapshot {
    /// Kinetic plus potential energy (J)
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy + self.potential_energy
    }

    /// Angle in degrees, for display
    pub fn theta_degrees(&self) -> f64 {
        self.theta.to_degrees()
    }
}

/// One pendulum with both solving strategies and a run flag
///
/// # Example
///
/// ```
/// use pendulum_eom::config::PendulumConfig;
/// use pendulum_eom::session::{Session, Strategy};
///
/// let mut session = Session::new(PendulumConfig::default(), 1.0, 0.05, 0.5, false).unwrap();
/// assert!(!session.tick(0.016));
///
/// session.start();
/// assert!(session.tick(0.016));
/// assert!(session.numeric_snapshot().theta < 0.5);
///
/// session.reset();
/// assert_eq!(session.numeric_snapshot().theta, 0.5);
/// assert_eq!(session.strategy(), Strategy::Both);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    numeric: NumericIntegrator,
    approximate: AnalyticApproximator,
    strategy: Strategy,
    run_state: RunState,
    initial_angle: f64,
}

impl Session {
    /// Create a stopped session at rest at `theta0`
    pub fn new(
        config: PendulumConfig,
        arm_length: f64,
        bob_radius: f64,
        theta0: f64,
        consider_drag: bool,
    ) -> Result<Self, PendulumError> {
        let numeric =
            NumericIntegrator::with_config(config, arm_length, bob_radius, theta0, consider_drag)?;
        let approximate = AnalyticApproximator::with_config(config, arm_length, bob_radius, theta0)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(arm_length, bob_radius, theta0, consider_drag, "session created");

        Ok(Session {
            numeric,
            approximate,
            strategy: Strategy::default(),
            run_state: RunState::Stopped,
            initial_angle: theta0,
        })
    }

    /// Use only the given strategy from now on
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Current run state
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Whether ticks currently advance the solvers
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Stopped → Running
    pub fn start(&mut self) {
        self.run_state = RunState::Running;
    }

    /// Running → Stopped
    pub fn stop(&mut self) {
        self.run_state = RunState::Stopped;
    }

    /// Flip the run state, as a start/stop button does
    pub fn toggle(&mut self) -> RunState {
        self.run_state = match self.run_state {
            RunState::Stopped => RunState::Running,
            RunState::Running => RunState::Stopped,
        };
        self.run_state
    }

    /// Active strategy
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Switch strategy without touching any solver state
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Feed one frame delta to the active strategy
    ///
    /// Returns `false` without touching anything while stopped.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.is_running() {
            return false;
        }
        if self.strategy.drives_numeric() {
            self.numeric.advance(dt);
        }
        if self.strategy.drives_approximate() {
            self.approximate.evaluate(dt);
        }
        true
    }

    /// Angle both strategies return to on reset (rad)
    pub fn initial_angle(&self) -> f64 {
        self.initial_angle
    }

    /// Return both strategies to rest at the initial angle
    ///
    /// The run state and strategy are unchanged.
    pub fn reset(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(theta0 = self.initial_angle, "session reset");

        self.numeric.set_theta0(self.initial_angle);
        self.numeric.reset();
        self.approximate.set_theta0(self.initial_angle);
        self.approximate.reset();
    }

    /// Choose a new initial angle and reset to it
    pub fn set_initial_angle(&mut self, theta0: f64) {
        self.initial_angle = theta0;
        self.reset();
    }

    /// Toggle the drag torque and reset to the initial angle
    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.numeric.set_drag_enabled(enabled);
        self.reset();
    }

    /// Numeric solver
    pub fn numeric(&self) -> &NumericIntegrator {
        &self.numeric
    }

    /// Numeric solver, mutable
    pub fn numeric_mut(&mut self) -> &mut NumericIntegrator {
        &mut self.numeric
    }

    /// Approximate solver
    pub fn approximate(&self) -> &AnalyticApproximator {
        &self.approximate
    }

    /// Approximate solver, mutable
    pub fn approximate_mut(&mut self) -> &mut AnalyticApproximator {
        &mut self.approximate
    }

    /// Display values from the numeric solver
    pub fn numeric_snapshot(&self) -> Snapshot {
        let n = &self.numeric;
        Snapshot {
            elapsed_time: n.elapsed_time(),
            theta: n.theta(),
            omega: n.omega(),
            velocity: n.velocity(),
            kinetic_energy: n.kinetic_energy(),
            potential_energy: n.potential_energy(),
        }
    }

    /// Display values from the approximate solver
    pub fn approximate_snapshot(&self) -> Snapshot {
        let a = &self.approximate;
        Snapshot {
            elapsed_time: a.elapsed_time(),
            theta: a.theta(),
            omega: a.omega(),
            velocity: a.velocity(),
            kinetic_energy: a.kinetic_energy(),
            potential_energy: a.potential_energy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(theta0: f64) -> Session {
        Session::new(PendulumConfig::default(), 1.0, 0.05, theta0, false).unwrap()
    }

    #[test]
    fn test_starts_stopped() {
        let mut s = session(0.4);
        assert_eq!(s.run_state(), RunState::Stopped);
        assert!(!s.tick(0.1));
        assert_eq!(s.numeric().elapsed_time(), 0.0);
        assert_eq!(s.approximate().elapsed_time(), 0.0);
    }

    #[test]
    fn test_toggle() {
        let mut s = session(0.4);
        assert_eq!(s.toggle(), RunState::Running);
        assert_eq!(s.toggle(), RunState::Stopped);
    }

    #[test]
    fn test_strategy_selects_solver() {
        let mut s = session(0.4).with_strategy(Strategy::Approximate);
        s.start();
        s.tick(0.1);
        assert_eq!(s.numeric().elapsed_time(), 0.0);
        assert_eq!(s.approximate().elapsed_time(), 0.1);

        s.set_strategy(Strategy::Numeric);
        s.tick(0.1);
        assert!((s.numeric().elapsed_time() - 0.1).abs() < 1e-15);
        assert_eq!(s.approximate().elapsed_time(), 0.1);
    }

    #[test]
    fn test_reset_keeps_run_state_and_strategy() {
        let mut s = session(0.4).with_strategy(Strategy::Numeric);
        s.start();
        s.tick(0.3);
        s.reset();

        assert!(s.is_running());
        assert_eq!(s.strategy(), Strategy::Numeric);
        assert_eq!(s.numeric_snapshot().theta, 0.4);
        assert_eq!(s.numeric_snapshot().omega, 0.0);
        assert_eq!(s.numeric_snapshot().elapsed_time, 0.0);
    }

    #[test]
    fn test_set_initial_angle_resets_both() {
        let mut s = session(0.4);
        s.start();
        s.tick(0.3);
        s.set_initial_angle(-0.6);

        assert_eq!(s.initial_angle(), -0.6);
        assert_eq!(s.numeric().theta(), -0.6);
        assert_eq!(s.approximate().theta(), -0.6);
        assert_eq!(s.approximate().theta0(), -0.6);
        assert_eq!(s.approximate().elapsed_time(), 0.0);
    }

    #[test]
    fn test_drag_toggle_resets() {
        let mut s = session(0.4);
        s.start();
        s.tick(0.3);
        s.set_drag_enabled(true);

        assert!(s.numeric().state().drag_enabled());
        assert_eq!(s.numeric().theta(), 0.4);
        assert_eq!(s.numeric().elapsed_time(), 0.0);
    }

    #[test]
    fn test_snapshot_energy() {
        let s = session(0.4);
        let snap = s.numeric_snapshot();
        assert_eq!(snap.kinetic_energy, 0.0);
        assert_eq!(snap.total_energy(), snap.potential_energy);
        assert!((snap.theta_degrees() - 0.4_f64.to_degrees()).abs() < 1e-12);
    }
}
