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
//! Tests driving a session the way a rendering shell does

use pendulum_eom::config::PendulumConfig;
use pendulum_eom::session::{RunState, Session, Strategy};

/// Frame clock that reports absolute times, including a backwards jump
fn frame_times() -> Vec<f64> {
    let mut times: Vec<f64> = (0..120).map(|i| i as f64 / 60.0).collect();
    // Clock reset after a pause
    times.push(1.0);
    times.extend((1..60).map(|i| 1.0 + i as f64 / 60.0));
    times
}

#[test]
fn test_shell_loop_with_clock_hitch() {
    let mut session = Session::new(PendulumConfig::default(), 1.0, 0.05, 0.6, false).unwrap();
    session.start();

    let mut previous = 0.0;
    let mut elapsed_by_shell = 0.0;
    for now in frame_times() {
        let dt: f64 = now - previous;
        previous = now;
        if dt > 0.0 {
            elapsed_by_shell += dt;
        }
        session.tick(dt);
    }

    let numeric = session.numeric_snapshot();
    let approx = session.approximate_snapshot();
    assert!((numeric.elapsed_time - elapsed_by_shell).abs() < 1e-9);
    assert!((approx.elapsed_time - elapsed_by_shell).abs() < 1e-9);
    assert!(numeric.theta.abs() <= 0.6 + 1e-9);
}

#[test]
fn test_pause_freezes_display_values() {
    let mut session = Session::new(PendulumConfig::default(), 1.0, 0.05, 0.6, true).unwrap();
    session.start();
    for _ in 0..30 {
        session.tick(1.0 / 60.0);
    }

    assert_eq!(session.toggle(), RunState::Stopped);
    let frozen = session.numeric_snapshot();
    for _ in 0..30 {
        session.tick(1.0 / 60.0);
    }
    assert_eq!(session.numeric_snapshot(), frozen);

    session.start();
    session.tick(1.0 / 60.0);
    assert_ne!(session.numeric_snapshot(), frozen);
}

#[test]
fn test_angle_slider_restarts_from_new_angle() {
    let mut session = Session::new(PendulumConfig::default(), 1.0, 0.05, 0.6, false).unwrap();
    session.start();
    for _ in 0..30 {
        session.tick(1.0 / 60.0);
    }

    session.set_initial_angle((-45.0_f64).to_radians());
    assert!(session.is_running());
    assert!((session.numeric_snapshot().theta_degrees() + 45.0).abs() < 1e-12);
    assert!((session.approximate_snapshot().theta_degrees() + 45.0).abs() < 1e-12);

    session.tick(1.0 / 60.0);
    // Released at a negative angle, the bob starts moving in the positive direction
    assert!(session.numeric_snapshot().omega > 0.0);
    assert!(session.approximate_snapshot().omega > 0.0);
}

#[test]
fn test_independent_sessions_do_not_interact() {
    let mut a = Session::new(PendulumConfig::default(), 1.0, 0.05, 0.6, false).unwrap();
    let mut b = a.clone().with_strategy(Strategy::Numeric);
    a.start();
    b.start();

    for _ in 0..60 {
        a.tick(1.0 / 60.0);
    }
    assert_eq!(b.numeric().elapsed_time(), 0.0);

    b.tick(1.0 / 60.0);
    assert!(a.numeric().elapsed_time() > b.numeric().elapsed_time());
}
