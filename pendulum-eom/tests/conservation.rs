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
//! Integration tests verifying energy behaviour of the numeric solver

use pendulum_eom::config::PendulumConfig;
use pendulum_eom::integration::Method;
use pendulum_eom::solver::NumericIntegrator;

const FRAME: f64 = 1.0 / 60.0;

/// Run `seconds` of 60 Hz frames and return the largest relative energy error
fn max_energy_error(pendulum: &mut NumericIntegrator, seconds: f64) -> f64 {
    let e0 = pendulum.total_energy();
    let frames = (seconds / FRAME).round() as usize;
    let mut worst: f64 = 0.0;
    for _ in 0..frames {
        pendulum.advance(FRAME);
        worst = worst.max((pendulum.total_energy() - e0).abs() / e0);
    }
    worst
}

#[test]
fn test_rk4_energy_conservation_without_drag() {
    for &theta0 in &[0.1, 1.0, 2.5, -1.7] {
        let mut pendulum = NumericIntegrator::new(1.0, 0.05, theta0, false).unwrap();
        let error = max_energy_error(&mut pendulum, 10.0);
        assert!(
            error < 1e-8,
            "Energy not conserved for theta0 = {}: relative error = {}",
            theta0,
            error
        );
    }
}

#[test]
fn test_heun_energy_error_shrinks_with_substep() {
    let coarse_config = PendulumConfig::default()
        .with_method(Method::Heun)
        .with_max_substep(0.01);
    let fine_config = coarse_config.with_max_substep(0.005);

    let mut coarse = NumericIntegrator::with_config(coarse_config, 1.0, 0.05, 1.0, false).unwrap();
    let mut fine = NumericIntegrator::with_config(fine_config, 1.0, 0.05, 1.0, false).unwrap();

    let e0 = coarse.total_energy();
    for _ in 0..200 {
        coarse.advance(0.01);
        fine.advance(0.01);
    }
    let coarse_err = (coarse.total_energy() - e0).abs() / e0;
    let fine_err = (fine.total_energy() - e0).abs() / e0;

    // At least second order: halving the step cuts the drift by ~4x or more
    assert!(coarse_err < 1e-2, "coarse drift {}", coarse_err);
    assert!(
        fine_err < coarse_err / 2.5,
        "coarse drift {} fine drift {}",
        coarse_err,
        fine_err
    );
}

#[test]
fn test_energy_never_increases_with_drag() {
    for &theta0 in &[0.3, 1.2, 2.8] {
        let mut pendulum = NumericIntegrator::new(1.0, 0.05, theta0, true).unwrap();
        let e0 = pendulum.total_energy();
        let tolerance = 1e-10 * e0;

        let mut previous = e0;
        for frame in 0..600 {
            pendulum.advance(FRAME);
            let energy = pendulum.total_energy();
            assert!(
                energy <= previous + tolerance,
                "Energy increased at frame {} for theta0 = {}: {} -> {}",
                frame,
                theta0,
                previous,
                energy
            );
            previous = energy;
        }
        assert!(previous < e0, "No dissipation for theta0 = {}", theta0);
    }
}

#[test]
fn test_drag_dissipation_with_irregular_frames() {
    let mut pendulum = NumericIntegrator::new(0.8, 0.08, 1.0, true).unwrap();
    let e0 = pendulum.total_energy();

    // Host clocks hitch: mix of short, long, zero and negative deltas
    let deltas = [0.016, 0.033, 0.0, 0.008, -0.004, 0.1, 0.016, 0.25];
    for _ in 0..50 {
        for &dt in &deltas {
            pendulum.advance(dt);
        }
    }
    assert!(pendulum.total_energy() < e0);
}

#[test]
fn test_water_dissipates_faster_than_air() {
    let water_config = PendulumConfig::default().with_fluid(pendulum_eom::Fluid::Water);
    let mut air = NumericIntegrator::new(1.0, 0.05, 1.0, true).unwrap();
    let mut water = NumericIntegrator::with_config(water_config, 1.0, 0.05, 1.0, true).unwrap();

    let e0 = air.total_energy();
    for _ in 0..300 {
        air.advance(FRAME);
        water.advance(FRAME);
    }
    assert!(water.total_energy() < air.total_energy());
    assert!(air.total_energy() < e0);
}
