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
//! Sweep release angles and compare the two strategies
//!
//! Runs one independent pendulum per release angle from 5° to 175° for ten
//! seconds, in parallel when the `parallel` feature is on, and prints how far
//! the closed-form approximation drifts from the numeric solution and how
//! much energy drag removes.
//!
//! ```bash
//! cargo run --example sweep
//! PENDULUM_FLUID=water cargo run --example sweep
//! ```

use pendulum_eom::config::PendulumConfig;
use pendulum_eom::ensemble::Ensemble;
use std::time::Instant;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(LevelFilter::INFO)
            .finish(),
    )?;

    let config = PendulumConfig::from_env()?;
    let angles: Vec<f64> = (1..=35).map(|i| (5.0 * i as f64).to_radians()).collect();

    println!("Pendulum EoM - Release Angle Sweep ({:?})", config.fluid);
    println!("==========================================\n");

    let undamped = Ensemble::new(config, 1.0, 0.05, false)?;
    let damped = Ensemble::new(config, 1.0, 0.05, true)?;

    let start = Instant::now();
    let free = undamped.run(&angles, 10.0)?;
    let dragged = damped.run(&angles, 10.0)?;
    let elapsed = start.elapsed();

    println!("{:>6}  {:>12}  {:>12}  {:>10}  {:>10}", "θ0", "numeric", "approx", "|Δθ|", "drag loss");
    for (f, d) in free.iter().zip(&dragged) {
        println!(
            "{:>5.0}°  {:>11.3}°  {:>11.3}°  {:>9.3}°  {:>9.2}%",
            f.theta0.to_degrees(),
            f.theta_numeric.to_degrees(),
            f.theta_approx.to_degrees(),
            (f.theta_numeric - f.theta_approx).abs().to_degrees(),
            100.0 * d.energy_loss_fraction()
        );
    }

    println!("\n{} pendulums x 2 simulated in {:.2?}", angles.len(), elapsed);
    Ok(())
}
