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
//! Headless stand-in for a rendering shell
//!
//! Drives a session with a jittery 60 Hz clock, presses the buttons a user
//! would press, and prints the values a UI would label.
//!
//! ```bash
//! cargo run --example frame_loop
//! ```

use pendulum_eom::config::PendulumConfig;
use pendulum_eom::session::{Session, Snapshot};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;

fn print_labels(label: &str, s: &Snapshot) {
    println!(
        "  {:<11} t = {:6.3} s  θ = {:8.3}°  v = {:7.3} m/s  KE = {:7.3} J  PE = {:7.3} J  E = {:7.3} J",
        label,
        s.elapsed_time,
        s.theta_degrees(),
        s.velocity,
        s.kinetic_energy,
        s.potential_energy,
        s.total_energy()
    );
}

fn run_frames(session: &mut Session, clock: &mut f64, frames: usize) {
    for i in 0..frames {
        // 60 Hz with a little jitter and an occasional hitch
        let dt = if i % 97 == 96 {
            0.1
        } else {
            1.0 / 60.0 + 0.001 * ((i % 5) as f64 - 2.0)
        };
        *clock += dt;
        session.tick(dt);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(LevelFilter::DEBUG)
            .finish(),
    )?;

    println!("Pendulum EoM - Frame Loop Example");
    println!("=================================\n");

    let theta0 = 45.0_f64.to_radians();
    let mut session = Session::new(PendulumConfig::default(), 1.0, 0.05, theta0, false)?;
    let mut clock = 0.0;

    println!("Start");
    session.start();
    for _ in 0..4 {
        run_frames(&mut session, &mut clock, 60);
        print_labels("numeric", &session.numeric_snapshot());
        print_labels("approximate", &session.approximate_snapshot());
    }

    println!("\nStop (ticks are ignored)");
    session.stop();
    run_frames(&mut session, &mut clock, 60);
    print_labels("numeric", &session.numeric_snapshot());

    println!("\nEnable drag (resets to 45°) and start");
    session.set_drag_enabled(true);
    session.start();
    for _ in 0..4 {
        run_frames(&mut session, &mut clock, 300);
        print_labels("numeric", &session.numeric_snapshot());
    }

    println!("\nSlider to -120°");
    session.set_initial_angle((-120.0_f64).to_radians());
    run_frames(&mut session, &mut clock, 90);
    print_labels("numeric", &session.numeric_snapshot());
    print_labels("approximate", &session.approximate_snapshot());

    println!("\nReset");
    session.reset();
    print_labels("numeric", &session.numeric_snapshot());
    print_labels("approximate", &session.approximate_snapshot());

    println!("\nShell clock ran for {:.3} s", clock);
    Ok(())
}
