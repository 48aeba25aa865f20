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
//! Record a 60° release for 30 seconds and save it as CSV
//!
//! Writes `deg_60.csv` in the working directory with one row per millisecond:
//! time, numeric angle, approximate angle.
//!
//! ```bash
//! cargo run --example deg_60
//! ```

use pendulum_eom::config::PendulumConfig;
use pendulum_eom::session::Session;
use pendulum_eom::trajectory::Trajectory;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(LevelFilter::INFO)
            .finish(),
    )?;

    let config = PendulumConfig::from_env()?;
    let mut session = Session::new(config, 1.0, 0.05, 60.0_f64.to_radians(), false)?;

    let trajectory = Trajectory::record(&mut session, 0.001, 30.0)?;
    trajectory.save_csv("deg_60.csv")?;

    info!(
        rows = trajectory.len(),
        max_deviation_deg = trajectory.max_deviation().to_degrees(),
        "numeric vs approximate"
    );

    Ok(())
}
