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
//! Fixed-step trajectory recording and CSV export
//!
//! Drives both solvers of a [`Session`] on a regular time grid and records
//! the numeric and approximate angle side by side. The CSV layout is one row
//! per sample, no header:
//!
//! ```text
//! 0.000, 1.047197551000000, 1.047197551000000
//! 0.001, 1.047193305467771, 1.047193326403540
//! ```

use crate::error::{ensure_non_negative, ensure_positive, ExportError, PendulumError};
use crate::session::Session;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One row of a recorded trajectory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    /// Time since recording started (s)
    pub time: f64,
    /// Angle from the numeric solver (rad)
    pub theta_numeric: f64,
    /// Angle from the closed-form approximation (rad)
    pub theta_approx: f64,
}

/// Angles of both strategies sampled on a regular grid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    /// Record `duration` seconds at spacing `sample_dt`
    ///
    /// Both solvers of `session` are advanced from wherever they currently
    /// are, regardless of the session's run state; reset the session first
    /// for a recording from rest. The first sample is taken before any
    /// advance, so a recording holds `floor(duration / sample_dt) + 1` rows.
    ///
    /// # Errors
    ///
    /// Returns [`PendulumError::InvalidParameter`] if `sample_dt` is not
    /// positive or `duration` is negative.
    pub fn record(
        session: &mut Session,
        sample_dt: f64,
        duration: f64,
    ) -> Result<Self, PendulumError> {
        let sample_dt = ensure_positive("sample_dt", sample_dt)?;
        let duration = ensure_non_negative("duration", duration)?;

        // Small slack so 30.0 / 0.001 does not lose its last row to rounding
        let steps = (duration / sample_dt + 1e-9).floor() as usize;
        let mut samples = Vec::with_capacity(steps + 1);

        let mut previous = 0.0;
        for i in 0..=steps {
            let time = i as f64 * sample_dt;
            let delta = time - previous;
            previous = time;

            let theta_numeric = session.numeric_mut().advance(delta);
            let theta_approx = session.approximate_mut().evaluate(delta);
            samples.push(TrajectorySample {
                time,
                theta_numeric,
                theta_approx,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(rows = samples.len(), sample_dt, duration, "trajectory recorded");

        Ok(Trajectory { samples })
    }

    /// Recorded rows in time order
    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest |θ_numeric − θ_approx| over the recording (rad)
    pub fn max_deviation(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| (s.theta_numeric - s.theta_approx).abs())
            .fold(0.0, f64::max)
    }

    /// Write the rows as CSV to `writer`
    pub fn write_csv<W: Write>(&self, mut writer: W) -> Result<(), ExportError> {
        for s in &self.samples {
            writeln!(
                writer,
                "{:.3}, {:.15}, {:.15}",
                s.time, s.theta_numeric, s.theta_approx
            )?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the rows as CSV to a new file at `path`
    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let file = File::create(path.as_ref())?;
        self.write_csv(BufWriter::new(file))?;

        #[cfg(feature = "tracing")]
        tracing::info!(path = %path.as_ref().display(), rows = self.samples.len(), "trajectory saved");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PendulumConfig;

    fn session(theta0: f64) -> Session {
        Session::new(PendulumConfig::default(), 1.0, 0.05, theta0, false).unwrap()
    }

    #[test]
    fn test_row_count() {
        let mut s = session(0.5);
        let traj = Trajectory::record(&mut s, 0.01, 1.0).unwrap();
        assert_eq!(traj.len(), 101);
        assert_eq!(traj.samples()[0].time, 0.0);
        assert!((traj.samples()[100].time - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_first_row_is_release_angle() {
        let mut s = session(0.5);
        let traj = Trajectory::record(&mut s, 0.01, 0.1).unwrap();
        let first = traj.samples()[0];
        assert_eq!(first.theta_numeric, 0.5);
        assert_eq!(first.theta_approx, 0.5);
    }

    #[test]
    fn test_zero_duration_single_row() {
        let mut s = session(0.5);
        let traj = Trajectory::record(&mut s, 0.01, 0.0).unwrap();
        assert_eq!(traj.len(), 1);
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let mut s = session(0.5);
        assert!(Trajectory::record(&mut s, 0.0, 1.0).is_err());
        assert!(Trajectory::record(&mut s, 0.01, -1.0).is_err());
    }

    #[test]
    fn test_csv_format() {
        let mut s = session(0.5);
        let traj = Trajectory::record(&mut s, 0.5, 1.0).unwrap();

        let mut out = Vec::new();
        traj.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "0.000, 0.500000000000000, 0.500000000000000");
        assert!(lines[1].starts_with("0.500, "));
        assert_eq!(lines[2].split(", ").count(), 3);
    }

    #[test]
    fn test_small_angle_deviation_is_small() {
        let mut s = session(0.05);
        let traj = Trajectory::record(&mut s, 0.01, 5.0).unwrap();
        assert!(traj.max_deviation() < 1e-4, "deviation {}", traj.max_deviation());
    }
}
