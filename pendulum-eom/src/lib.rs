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
//! # Pendulum EoM
//!
//! Equation-of-motion solver for a simple pendulum: a sphere bob on a rigid
//! massless arm swinging in a plane under gravity.
//!
//! ## Features
//!
//! - **Numeric strategy**: RK4 (or Heun) integration of the full nonlinear
//!   equation with optional quadratic and viscous drag
//! - **Approximate strategy**: closed-form large-angle fit evaluated directly
//!   at the accumulated time
//! - **Energy accounting**: kinetic, potential, and total energy for either
//!   strategy's output
//! - **Sessions**: one owned object per pendulum holding both strategies and
//!   the run flag, for a rendering shell to drive frame by frame
//! - **Parallelization**: optional Rayon integration for ensembles of
//!   independent pendulums
//!
//! ## Example
//!
//! ```rust
//! use pendulum_eom::config::PendulumConfig;
//! use pendulum_eom::session::Session;
//!
//! let mut session = Session::new(PendulumConfig::default(), 1.0, 0.05, 1.0, false).unwrap();
//! session.start();
//! for _ in 0..60 {
//!     session.tick(1.0 / 60.0);
//! }
//!
//! let numeric = session.numeric_snapshot();
//! let approx = session.approximate_snapshot();
//! assert!((numeric.theta - approx.theta).abs() < 0.05);
//! ```

#![warn(missing_docs)]

/// Physical and numerical configuration
pub mod config;

/// Mechanical energy of the bob
pub mod energy;

/// Ensembles of independent pendulums
pub mod ensemble;

/// Error types
pub mod error;

/// Numerical integration methods
pub mod integration;

/// Session object driven by a rendering shell
pub mod session;

/// Numeric and approximate solving strategies
pub mod solver;

/// Physical state record
pub mod state;

/// Trajectory recording and CSV export
pub mod trajectory;

pub use config::{Fluid, PendulumConfig};
pub use error::{ExportError, PendulumError};
pub use session::{RunState, Session, Strategy};
pub use solver::{AnalyticApproximator, NumericIntegrator};
pub use state::PendulumState;
