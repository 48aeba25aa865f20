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
//! Solving strategies
//!
//! Two interchangeable ways of producing the pendulum angle over time:
//!
//! - [`NumericIntegrator`]: integrates the full nonlinear equation of motion,
//!   optionally with drag.
//! - [`AnalyticApproximator`]: evaluates a closed-form fit to the undamped
//!   large-angle solution.
//!
//! Each owns its own [`PendulumState`](crate::state::PendulumState) and time
//! accumulator.

mod analytic;
mod numeric;

pub use analytic::{approximate_frequency, approximate_phase, AnalyticApproximator};
pub use numeric::NumericIntegrator;
