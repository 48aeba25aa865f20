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
//! Error types
//!
//! Only construction and configuration can fail. Time deltas coming from the
//! host clock are clamped instead of rejected, so stepping never returns an
//! error.

use thiserror::Error;

/// Errors raised while setting up a pendulum or its configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PendulumError {
    /// A parameter was outside its valid range
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Human-readable description of the constraint that failed
        reason: String,
    },
}

impl PendulumError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        PendulumError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Errors raised while exporting a trajectory
#[derive(Debug, Error)]
pub enum ExportError {
    /// The export parameters were rejected
    #[error(transparent)]
    Pendulum(#[from] PendulumError),

    /// The underlying writer failed
    #[error("failed to write trajectory: {0}")]
    Io(#[from] std::io::Error),
}

/// Require `value` to be finite and strictly positive
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64, PendulumError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(PendulumError::invalid(
            name,
            format!("{} must be positive and finite", value),
        ))
    }
}

/// Require `value` to be finite and not negative
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64, PendulumError> {
    if value >= 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(PendulumError::invalid(
            name,
            format!("{} must be non-negative and finite", value),
        ))
    }
}
