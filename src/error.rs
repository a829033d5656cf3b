//! Error and warning types.
//!
//! Fatal conditions are [`SolverError`] values returned through `Result`.
//! Recoverable conditions are [`SimulationWarning`] values: they are logged
//! when they happen and collected by the simulation driver, never aborting
//! the run.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::types::{CellIndex, Edge};

/// Fatal solver errors.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Grid cannot be built from the requested dimensions.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// A configuration value is out of its admissible range.
    #[error("invalid value for '{key}': {value} ({reason})")]
    Configuration {
        /// Configuration key
        key: String,
        /// Offending value
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// A step produced NaN or infinite values.
    #[error("numerical instability: non-finite {field} at cell {cell}, t = {time:.6} s")]
    NumericalInstability {
        /// First offending cell
        cell: CellIndex,
        /// Simulated time the failed step was advancing to
        time: f64,
        /// Field name ("h", "u" or "v")
        field: &'static str,
    },

    /// The caller-supplied step guard was hit before reaching `t_end`.
    #[error("step limit ({max_steps}) reached at t = {time:.6} s")]
    StepLimitExceeded {
        /// Configured maximum number of steps
        max_steps: usize,
        /// Simulated time when the limit was hit
        time: f64,
    },

    /// I/O error while loading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration document.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SolverError {
    /// Shorthand for a [`SolverError::Configuration`] error.
    pub fn config(key: &str, value: impl fmt::Display, reason: &str) -> Self {
        Self::Configuration {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Non-fatal conditions collected over a run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum SimulationWarning {
    /// No wet cell or no signal speed; the step took `dt_fallback`.
    DryDomain {
        /// Time at the start of the step
        time: f64,
    },
    /// An inflow edge had no wet cell, so its discharge was skipped.
    InflowUnapplied {
        /// Inflow edge
        edge: Edge,
        /// Time the boundary was applied at
        time: f64,
    },
}

impl SimulationWarning {
    /// Simulated time the warning refers to.
    pub fn time(&self) -> f64 {
        match self {
            Self::DryDomain { time } | Self::InflowUnapplied { time, .. } => *time,
        }
    }
}

impl fmt::Display for SimulationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DryDomain { time } => {
                write!(f, "dry domain at t = {:.4} s, using fallback time step", time)
            }
            Self::InflowUnapplied { edge, time } => write!(
                f,
                "inflow on {} edge not applied at t = {:.4} s: no wet cells",
                edge, time
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instability_message_names_cell_and_time() {
        let err = SolverError::NumericalInstability {
            cell: CellIndex::new(4, 2),
            time: 12.5,
            field: "h",
        };
        let msg = err.to_string();
        assert!(msg.contains("(4, 2)"));
        assert!(msg.contains("12.5"));
        assert!(msg.contains(" h "));
    }

    #[test]
    fn test_config_error_display() {
        let err = SolverError::config("cfl", 1.2, "must lie in (0, 1)");
        assert!(err.to_string().contains("cfl"));
        assert!(err.to_string().contains("1.2"));
    }

    #[test]
    fn test_warning_time() {
        let w = SimulationWarning::InflowUnapplied {
            edge: Edge::West,
            time: 3.0,
        };
        assert_eq!(w.time(), 3.0);
        assert!(w.to_string().contains("west"));
    }
}
