//! Run configuration.
//!
//! [`SolverConfig`] holds the numerical parameters of the scheme and
//! [`SimulationConfig`] adds the run horizon and output cadence. Both can be
//! built in code with `with_*` setters or loaded from JSON; missing fields
//! fall back to the defaults below.
//!
//! | field            | default | unit |
//! |------------------|---------|------|
//! | `gravity`        | 9.81    | m/s² |
//! | `cfl`            | 0.35    | -    |
//! | `h_dry`          | 0.01    | m    |
//! | `epsilon`        | 1e-6    | -    |
//! | `dt_fallback`    | 1.0     | s    |
//! | `dt_max`         | none    | s    |
//! | `output_interval`| 60.0    | s    |

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SolverError;
use crate::source::FrictionScheme;

/// Numerical parameters of the finite-volume scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Gravitational acceleration [m/s²]
    #[serde(default = "default_gravity")]
    pub gravity: f64,

    /// Courant number, must lie in (0, 1)
    #[serde(default = "default_cfl")]
    pub cfl: f64,

    /// Depth below which a cell is dry [m]
    #[serde(default = "default_h_dry")]
    pub h_dry: f64,

    /// Depth floor for wave speeds and speed threshold for friction
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,

    /// Step taken when no cell is wet or nothing moves [s]
    #[serde(default = "default_dt_fallback")]
    pub dt_fallback: f64,

    /// Optional upper bound on the CFL step [s]
    #[serde(default)]
    pub dt_max: Option<f64>,

    /// Time treatment of Manning friction
    #[serde(default)]
    pub friction: FrictionScheme,
}

fn default_gravity() -> f64 {
    9.81
}
fn default_cfl() -> f64 {
    0.35
}
fn default_h_dry() -> f64 {
    0.01
}
fn default_epsilon() -> f64 {
    1e-6
}
fn default_dt_fallback() -> f64 {
    1.0
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            gravity: default_gravity(),
            cfl: default_cfl(),
            h_dry: default_h_dry(),
            epsilon: default_epsilon(),
            dt_fallback: default_dt_fallback(),
            dt_max: None,
            friction: FrictionScheme::default(),
        }
    }
}

impl SolverConfig {
    /// Set the Courant number.
    pub fn with_cfl(mut self, cfl: f64) -> Self {
        self.cfl = cfl;
        self
    }

    /// Set the dry-cell depth threshold.
    pub fn with_h_dry(mut self, h_dry: f64) -> Self {
        self.h_dry = h_dry;
        self
    }

    /// Set gravitational acceleration.
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the dry-domain fallback step.
    pub fn with_dt_fallback(mut self, dt_fallback: f64) -> Self {
        self.dt_fallback = dt_fallback;
        self
    }

    /// Cap the CFL step at `dt_max`.
    pub fn with_dt_max(mut self, dt_max: f64) -> Self {
        self.dt_max = Some(dt_max);
        self
    }

    /// Set the friction time treatment.
    pub fn with_friction(mut self, friction: FrictionScheme) -> Self {
        self.friction = friction;
        self
    }

    /// Check every parameter against its admissible range.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.cfl > 0.0 && self.cfl < 1.0) {
            return Err(SolverError::config("cfl", self.cfl, "must lie in (0, 1)"));
        }
        positive("gravity", self.gravity)?;
        positive("h_dry", self.h_dry)?;
        positive("epsilon", self.epsilon)?;
        positive("dt_fallback", self.dt_fallback)?;
        if let Some(dt_max) = self.dt_max {
            positive("dt_max", dt_max)?;
        }
        Ok(())
    }
}

/// Full run configuration: scheme parameters plus run horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Numerical parameters
    #[serde(default)]
    pub solver: SolverConfig,

    /// End of the simulated period [s]
    pub t_end: f64,

    /// Interval between snapshots [s]
    #[serde(default = "default_output_interval")]
    pub output_interval: f64,

    /// Abort after this many steps (None = unbounded)
    #[serde(default)]
    pub max_steps: Option<usize>,
}

fn default_output_interval() -> f64 {
    60.0
}

impl SimulationConfig {
    /// Configuration running to `t_end` with default solver parameters.
    pub fn new(t_end: f64) -> Self {
        Self {
            solver: SolverConfig::default(),
            t_end,
            output_interval: default_output_interval(),
            max_steps: None,
        }
    }

    /// Replace the solver parameters.
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Set the snapshot interval.
    pub fn with_output_interval(mut self, interval: f64) -> Self {
        self.output_interval = interval;
        self
    }

    /// Set the maximum number of steps.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, SolverError> {
        let config: SimulationConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SolverError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Check every parameter against its admissible range.
    pub fn validate(&self) -> Result<(), SolverError> {
        self.solver.validate()?;
        if !(self.t_end >= 0.0 && self.t_end.is_finite()) {
            return Err(SolverError::config(
                "t_end",
                self.t_end,
                "must be finite and non-negative",
            ));
        }
        positive("output_interval", self.output_interval)?;
        Ok(())
    }
}

fn positive(key: &str, value: f64) -> Result<(), SolverError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SolverError::config(key, value, "must be positive and finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SolverConfig::default();
        assert_eq!(config.cfl, 0.35);
        assert_eq!(config.h_dry, 0.01);
        assert_eq!(config.friction, FrictionScheme::Explicit);
        assert_eq!(config.dt_fallback, 1.0);
        assert_eq!(config.dt_max, None);
        assert!(config.validate().is_ok());
        assert!(SimulationConfig::new(100.0).validate().is_ok());
    }

    #[test]
    fn test_cfl_of_one_rejected() {
        let err = SolverConfig::default().with_cfl(1.0).validate().unwrap_err();
        assert!(matches!(err, SolverError::Configuration { ref key, .. } if key == "cfl"));
        assert!(SolverConfig::default().with_cfl(0.0).validate().is_err());
        assert!(SolverConfig::default().with_cfl(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_non_positive_threshold_rejected() {
        assert!(SolverConfig::default().with_h_dry(0.0).validate().is_err());
        assert!(SolverConfig::default().with_dt_max(-1.0).validate().is_err());
        assert!(SolverConfig::default().with_dt_fallback(0.0).validate().is_err());
        assert!(
            SimulationConfig::new(10.0)
                .with_output_interval(0.0)
                .validate()
                .is_err()
        );
        assert!(SimulationConfig::new(-1.0).validate().is_err());
    }

    #[test]
    fn test_json_with_partial_fields() {
        let json = r#"{
            "t_end": 3600.0,
            "output_interval": 300.0,
            "solver": { "cfl": 0.3, "friction": "semi_implicit", "dt_max": 5.0 }
        }"#;
        let config = SimulationConfig::from_json_str(json).unwrap();
        assert_eq!(config.t_end, 3600.0);
        assert_eq!(config.solver.cfl, 0.3);
        assert_eq!(config.solver.h_dry, 0.01);
        assert_eq!(config.solver.friction, FrictionScheme::SemiImplicit);
        assert_eq!(config.solver.dt_max, Some(5.0));
        assert_eq!(config.solver.dt_fallback, 1.0);
        assert!(config.max_steps.is_none());
    }

    #[test]
    fn test_json_invalid_value_rejected() {
        let json = r#"{ "t_end": 10.0, "solver": { "cfl": 1.5 } }"#;
        assert!(matches!(
            SimulationConfig::from_json_str(json),
            Err(SolverError::Configuration { .. })
        ));
        let err = SimulationConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, SolverError::Parse(ref e) if e.is_syntax()));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SimulationConfig::new(50.0).with_max_steps(10);
        let text = serde_json::to_string(&config).unwrap();
        let back = SimulationConfig::from_json_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
