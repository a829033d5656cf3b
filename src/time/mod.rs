//! Time integration.
//!
//! - [`compute_dt`]: global CFL reduction with dry-domain fallback
//! - [`TimeStepper`]: double-buffered forward Euler step

mod cfl;
mod stepper;

pub use cfl::{DtEstimate, compute_dt};
pub use stepper::{StepInfo, TimeStepper};
