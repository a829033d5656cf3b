//! # floodplain-rs
//!
//! A finite-volume solver for the 2D shallow water equations on a uniform
//! rectangular grid, aimed at floodplain inundation.
//!
//! This crate provides:
//! - Grid geometry and bed description (elevation, Manning roughness)
//! - Rusanov (local Lax-Friedrichs) fluxes with wall reflection
//! - Bed-slope and Manning friction source terms
//! - Inflow hydrographs, free outflow and wall boundaries
//! - CFL-limited forward Euler stepping with wet/dry handling
//! - A simulation driver recording snapshots at fixed output times
//!
//! # Example
//!
//! ```
//! use floodplain_rs::{
//!     BoundaryKind, FieldState, Grid, SideBoundaries, Simulation, SimulationConfig, Topography,
//! };
//!
//! let grid = Grid::new(100.0, 100.0, 10, 10).unwrap();
//! let topography = Topography::flat(&grid, 0.0, 0.03).unwrap();
//! let initial = FieldState::uniform(&grid, 1.0, 0.0, 0.0, 0.01).unwrap();
//! let boundaries = SideBoundaries::new(
//!     BoundaryKind::Wall,
//!     BoundaryKind::Outflow,
//!     BoundaryKind::Wall,
//!     BoundaryKind::inflow(5.0),
//! );
//!
//! let config = SimulationConfig::new(30.0);
//! let mut sim = Simulation::new(grid, topography, initial, boundaries, config).unwrap();
//! sim.run().unwrap();
//! assert!(sim.state().h().iter().all(|&h| h >= 0.0));
//! ```

pub mod analysis;
pub mod boundary;
pub mod config;
pub mod error;
pub mod flux;
pub mod mesh;
pub mod simulation;
pub mod solver;
pub mod source;
pub mod time;
pub mod types;

// Re-export main types for convenience
pub use boundary::{BoundaryHandler, BoundaryKind, Discharge, InflowSpec};
pub use config::{SimulationConfig, SolverConfig};
pub use error::{SimulationWarning, SolverError};
pub use flux::{FaceFluxes, rusanov_flux_x, rusanov_flux_y};
pub use mesh::{Grid, Topography};
pub use simulation::{Simulation, SimulationClock, SimulationSummary, Snapshot};
pub use solver::{FieldDiagnostics, FieldState, Primitive, ShallowState};
pub use source::{FrictionScheme, SourceEngine};
pub use time::{StepInfo, TimeStepper, compute_dt};
pub use types::{CellIndex, Edge, SideBoundaries};
