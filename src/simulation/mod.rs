//! Simulation driver.
//!
//! [`Simulation`] owns the grid, topography and field, advances them with a
//! [`TimeStepper`](crate::time::TimeStepper) and keeps the list of
//! [`Snapshot`]s and collected warnings.
//!
//! # Example
//! ```ignore
//! let mut sim = Simulation::new(grid, topography, initial, boundaries, config)?;
//! let summary = sim.run()?;
//! for snap in sim.snapshots() {
//!     println!("t = {:.1} s, volume = {:.3} m³", snap.time, snap.total_volume(sim.grid()));
//! }
//! ```

mod clock;
mod runner;
mod snapshot;

pub use clock::SimulationClock;
pub use runner::{Simulation, SimulationSummary};
pub use snapshot::Snapshot;
