//! Stored copies of the field at output times.

use serde::Serialize;

use crate::mesh::Grid;
use crate::simulation::SimulationClock;
use crate::solver::FieldState;

/// Immutable copy of `(t, h, u, v)`.
///
/// Arrays are flat in [`Grid::index`] order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    /// Simulated time [s]
    pub time: f64,
    /// Accepted steps up to this snapshot
    pub step: usize,
    /// Depth [m]
    pub h: Vec<f64>,
    /// x-velocity [m/s]
    pub u: Vec<f64>,
    /// y-velocity [m/s]
    pub v: Vec<f64>,
}

impl Snapshot {
    /// Copy `state` at the clock's current time.
    pub fn capture(state: &FieldState, clock: &SimulationClock) -> Self {
        Self {
            time: clock.time(),
            step: clock.steps(),
            h: state.h().to_vec(),
            u: state.u().to_vec(),
            v: state.v().to_vec(),
        }
    }

    /// Total water volume [m³].
    pub fn total_volume(&self, grid: &Grid) -> f64 {
        self.h.iter().sum::<f64>() * grid.cell_area()
    }

    /// Depth of cell `(i, j)`.
    pub fn depth_at(&self, grid: &Grid, i: usize, j: usize) -> f64 {
        self.h[grid.index(i, j)]
    }
}
