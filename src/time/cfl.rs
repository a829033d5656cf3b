//! CFL time step selection.
//!
//! ```text
//! c     = sqrt(g max(h, epsilon))
//! s_x   = max(|u| + c),  s_y = max(|v| + c)
//! dt    = CFL min(dx / s_x, dy / s_y)
//! ```
//!
//! The maximum is taken over every cell of the grid, so all cells advance
//! with the same step. An optional `dt_max` caps the result. When no cell
//! is wet, or no signal moves, the step falls back to `dt_fallback`.

use crate::config::SolverConfig;
use crate::mesh::Grid;
use crate::solver::FieldState;

/// Result of the global wave speed reduction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DtEstimate {
    /// Stable time step [s]
    pub dt: f64,
    /// Maximum x signal speed `|u| + c` [m/s]
    pub max_speed_x: f64,
    /// Maximum y signal speed `|v| + c` [m/s]
    pub max_speed_y: f64,
    /// Cells with `h >= h_dry`
    pub wet_cells: usize,
    /// True if `dt` is the dry-domain fallback
    pub dry_fallback: bool,
}

/// Compute the CFL-limited time step of `state`.
pub fn compute_dt(grid: &Grid, state: &FieldState, config: &SolverConfig) -> DtEstimate {
    let g = config.gravity;
    let mut max_speed_x: f64 = 0.0;
    let mut max_speed_y: f64 = 0.0;
    let mut wet_cells = 0;

    for ((&h, &u), &v) in state.h().iter().zip(state.u()).zip(state.v()) {
        if h >= config.h_dry {
            wet_cells += 1;
        }
        let c = (g * h.max(config.epsilon)).sqrt();
        max_speed_x = max_speed_x.max(u.abs() + c);
        max_speed_y = max_speed_y.max(v.abs() + c);
    }

    let no_motion = max_speed_x <= config.epsilon && max_speed_y <= config.epsilon;
    if wet_cells == 0 || no_motion {
        return DtEstimate {
            dt: config.dt_fallback,
            max_speed_x,
            max_speed_y,
            wet_cells,
            dry_fallback: true,
        };
    }

    let dt_x = grid.dx() / max_speed_x;
    let dt_y = grid.dy() / max_speed_y;
    let dt = config.cfl * dt_x.min(dt_y);
    DtEstimate {
        dt: config.dt_max.map_or(dt, |cap| dt.min(cap)),
        max_speed_x,
        max_speed_y,
        wet_cells,
        dry_fallback: false,
    }
}
