//! Forward Euler finite-volume step.
//!
//! One step:
//! 1. CFL reduction over the whole grid, clamped to land on `t_limit`
//! 2. Face fluxes from the current state
//! 3. Interior update `U + dt (-(F_e - F_w)/dx - (G_n - G_s)/dy + S)` into
//!    a scratch buffer, with dry-cell reconstruction
//! 4. Boundary conditions on the scratch buffer
//! 5. Non-finite scan; only a clean buffer is swapped in
//!
//! The current state is read-only during the sweep, so no cell sees a value
//! already updated in the same step.

use crate::analysis::find_non_finite;
use crate::boundary::BoundaryHandler;
use crate::config::SolverConfig;
use crate::error::{SimulationWarning, SolverError};
use crate::flux::FaceFluxes;
use crate::mesh::{Grid, Topography};
use crate::simulation::SimulationClock;
use crate::solver::FieldState;
use crate::source::SourceEngine;
use crate::time::compute_dt;
use crate::types::SideBoundaries;

/// Summary of one accepted step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepInfo {
    /// Time step taken [s]
    pub dt: f64,
    /// Simulated time after the step [s]
    pub time: f64,
    /// Wet cells at the start of the step
    pub wet_cells: usize,
    /// True if the step used the dry-domain fallback
    pub dry_fallback: bool,
}

/// Advances a [`FieldState`] by CFL-limited explicit Euler steps.
///
/// Owns the scratch buffer and face storage, so stepping does not allocate.
#[derive(Debug)]
pub struct TimeStepper {
    config: SolverConfig,
    sources: SourceEngine,
    boundaries: BoundaryHandler,
    walls: SideBoundaries<bool>,
    faces: FaceFluxes,
    scratch: FieldState,
}

impl TimeStepper {
    /// Create a stepper for fields shaped like `template`.
    pub fn new(
        grid: &Grid,
        config: SolverConfig,
        boundaries: BoundaryHandler,
        template: &FieldState,
    ) -> Self {
        Self {
            sources: SourceEngine::new(&config),
            walls: boundaries.walls(),
            faces: FaceFluxes::new(grid),
            scratch: template.clone(),
            config,
            boundaries,
        }
    }

    /// Replace the source engine.
    pub fn with_sources(mut self, sources: SourceEngine) -> Self {
        self.sources = sources;
        self
    }

    /// Solver parameters.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Boundary handler.
    pub fn boundaries(&self) -> &BoundaryHandler {
        &self.boundaries
    }

    /// Advance `state` by one step, never past `t_limit`.
    ///
    /// On success the state and clock hold the new time level. On
    /// [`SolverError::NumericalInstability`] both are left at the last valid
    /// level. A `t_limit` not later than the clock is a
    /// [`SolverError::Configuration`] error.
    pub fn step(
        &mut self,
        grid: &Grid,
        topography: &Topography,
        state: &mut FieldState,
        clock: &mut SimulationClock,
        t_limit: f64,
        warnings: &mut Vec<SimulationWarning>,
    ) -> Result<StepInfo, SolverError> {
        let (g, h_dry) = (self.config.gravity, self.config.h_dry);
        let t0 = clock.time();
        if t_limit.is_nan() || t_limit <= t0 {
            return Err(SolverError::config(
                "t_limit",
                t_limit,
                "must be later than the current time",
            ));
        }

        let estimate = compute_dt(grid, state, &self.config);
        if estimate.dry_fallback {
            let warning = SimulationWarning::DryDomain { time: t0 };
            log::warn!("{}", warning);
            warnings.push(warning);
        }

        let remaining = t_limit - t0;
        let (dt, t_new) = if estimate.dt >= remaining {
            (remaining, t_limit)
        } else {
            (estimate.dt, (t0 + estimate.dt).min(t_limit))
        };

        self.faces.compute(grid, state, &self.walls, g, h_dry);

        self.scratch.copy_from(state);
        let (dx, dy) = (grid.dx(), grid.dy());
        for (i, j) in grid.interior_cells() {
            let k = grid.index(i, j);
            let rhs = self.faces.divergence(i, j, dx, dy)
                + self.sources.evaluate(grid, topography, state, i, j);
            let updated = state.conserved(k) + dt * rhs;
            let updated = self
                .sources
                .finish_update(updated, topography.manning(k), dt);
            self.scratch.set_conserved(k, updated, h_dry);
        }

        self.boundaries
            .apply(grid, &mut self.scratch, t_new, h_dry, warnings);

        if let Some((cell, field)) = find_non_finite(grid, &self.scratch) {
            return Err(SolverError::NumericalInstability {
                cell,
                time: t_new,
                field,
            });
        }

        std::mem::swap(state, &mut self.scratch);
        clock.advance_to(t_new);

        Ok(StepInfo {
            dt,
            time: t_new,
            wet_cells: estimate.wet_cells,
            dry_fallback: estimate.dry_fallback,
        })
    }
}
