//! Simulation driver.
//!
//! Loops the [`TimeStepper`] from `t = 0` to `t_end`, landing exactly on
//! every output time, and records a [`Snapshot`] at each one.

use serde::Serialize;

use crate::boundary::{BoundaryHandler, BoundaryKind};
use crate::config::SimulationConfig;
use crate::error::{SimulationWarning, SolverError};
use crate::mesh::{Grid, Topography};
use crate::simulation::{SimulationClock, Snapshot};
use crate::solver::{FieldDiagnostics, FieldState};
use crate::time::{StepInfo, TimeStepper};
use crate::types::SideBoundaries;

/// Statistics of a completed run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationSummary {
    /// Final simulated time [s]
    pub final_time: f64,
    /// Accepted steps
    pub n_steps: usize,
    /// Smallest step taken [s]
    pub dt_min: f64,
    /// Largest step taken [s]
    pub dt_max: f64,
    /// Snapshots recorded
    pub n_snapshots: usize,
    /// Warnings collected
    pub n_warnings: usize,
    /// Wall-clock duration of `run` [s]
    pub wall_time: f64,
}

/// Shallow water simulation on a rectangular grid.
///
/// # Example
///
/// ```
/// use floodplain_rs::boundary::BoundaryKind;
/// use floodplain_rs::config::SimulationConfig;
/// use floodplain_rs::mesh::{Grid, Topography};
/// use floodplain_rs::simulation::Simulation;
/// use floodplain_rs::solver::FieldState;
/// use floodplain_rs::types::SideBoundaries;
///
/// let grid = Grid::new(100.0, 100.0, 10, 10).unwrap();
/// let topography = Topography::flat(&grid, 0.0, 0.03).unwrap();
/// let initial = FieldState::uniform(&grid, 1.0, 0.0, 0.0, 0.01).unwrap();
/// let config = SimulationConfig::new(10.0).with_output_interval(5.0);
///
/// let mut sim = Simulation::new(
///     grid,
///     topography,
///     initial,
///     SideBoundaries::uniform(BoundaryKind::Wall),
///     config,
/// )
/// .unwrap();
/// let summary = sim.run().unwrap();
/// assert_eq!(summary.final_time, 10.0);
/// assert_eq!(sim.snapshots().len(), 3);
/// ```
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    topography: Topography,
    state: FieldState,
    stepper: TimeStepper,
    config: SimulationConfig,
    clock: SimulationClock,
    snapshots: Vec<Snapshot>,
    warnings: Vec<SimulationWarning>,
    /// Index of the next output time (`index * output_interval`)
    next_output: usize,
    dt_min_used: f64,
    dt_max_used: f64,
}

impl Simulation {
    /// Validate inputs and record the initial snapshot.
    ///
    /// # Errors
    ///
    /// [`SolverError::Configuration`] for invalid run parameters, arrays
    /// that do not match the grid, or invalid inflow settings.
    pub fn new(
        grid: Grid,
        topography: Topography,
        initial: FieldState,
        boundaries: SideBoundaries<BoundaryKind>,
        config: SimulationConfig,
    ) -> Result<Self, SolverError> {
        config.validate()?;
        let n = grid.n_cells();
        if topography.len() != n {
            return Err(SolverError::config(
                "topography",
                topography.len(),
                &format!("expected {} cells", n),
            ));
        }
        if initial.len() != n {
            return Err(SolverError::config(
                "initial_state",
                initial.len(),
                &format!("expected {} cells", n),
            ));
        }

        let h_dry = config.solver.h_dry;
        let handler = BoundaryHandler::new(boundaries, h_dry)?;

        let mut state = initial;
        state.reconstruct(h_dry);

        let stepper = TimeStepper::new(&grid, config.solver.clone(), handler, &state);
        let clock = SimulationClock::new();
        let snapshots = vec![Snapshot::capture(&state, &clock)];

        Ok(Self {
            grid,
            topography,
            state,
            stepper,
            config,
            clock,
            snapshots,
            warnings: Vec::new(),
            next_output: 1,
            dt_min_used: f64::INFINITY,
            dt_max_used: 0.0,
        })
    }

    /// True once the clock has reached `t_end`.
    pub fn is_finished(&self) -> bool {
        self.clock.time() >= self.config.t_end
    }

    fn next_output_time(&self) -> f64 {
        self.next_output as f64 * self.config.output_interval
    }

    /// Advance one step, recording snapshots as output times are reached.
    ///
    /// Returns `Ok(None)` once the run is finished.
    ///
    /// # Errors
    ///
    /// [`SolverError::StepLimitExceeded`] if the configured step limit is
    /// reached, [`SolverError::NumericalInstability`] if the step produced
    /// non-finite values. After an instability the last valid state is kept
    /// and captured as a snapshot.
    pub fn step(&mut self) -> Result<Option<StepInfo>, SolverError> {
        if self.is_finished() {
            return Ok(None);
        }
        if let Some(max_steps) = self.config.max_steps
            && self.clock.steps() >= max_steps
        {
            return Err(SolverError::StepLimitExceeded {
                max_steps,
                time: self.clock.time(),
            });
        }

        let t_limit = self.config.t_end.min(self.next_output_time());
        let result = self.stepper.step(
            &self.grid,
            &self.topography,
            &mut self.state,
            &mut self.clock,
            t_limit,
            &mut self.warnings,
        );

        let info = match result {
            Ok(info) => info,
            Err(err) => {
                log::error!("{}", err);
                self.capture_if_new();
                return Err(err);
            }
        };

        self.dt_min_used = self.dt_min_used.min(info.dt);
        self.dt_max_used = self.dt_max_used.max(info.dt);

        let t = self.clock.time();
        if t >= self.next_output_time() {
            self.next_output += 1;
            self.capture_if_new();
            self.log_output();
        }
        if self.is_finished() {
            self.capture_if_new();
        }

        Ok(Some(info))
    }

    /// Run to `t_end`.
    pub fn run(&mut self) -> Result<SimulationSummary, SolverError> {
        let start = std::time::Instant::now();
        log::info!(
            "starting run: {}x{} cells, t_end = {} s, boundaries {}",
            self.grid.nx(),
            self.grid.ny(),
            self.config.t_end,
            self.stepper.boundaries().kinds()
        );

        while self.step()?.is_some() {}

        let summary = SimulationSummary {
            final_time: self.clock.time(),
            n_steps: self.clock.steps(),
            dt_min: self.dt_min_used,
            dt_max: self.dt_max_used,
            n_snapshots: self.snapshots.len(),
            n_warnings: self.warnings.len(),
            wall_time: start.elapsed().as_secs_f64(),
        };
        log::info!(
            "run finished: t = {} s after {} steps ({} warnings, {:.3} s wall)",
            summary.final_time,
            summary.n_steps,
            summary.n_warnings,
            summary.wall_time
        );
        Ok(summary)
    }

    fn capture_if_new(&mut self) {
        let t = self.clock.time();
        if self.snapshots.last().is_none_or(|s| s.time < t) {
            self.snapshots.push(Snapshot::capture(&self.state, &self.clock));
        }
    }

    fn log_output(&self) {
        if log::log_enabled!(log::Level::Debug) {
            let diag = self.diagnostics();
            log::debug!(
                "t = {:.3} s, step {}: volume = {:.6e} m³, max h = {:.4} m, max |u| = {:.4} m/s, wet = {}",
                self.clock.time(),
                self.clock.steps(),
                diag.total_volume,
                diag.max_depth,
                diag.max_speed,
                diag.wet_cells
            );
        }
    }

    /// Snapshots recorded so far, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Take ownership of the recorded snapshots.
    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }

    /// Warnings collected so far.
    pub fn warnings(&self) -> &[SimulationWarning] {
        &self.warnings
    }

    /// Current field.
    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Grid geometry.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Bed description.
    pub fn topography(&self) -> &Topography {
        &self.topography
    }

    /// Simulated time and step count.
    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Run configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Diagnostics of the current field.
    pub fn diagnostics(&self) -> FieldDiagnostics {
        FieldDiagnostics::compute(
            &self.grid,
            &self.state,
            self.config.solver.gravity,
            self.config.solver.h_dry,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basin(config: SimulationConfig) -> Result<Simulation, SolverError> {
        let grid = Grid::new(100.0, 100.0, 10, 10)?;
        let topography = Topography::flat(&grid, 0.0, 0.03)?;
        let initial = FieldState::uniform(&grid, 1.0, 0.0, 0.0, 0.01)?;
        Simulation::new(
            grid,
            topography,
            initial,
            SideBoundaries::uniform(BoundaryKind::Wall),
            config,
        )
    }

    #[test]
    fn test_snapshots_at_output_times() {
        let mut sim = basin(SimulationConfig::new(25.0).with_output_interval(10.0)).unwrap();
        let summary = sim.run().unwrap();

        let times: Vec<f64> = sim.snapshots().iter().map(|s| s.time).collect();
        assert_eq!(times, vec![0.0, 10.0, 20.0, 25.0]);
        assert_eq!(summary.final_time, 25.0);
        assert_eq!(summary.n_snapshots, 4);
        // Uncapped CFL step at 1 m depth on 10 m cells
        assert!((summary.dt_max - 0.35 * 10.0 / 9.81_f64.sqrt()).abs() < 1e-12);
        assert!(summary.dt_min > 0.0);
        assert!(sim.step().unwrap().is_none());

        let snapshots = sim.into_snapshots();
        assert_eq!(snapshots.len(), 4);
        assert_eq!(snapshots[3].time, 25.0);
    }

    #[test]
    fn test_zero_length_run() {
        let mut sim = basin(SimulationConfig::new(0.0)).unwrap();
        let summary = sim.run().unwrap();
        assert_eq!(summary.n_steps, 0);
        assert_eq!(sim.snapshots().len(), 1);
    }

    #[test]
    fn test_step_limit() {
        let mut sim = basin(SimulationConfig::new(100.0).with_max_steps(3)).unwrap();
        match sim.run() {
            Err(SolverError::StepLimitExceeded { max_steps, time }) => {
                assert_eq!(max_steps, 3);
                assert!(time > 0.0 && time < 100.0);
            }
            other => panic!("expected step limit, got {:?}", other),
        }
        assert_eq!(sim.clock().steps(), 3);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulationConfig::new(10.0)
            .with_solver(crate::config::SolverConfig::default().with_cfl(1.0));
        assert!(matches!(basin(config), Err(SolverError::Configuration { .. })));
    }

    #[test]
    fn test_mismatched_arrays_rejected() {
        let grid = Grid::new(100.0, 100.0, 10, 10).unwrap();
        let other = Grid::new(100.0, 100.0, 5, 5).unwrap();
        let result = Simulation::new(
            grid,
            Topography::flat(&other, 0.0, 0.03).unwrap(),
            FieldState::uniform(&other, 1.0, 0.0, 0.0, 0.01).unwrap(),
            SideBoundaries::uniform(BoundaryKind::Wall),
            SimulationConfig::new(1.0),
        );
        assert!(matches!(
            result,
            Err(SolverError::Configuration { ref key, .. }) if key == "topography"
        ));
    }
}
