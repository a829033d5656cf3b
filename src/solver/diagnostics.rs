//! Field diagnostics.
//!
//! Scalar summaries of a [`FieldState`] used for run logging, snapshot
//! metadata and conservation checks.

use serde::Serialize;

use crate::mesh::Grid;
use crate::solver::FieldState;

/// Diagnostic quantities of a field at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FieldDiagnostics {
    /// Total water volume `Σ h dx dy` [m³]
    pub total_volume: f64,
    /// Minimum depth [m]
    pub min_depth: f64,
    /// Maximum depth [m]
    pub max_depth: f64,
    /// Maximum velocity magnitude [m/s]
    pub max_speed: f64,
    /// Maximum Froude number over wet cells
    pub max_froude: f64,
    /// Number of cells with `h >= h_dry`
    pub wet_cells: usize,
}

impl FieldDiagnostics {
    /// Compute all diagnostics of `state`.
    pub fn compute(grid: &Grid, state: &FieldState, g: f64, h_dry: f64) -> Self {
        let mut min_depth = f64::INFINITY;
        let mut max_depth = f64::NEG_INFINITY;
        let mut max_speed = 0.0_f64;
        let mut max_froude = 0.0_f64;
        let mut wet_cells = 0;

        for k in 0..state.len() {
            let p = state.primitive(k);
            min_depth = min_depth.min(p.h);
            max_depth = max_depth.max(p.h);
            max_speed = max_speed.max(p.speed());
            max_froude = max_froude.max(p.froude_number(g, h_dry));
            if p.h >= h_dry {
                wet_cells += 1;
            }
        }

        Self {
            total_volume: state.total_volume(grid),
            min_depth,
            max_depth,
            max_speed,
            max_froude,
            wet_cells,
        }
    }

    /// True if any wet cell is supercritical (Fr > 1).
    pub fn is_supercritical(&self) -> bool {
        self.max_froude > 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_of_mixed_field() {
        let grid = Grid::new(30.0, 30.0, 3, 3).unwrap();
        let state = FieldState::from_fn(&grid, 0.01, |x, y| {
            if x < 10.0 {
                (0.0, 0.0, 0.0)
            } else if y < 10.0 {
                (1.0, 3.0, 4.0)
            } else {
                (2.0, 0.0, 0.0)
            }
        })
        .unwrap();

        let diag = FieldDiagnostics::compute(&grid, &state, 9.81, 0.01);
        assert_eq!(diag.wet_cells, 6);
        assert_eq!(diag.min_depth, 0.0);
        assert_eq!(diag.max_depth, 2.0);
        assert!((diag.max_speed - 5.0).abs() < 1e-12);
        assert!((diag.max_froude - 5.0 / 9.81_f64.sqrt()).abs() < 1e-12);
        assert!(diag.is_supercritical());
        assert!((diag.total_volume - (2.0 * 1.0 + 4.0 * 2.0) * 100.0).abs() < 1e-9);
    }
}
