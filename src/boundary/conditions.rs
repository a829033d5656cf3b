//! Edge conditions applied to the border ring after each interior update.
//!
//! Border cells are not advanced by the interior stencil; their depth and
//! velocity are set here. Each condition acts on one edge of the domain.

use crate::boundary::{Discharge, InflowSpec};
use crate::error::SimulationWarning;
use crate::mesh::Grid;
use crate::solver::FieldState;
use crate::types::Edge;

/// What an edge condition sees when applied.
#[derive(Clone, Copy, Debug)]
pub struct EdgeContext<'a> {
    /// Grid geometry
    pub grid: &'a Grid,
    /// Edge being updated
    pub edge: Edge,
    /// Time the updated state belongs to
    pub time: f64,
    /// Dry-cell depth threshold
    pub h_dry: f64,
}

/// A boundary condition on one domain edge.
pub trait EdgeCondition: Send + Sync {
    /// Update the border cells of `ctx.edge` in place.
    ///
    /// Returns a warning when the condition could not be applied.
    fn apply(&self, ctx: &EdgeContext<'_>, state: &mut FieldState) -> Option<SimulationWarning>;

    /// Name for logging.
    fn name(&self) -> &'static str;

    /// True if no mass crosses this edge.
    fn is_wall(&self) -> bool {
        false
    }
}

/// No-flow wall: the velocity normal to the edge is zero.
///
/// Depth and tangential velocity are left as they are.
#[derive(Clone, Copy, Debug, Default)]
pub struct Wall;

impl EdgeCondition for Wall {
    fn apply(&self, ctx: &EdgeContext<'_>, state: &mut FieldState) -> Option<SimulationWarning> {
        for (border, _) in ctx.grid.edge_cells(ctx.edge) {
            let k = border.flat(ctx.grid.ny());
            if ctx.edge.is_x_normal() {
                state.set_u(k, 0.0);
            } else {
                state.set_v(k, 0.0);
            }
        }
        None
    }

    fn name(&self) -> &'static str {
        "wall"
    }

    fn is_wall(&self) -> bool {
        true
    }
}

/// Zero-gradient outflow: border cells copy their inward neighbour.
#[derive(Clone, Copy, Debug, Default)]
pub struct Outflow;

impl EdgeCondition for Outflow {
    fn apply(&self, ctx: &EdgeContext<'_>, state: &mut FieldState) -> Option<SimulationWarning> {
        let ny = ctx.grid.ny();
        for (border, inner) in ctx.grid.edge_cells(ctx.edge) {
            let p = state.primitive(inner.flat(ny));
            state.set_primitive(border.flat(ny), p);
        }
        None
    }

    fn name(&self) -> &'static str {
        "outflow"
    }
}

/// Discharge inflow spread evenly over the wet cells of the edge.
///
/// Acts on the edge cells next to the interior; the two corner cells
/// exchange no flux with the interior and are skipped. Each wet cell gets
/// the unit-width discharge `q = Q / (n_wet * width)` and the inward normal
/// velocity `q / h`.
#[derive(Clone, Debug)]
pub struct Inflow {
    discharge: Discharge,
    prescribed_depth: Option<f64>,
}

impl Inflow {
    /// Build from an inflow specification.
    pub fn new(spec: InflowSpec) -> Self {
        Self {
            discharge: spec.discharge,
            prescribed_depth: spec.prescribed_depth,
        }
    }
}

impl EdgeCondition for Inflow {
    fn apply(&self, ctx: &EdgeContext<'_>, state: &mut FieldState) -> Option<SimulationWarning> {
        let grid = ctx.grid;
        let ny = grid.ny();
        let edge_cells = grid.edge_cells(ctx.edge);
        let inner_len = edge_cells.len().saturating_sub(2);
        let cells: Vec<usize> = edge_cells
            .iter()
            .skip(1)
            .take(inner_len)
            .map(|(border, _)| border.flat(ny))
            .collect();

        if let Some(depth) = self.prescribed_depth {
            for &k in &cells {
                state.set_depth(k, depth);
            }
        }

        let wet: Vec<usize> = cells
            .into_iter()
            .filter(|&k| state.h()[k] >= ctx.h_dry)
            .collect();
        if wet.is_empty() {
            return Some(SimulationWarning::InflowUnapplied {
                edge: ctx.edge,
                time: ctx.time,
            });
        }

        let q = self.discharge.at(ctx.time) / (wet.len() as f64 * grid.edge_cell_width(ctx.edge));
        let sign = ctx.edge.inward_sign();
        for k in wet {
            let velocity = sign * q / state.h()[k];
            if ctx.edge.is_x_normal() {
                state.set_u(k, velocity);
            } else {
                state.set_v(k, velocity);
            }
        }
        None
    }

    fn name(&self) -> &'static str {
        "inflow"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Primitive;

    const H_DRY: f64 = 0.01;

    fn ctx(grid: &Grid, edge: Edge) -> EdgeContext<'_> {
        EdgeContext {
            grid,
            edge,
            time: 1.0,
            h_dry: H_DRY,
        }
    }

    #[test]
    fn test_wall_zeroes_normal_velocity_only() {
        let grid = Grid::new(30.0, 30.0, 3, 3).unwrap();
        let mut state = FieldState::uniform(&grid, 1.0, 0.5, 0.7, H_DRY).unwrap();
        assert!(Wall.apply(&ctx(&grid, Edge::East), &mut state).is_none());

        for j in 0..3 {
            assert_eq!(state.primitive(grid.index(2, j)), Primitive::new(1.0, 0.0, 0.7));
        }
        assert_eq!(state.primitive(grid.index(1, 1)), Primitive::new(1.0, 0.5, 0.7));
    }

    #[test]
    fn test_outflow_copies_neighbour() {
        let grid = Grid::new(40.0, 30.0, 4, 3).unwrap();
        let mut state = FieldState::from_fn(&grid, H_DRY, |x, y| (x / 10.0, y, 1.0)).unwrap();
        Outflow.apply(&ctx(&grid, Edge::East), &mut state);
        for j in 0..3 {
            assert_eq!(state.primitive(grid.index(3, j)), state.primitive(grid.index(2, j)));
        }
    }

    #[test]
    fn test_inflow_distributes_discharge() {
        // 5 x 4 grid, dx = dy = 10: west edge has 2 non-corner cells
        let grid = Grid::new(50.0, 40.0, 5, 4).unwrap();
        let mut state = FieldState::uniform(&grid, 0.5, 0.0, 0.0, H_DRY).unwrap();
        let inflow = Inflow::new(InflowSpec::new(20.0));
        assert!(inflow.apply(&ctx(&grid, Edge::West), &mut state).is_none());

        // q = 20 / (2 * 10) = 1, u = q / h = 2
        assert_eq!(state.u()[grid.index(0, 1)], 2.0);
        assert_eq!(state.u()[grid.index(0, 2)], 2.0);
        assert_eq!(state.u()[grid.index(0, 0)], 0.0);
        assert_eq!(state.u()[grid.index(0, 3)], 0.0);

        // Discharge through the edge matches Q
        let through: f64 = (1..3)
            .map(|j| {
                let k = grid.index(0, j);
                state.h()[k] * state.u()[k] * grid.dy()
            })
            .sum();
        assert!((through - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_inflow_points_into_domain_on_north_edge() {
        let grid = Grid::new(40.0, 40.0, 4, 4).unwrap();
        let mut state = FieldState::uniform(&grid, 1.0, 0.0, 0.0, H_DRY).unwrap();
        Inflow::new(InflowSpec::new(10.0)).apply(&ctx(&grid, Edge::North), &mut state);
        assert!(state.v()[grid.index(1, 3)] < 0.0);
        assert!((state.v()[grid.index(2, 3)] + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_inflow_on_dry_edge_warns() {
        let grid = Grid::new(40.0, 40.0, 4, 4).unwrap();
        let mut state = FieldState::uniform(&grid, 0.0, 0.0, 0.0, H_DRY).unwrap();
        let warning = Inflow::new(InflowSpec::new(50.0)).apply(&ctx(&grid, Edge::West), &mut state);
        assert_eq!(
            warning,
            Some(SimulationWarning::InflowUnapplied {
                edge: Edge::West,
                time: 1.0
            })
        );
        assert!(state.u().iter().all(|&u| u == 0.0));
    }

    #[test]
    fn test_prescribed_depth_wets_edge() {
        let grid = Grid::new(40.0, 40.0, 4, 4).unwrap();
        let mut state = FieldState::uniform(&grid, 0.0, 0.0, 0.0, H_DRY).unwrap();
        let inflow = Inflow::new(InflowSpec::with_depth(40.0, 0.5));
        assert!(inflow.apply(&ctx(&grid, Edge::West), &mut state).is_none());
        let k = grid.index(0, 2);
        assert_eq!(state.h()[k], 0.5);
        // q = 40 / (2 * 10) = 2, u = 4
        assert!((state.u()[k] - 4.0).abs() < 1e-12);
        assert_eq!(state.h()[grid.index(0, 0)], 0.0);
    }
}
