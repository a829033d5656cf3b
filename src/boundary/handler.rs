//! Per-edge boundary dispatch.

use crate::boundary::{
    BoundaryKind, Discharge, EdgeCondition, EdgeContext, Inflow, Outflow, Wall,
};
use crate::error::{SimulationWarning, SolverError};
use crate::mesh::Grid;
use crate::solver::FieldState;
use crate::types::{Edge, SideBoundaries};

/// Applies the configured condition on every domain edge.
///
/// [`BoundaryKind`]s are resolved once, at construction, into boxed
/// [`EdgeCondition`]s. Inflow and outflow edges are applied first and walls
/// last, so the no-flow constraint holds on corner cells shared by a wall.
pub struct BoundaryHandler {
    kinds: SideBoundaries<BoundaryKind>,
    /// Edge conditions in application order
    conditions: Vec<(Edge, Box<dyn EdgeCondition>)>,
}

impl BoundaryHandler {
    /// Resolve a boundary configuration.
    ///
    /// # Errors
    ///
    /// [`SolverError::Configuration`] if a constant discharge is not finite
    /// or a prescribed inflow depth is below `h_dry`.
    pub fn new(kinds: SideBoundaries<BoundaryKind>, h_dry: f64) -> Result<Self, SolverError> {
        for (edge, kind) in kinds.iter() {
            if let BoundaryKind::Inflow(spec) = kind {
                if let Discharge::Constant(q) = spec.discharge {
                    if !q.is_finite() {
                        return Err(SolverError::config(
                            &format!("{}.discharge", edge),
                            q,
                            "must be finite",
                        ));
                    }
                }
                if let Some(depth) = spec.prescribed_depth {
                    if !(depth >= h_dry && depth.is_finite()) {
                        return Err(SolverError::config(
                            &format!("{}.prescribed_depth", edge),
                            depth,
                            "must be finite and at least h_dry",
                        ));
                    }
                }
            }
        }

        let mut open = Vec::new();
        let mut walls = Vec::new();
        for (edge, kind) in kinds.iter() {
            let condition: Box<dyn EdgeCondition> = match kind {
                BoundaryKind::Inflow(spec) => Box::new(Inflow::new(spec.clone())),
                BoundaryKind::Outflow => Box::new(Outflow),
                BoundaryKind::Wall => Box::new(Wall),
            };
            if condition.is_wall() {
                walls.push((edge, condition));
            } else {
                open.push((edge, condition));
            }
        }
        open.extend(walls);

        Ok(Self {
            kinds,
            conditions: open,
        })
    }

    /// Walls on all four edges.
    pub fn closed() -> Self {
        Self {
            kinds: SideBoundaries::uniform(BoundaryKind::Wall),
            conditions: Edge::ALL
                .iter()
                .map(|&edge| (edge, Box::new(Wall) as Box<dyn EdgeCondition>))
                .collect(),
        }
    }

    /// Configured kinds.
    pub fn kinds(&self) -> &SideBoundaries<BoundaryKind> {
        &self.kinds
    }

    /// True if `edge` is a wall.
    pub fn is_wall(&self, edge: Edge) -> bool {
        self.kinds.get(edge).is_wall()
    }

    /// Wall flags per edge, used by the flux sweep.
    pub fn walls(&self) -> SideBoundaries<bool> {
        SideBoundaries::new(
            self.is_wall(Edge::South),
            self.is_wall(Edge::East),
            self.is_wall(Edge::North),
            self.is_wall(Edge::West),
        )
    }

    /// Edges in application order.
    pub fn application_order(&self) -> Vec<Edge> {
        self.conditions.iter().map(|(edge, _)| *edge).collect()
    }

    /// Apply every edge condition to `state` at `time`.
    ///
    /// Warnings are logged and appended to `warnings`.
    pub fn apply(
        &self,
        grid: &Grid,
        state: &mut FieldState,
        time: f64,
        h_dry: f64,
        warnings: &mut Vec<SimulationWarning>,
    ) {
        for (edge, condition) in &self.conditions {
            let ctx = EdgeContext {
                grid,
                edge: *edge,
                time,
                h_dry,
            };
            if let Some(warning) = condition.apply(&ctx, state) {
                log::warn!("{}", warning);
                warnings.push(warning);
            }
        }
    }
}

impl std::fmt::Debug for BoundaryHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundaryHandler")
            .field("kinds", &self.kinds.to_string())
            .field("order", &self.application_order())
            .finish()
    }
}
