//! Boundary configuration values.

use std::fmt;
use std::sync::Arc;

/// Total discharge entering through an inflow edge [m³/s].
#[derive(Clone)]
pub enum Discharge {
    /// Fixed discharge
    Constant(f64),
    /// Discharge as a function of simulated time
    Hydrograph(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl Discharge {
    /// Discharge from a function of time.
    pub fn hydrograph<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::Hydrograph(Arc::new(f))
    }

    /// Discharge at time `t`.
    #[inline]
    pub fn at(&self, t: f64) -> f64 {
        match self {
            Self::Constant(q) => *q,
            Self::Hydrograph(f) => f(t),
        }
    }
}

impl fmt::Debug for Discharge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(q) => f.debug_tuple("Constant").field(q).finish(),
            Self::Hydrograph(_) => f.write_str("Hydrograph(..)"),
        }
    }
}

impl From<f64> for Discharge {
    fn from(q: f64) -> Self {
        Self::Constant(q)
    }
}

/// Inflow edge settings.
#[derive(Clone, Debug)]
pub struct InflowSpec {
    /// Total discharge through the edge
    pub discharge: Discharge,
    /// Depth imposed on the edge cells before the discharge is distributed.
    /// `None` keeps the depth left by the interior update.
    pub prescribed_depth: Option<f64>,
}

impl InflowSpec {
    /// Inflow using whatever depth the edge cells already hold.
    pub fn new(discharge: impl Into<Discharge>) -> Self {
        Self {
            discharge: discharge.into(),
            prescribed_depth: None,
        }
    }

    /// Inflow with a prescribed depth on the edge cells.
    pub fn with_depth(discharge: impl Into<Discharge>, depth: f64) -> Self {
        Self {
            discharge: discharge.into(),
            prescribed_depth: Some(depth),
        }
    }
}

/// Condition on one domain edge.
#[derive(Clone, Debug)]
pub enum BoundaryKind {
    /// Discharge enters the domain
    Inflow(InflowSpec),
    /// Zero-gradient outflow
    Outflow,
    /// Impermeable wall
    Wall,
}

impl BoundaryKind {
    /// Inflow of constant discharge `q` with interior depth.
    pub fn inflow(q: f64) -> Self {
        Self::Inflow(InflowSpec::new(q))
    }

    /// True for [`BoundaryKind::Wall`].
    pub fn is_wall(&self) -> bool {
        matches!(self, Self::Wall)
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inflow(_) => f.write_str("inflow"),
            Self::Outflow => f.write_str("outflow"),
            Self::Wall => f.write_str("wall"),
        }
    }
}
