//! Boundary conditions on the four domain edges.
//!
//! - [`BoundaryKind`]: per-edge configuration (inflow, outflow, wall)
//! - [`EdgeCondition`]: trait implemented by [`Wall`], [`Outflow`] and
//!   [`Inflow`]
//! - [`BoundaryHandler`]: resolves a [`SideBoundaries`] configuration once
//!   and applies it after each step
//!
//! [`SideBoundaries`]: crate::types::SideBoundaries

mod conditions;
mod handler;
mod kind;

pub use conditions::{EdgeCondition, EdgeContext, Inflow, Outflow, Wall};
pub use handler::BoundaryHandler;
pub use kind::{BoundaryKind, Discharge, InflowSpec};
