//! Source terms for the shallow water equations.
//!
//! - [`BedSlopeSource`]: `(0, -g h ∂z_b/∂x, -g h ∂z_b/∂y)`
//! - [`ManningFriction`]: `(0, -C_f u h, -C_f v h)`, `C_f = g n² |u| / h^{4/3}`
//! - [`SourceEngine`]: per-cell sum with border and dry short-circuits
//!
//! Additional terms plug in through the [`SourceTerm`] trait.

mod bathymetry;
mod engine;
mod friction;
mod traits;

pub use bathymetry::BedSlopeSource;
pub use engine::SourceEngine;
pub use friction::{FrictionScheme, ManningFriction};
pub use traits::{SourceContext, SourceTerm};
