//! Solution state for the shallow water equations.
//!
//! - [`ShallowState`]: conserved `(h, hu, hv)` with vector arithmetic
//! - [`Primitive`] and the reconstruction pair
//!   [`conserved_from_primitive`] / [`primitive_from_conserved`]
//! - [`FieldState`]: gridded depth and velocity
//! - [`FieldDiagnostics`]: volume, extrema and Froude number of a field

mod diagnostics;
mod field;
mod state;

pub use diagnostics::FieldDiagnostics;
pub use field::FieldState;
pub use state::{Primitive, ShallowState, conserved_from_primitive, primitive_from_conserved};
