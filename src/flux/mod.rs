//! Numerical fluxes.
//!
//! - [`rusanov_flux_x`] / [`rusanov_flux_y`]: local Lax-Friedrichs flux on
//!   x- and y-normal faces
//! - [`FaceFluxes`]: per-face sweep over the grid with wall reflection

mod faces;
mod rusanov;

pub use faces::FaceFluxes;
pub use rusanov::{physical_flux_x, physical_flux_y, rusanov_flux_x, rusanov_flux_y};
