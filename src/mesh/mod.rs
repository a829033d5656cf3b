//! Mesh geometry and bed description.
//!
//! - [`Grid`]: uniform rectangular cells with flat row-major indexing
//! - [`Topography`]: bed elevation, roughness and precomputed bed slopes

mod grid;
mod topography;

pub use grid::Grid;
pub use topography::Topography;
