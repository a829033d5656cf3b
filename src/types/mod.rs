//! Strongly-typed domain types.
//!
//! - [`CellIndex`]: structured `(i, j)` position on the grid
//! - [`Edge`], [`SideBoundaries`]: per-edge configuration with named fields

mod indices;
mod sides;

pub use indices::CellIndex;
pub use sides::{Edge, SideBoundaries};
