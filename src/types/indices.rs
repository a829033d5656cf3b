//! Strongly-typed cell index.
//!
//! Field arrays are stored flat (row-major, `i * ny + j`), but errors and
//! diagnostics report positions as a structured `(i, j)` pair so a caller
//! never has to undo the flattening by hand.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a cell on the structured grid.
///
/// `i` runs along x (0..nx), `j` along y (0..ny).
///
/// # Example
///
/// ```
/// use floodplain_rs::types::CellIndex;
///
/// let cell = CellIndex::new(3, 7);
/// assert_eq!(cell.flat(10), 37);
/// assert_eq!(CellIndex::from_flat(37, 10), cell);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellIndex {
    /// Column index along x
    pub i: usize,
    /// Row index along y
    pub j: usize,
}

impl CellIndex {
    /// Create a new cell index.
    #[inline]
    pub const fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    /// Flat row-major offset for a grid with `ny` cells along y.
    #[inline]
    pub const fn flat(self, ny: usize) -> usize {
        self.i * ny + self.j
    }

    /// Recover the structured index from a flat offset.
    #[inline]
    pub const fn from_flat(index: usize, ny: usize) -> Self {
        Self {
            i: index / ny,
            j: index % ny,
        }
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

impl From<(usize, usize)> for CellIndex {
    #[inline]
    fn from((i, j): (usize, usize)) -> Self {
        Self { i, j }
    }
}
