//! Face flux sweep over the structured grid.
//!
//! Fluxes are evaluated once per face and shared by the two cells on either
//! side, so whatever leaves one cell enters its neighbour. Only faces that
//! touch an interior cell are evaluated.
//!
//! A face between an interior cell and a wall border cell is evaluated
//! against the mirror image of the interior cell (normal momentum negated),
//! which makes its mass flux exactly zero.

use crate::flux::{rusanov_flux_x, rusanov_flux_y};
use crate::mesh::Grid;
use crate::solver::{FieldState, ShallowState};
use crate::types::SideBoundaries;

/// Numerical fluxes on all x- and y-normal faces of a grid.
///
/// `x[index(i, j)]` is the face between `(i, j)` and `(i + 1, j)`;
/// `y[index(i, j)]` is the face between `(i, j)` and `(i, j + 1)`.
#[derive(Clone, Debug)]
pub struct FaceFluxes {
    nx: usize,
    ny: usize,
    x: Vec<ShallowState>,
    y: Vec<ShallowState>,
}

impl FaceFluxes {
    /// Allocate zeroed face storage for `grid`.
    pub fn new(grid: &Grid) -> Self {
        let n = grid.n_cells();
        Self {
            nx: grid.nx(),
            ny: grid.ny(),
            x: vec![ShallowState::zero(); n],
            y: vec![ShallowState::zero(); n],
        }
    }

    /// Evaluate every face adjacent to an interior cell.
    ///
    /// `walls` flags the edges whose border cells are replaced by mirror
    /// states.
    pub fn compute(
        &mut self,
        grid: &Grid,
        state: &FieldState,
        walls: &SideBoundaries<bool>,
        g: f64,
        h_dry: f64,
    ) {
        debug_assert_eq!((self.nx, self.ny), (grid.nx(), grid.ny()));
        let (nx, ny) = (self.nx, self.ny);
        if nx < 3 || ny < 3 {
            return;
        }

        // x-normal faces, rows j = 1..ny-1
        for i in 0..nx - 1 {
            for j in 1..ny - 1 {
                let k = grid.index(i, j);
                let mut left = state.conserved(k);
                let mut right = state.conserved(grid.index(i + 1, j));
                if i == 0 && walls.west {
                    left = right.reflect_x();
                }
                if i + 2 == nx && walls.east {
                    right = left.reflect_x();
                }
                self.x[k] = rusanov_flux_x(&left, &right, g, h_dry);
            }
        }

        // y-normal faces, columns i = 1..nx-1
        for i in 1..nx - 1 {
            for j in 0..ny - 1 {
                let k = grid.index(i, j);
                let mut bottom = state.conserved(k);
                let mut top = state.conserved(grid.index(i, j + 1));
                if j == 0 && walls.south {
                    bottom = top.reflect_y();
                }
                if j + 2 == ny && walls.north {
                    top = bottom.reflect_y();
                }
                self.y[k] = rusanov_flux_y(&bottom, &top, g, h_dry);
            }
        }
    }

    /// Flux through the east face of cell `(i, j)`.
    #[inline(always)]
    pub fn east(&self, i: usize, j: usize) -> ShallowState {
        self.x[i * self.ny + j]
    }

    /// Flux through the west face of cell `(i, j)`, `i >= 1`.
    #[inline(always)]
    pub fn west(&self, i: usize, j: usize) -> ShallowState {
        self.x[(i - 1) * self.ny + j]
    }

    /// Flux through the north face of cell `(i, j)`.
    #[inline(always)]
    pub fn north(&self, i: usize, j: usize) -> ShallowState {
        self.y[i * self.ny + j]
    }

    /// Flux through the south face of cell `(i, j)`, `j >= 1`.
    #[inline(always)]
    pub fn south(&self, i: usize, j: usize) -> ShallowState {
        self.y[i * self.ny + j - 1]
    }

    /// Net flux contribution `-(F_e - F_w)/dx - (G_n - G_s)/dy` for an
    /// interior cell.
    #[inline]
    pub fn divergence(&self, i: usize, j: usize, dx: f64, dy: f64) -> ShallowState {
        let dfx = self.east(i, j) - self.west(i, j);
        let dgy = self.north(i, j) - self.south(i, j);
        -(dfx * (1.0 / dx)) - dgy * (1.0 / dy)
    }
}
