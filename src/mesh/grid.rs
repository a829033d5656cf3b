//! Structured rectangular grid.
//!
//! Cells are stored flat in row-major order with `index(i, j) = i * ny + j`,
//! `i` running along x and `j` along y. The outermost ring of cells is the
//! boundary halo: it is never advanced by the interior stencil.

use crate::error::SolverError;
use crate::types::{CellIndex, Edge};

/// Uniform rectangular grid of `nx × ny` cells covering `[0, lx] × [0, ly]`.
///
/// Immutable after construction.
///
/// # Example
///
/// ```
/// use floodplain_rs::mesh::Grid;
///
/// let grid = Grid::new(100.0, 50.0, 10, 5).unwrap();
/// assert_eq!(grid.dx(), 10.0);
/// assert_eq!(grid.cell_center(0, 0), (5.0, 5.0));
/// assert_eq!(grid.n_interior(), 8 * 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    nx: usize,
    ny: usize,
    lx: f64,
    ly: f64,
    dx: f64,
    dy: f64,
    /// Cell-centre x coordinates, flat
    x: Vec<f64>,
    /// Cell-centre y coordinates, flat
    y: Vec<f64>,
}

impl Grid {
    /// Build a grid from domain extents and cell counts.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidGrid`] if a cell count is zero or an extent is
    /// not positive and finite.
    pub fn new(lx: f64, ly: f64, nx: usize, ny: usize) -> Result<Self, SolverError> {
        if nx == 0 || ny == 0 {
            return Err(SolverError::InvalidGrid(format!(
                "cell counts must be positive, got nx = {}, ny = {}",
                nx, ny
            )));
        }
        if !(lx > 0.0 && lx.is_finite() && ly > 0.0 && ly.is_finite()) {
            return Err(SolverError::InvalidGrid(format!(
                "domain extents must be positive, got lx = {}, ly = {}",
                lx, ly
            )));
        }

        let dx = lx / nx as f64;
        let dy = ly / ny as f64;

        let mut x = Vec::with_capacity(nx * ny);
        let mut y = Vec::with_capacity(nx * ny);
        for i in 0..nx {
            for j in 0..ny {
                x.push((i as f64 + 0.5) * dx);
                y.push((j as f64 + 0.5) * dy);
            }
        }

        Ok(Self {
            nx,
            ny,
            lx,
            ly,
            dx,
            dy,
            x,
            y,
        })
    }

    /// Build a grid from cell counts and a uniform cell size.
    pub fn with_spacing(nx: usize, ny: usize, dx: f64, dy: f64) -> Result<Self, SolverError> {
        Self::new(nx as f64 * dx, ny as f64 * dy, nx, ny)
    }

    /// Number of cells along x.
    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of cells along y.
    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Domain length along x [m].
    #[inline]
    pub fn lx(&self) -> f64 {
        self.lx
    }

    /// Domain length along y [m].
    #[inline]
    pub fn ly(&self) -> f64 {
        self.ly
    }

    /// Cell size along x [m].
    #[inline]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Cell size along y [m].
    #[inline]
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Plan area of one cell [m²].
    #[inline]
    pub fn cell_area(&self) -> f64 {
        self.dx * self.dy
    }

    /// Total number of cells.
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.nx * self.ny
    }

    /// Number of cells updated by the interior stencil.
    pub fn n_interior(&self) -> usize {
        self.nx.saturating_sub(2) * self.ny.saturating_sub(2)
    }

    /// Flat offset of cell `(i, j)`.
    #[inline(always)]
    pub fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.nx && j < self.ny, "cell ({}, {}) out of range", i, j);
        i * self.ny + j
    }

    /// Structured index of a flat offset.
    #[inline]
    pub fn cell(&self, index: usize) -> CellIndex {
        CellIndex::from_flat(index, self.ny)
    }

    /// Centre of cell `(i, j)`: `((i + 0.5) dx, (j + 0.5) dy)`.
    #[inline]
    pub fn cell_center(&self, i: usize, j: usize) -> (f64, f64) {
        let k = self.index(i, j);
        (self.x[k], self.y[k])
    }

    /// Flat array of cell-centre x coordinates.
    pub fn x_centers(&self) -> &[f64] {
        &self.x
    }

    /// Flat array of cell-centre y coordinates.
    pub fn y_centers(&self) -> &[f64] {
        &self.y
    }

    /// True for cells in the outermost ring.
    #[inline]
    pub fn is_border(&self, i: usize, j: usize) -> bool {
        i == 0 || j == 0 || i + 1 == self.nx || j + 1 == self.ny
    }

    /// True for cells advanced by the interior stencil.
    #[inline]
    pub fn is_interior(&self, i: usize, j: usize) -> bool {
        !self.is_border(i, j)
    }

    /// Iterate over all cells as `(i, j)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.nx).flat_map(move |i| (0..self.ny).map(move |j| (i, j)))
    }

    /// Iterate over interior cells as `(i, j)`.
    pub fn interior_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let ny = self.ny;
        (1..self.nx.saturating_sub(1))
            .flat_map(move |i| (1..ny.saturating_sub(1)).map(move |j| (i, j)))
    }

    /// All cells of one edge, corners included, as `(border, inward neighbour)`.
    ///
    /// The inward neighbour is the adjacent cell one step into the domain
    /// along the edge normal.
    pub fn edge_cells(&self, edge: Edge) -> Vec<(CellIndex, CellIndex)> {
        let (nx, ny) = (self.nx, self.ny);
        let inward = |c: usize, n: usize| if n > 1 { c } else { 0 };
        match edge {
            Edge::West => (0..ny)
                .map(|j| (CellIndex::new(0, j), CellIndex::new(inward(1, nx), j)))
                .collect(),
            Edge::East => (0..ny)
                .map(|j| {
                    (
                        CellIndex::new(nx - 1, j),
                        CellIndex::new(nx.saturating_sub(2), j),
                    )
                })
                .collect(),
            Edge::South => (0..nx)
                .map(|i| (CellIndex::new(i, 0), CellIndex::new(i, inward(1, ny))))
                .collect(),
            Edge::North => (0..nx)
                .map(|i| {
                    (
                        CellIndex::new(i, ny - 1),
                        CellIndex::new(i, ny.saturating_sub(2)),
                    )
                })
                .collect(),
        }
    }

    /// Width of one edge cell measured along the edge [m].
    #[inline]
    pub fn edge_cell_width(&self, edge: Edge) -> f64 {
        if edge.is_x_normal() { self.dy } else { self.dx }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_spacing_and_centres() {
        let grid = Grid::new(100.0, 40.0, 10, 4).unwrap();
        assert!((grid.dx() - 10.0).abs() < TOL);
        assert!((grid.dy() - 10.0).abs() < TOL);
        assert!((grid.cell_area() - 100.0).abs() < TOL);

        let (x, y) = grid.cell_center(3, 2);
        assert!((x - 35.0).abs() < TOL);
        assert!((y - 25.0).abs() < TOL);

        assert_eq!(grid.x_centers().len(), 40);
        assert!((grid.x_centers()[grid.index(9, 3)] - 95.0).abs() < TOL);

        let same = Grid::with_spacing(10, 4, 10.0, 10.0).unwrap();
        assert_eq!(same.nx(), 10);
        assert!((same.lx() - 100.0).abs() < TOL);
        assert!((same.ly() - 40.0).abs() < TOL);
        assert!((same.cell_area() - 100.0).abs() < TOL);
        assert!(Grid::with_spacing(10, 4, 0.0, 10.0).is_err());
    }

    #[test]
    fn test_zero_cells_rejected() {
        assert!(matches!(
            Grid::new(10.0, 10.0, 0, 5),
            Err(SolverError::InvalidGrid(_))
        ));
        assert!(matches!(
            Grid::new(10.0, 10.0, 5, 0),
            Err(SolverError::InvalidGrid(_))
        ));
        assert!(Grid::new(-1.0, 10.0, 5, 5).is_err());
        assert!(Grid::new(10.0, f64::INFINITY, 5, 5).is_err());
    }

    #[test]
    fn test_index_is_row_major() {
        let grid = Grid::new(1.0, 1.0, 3, 5).unwrap();
        assert_eq!(grid.index(0, 4), 4);
        assert_eq!(grid.index(1, 0), 5);
        assert_eq!(grid.cell(7), CellIndex::new(1, 2));
    }

    #[test]
    fn test_border_and_interior_counts() {
        let grid = Grid::new(1.0, 1.0, 5, 4).unwrap();
        let n_border = grid.cells().filter(|&(i, j)| grid.is_border(i, j)).count();
        assert_eq!(n_border, 5 * 4 - 3 * 2);
        assert_eq!(grid.interior_cells().count(), grid.n_interior());
        assert!(grid.interior_cells().all(|(i, j)| grid.is_interior(i, j)));

        let thin = Grid::new(1.0, 1.0, 2, 7).unwrap();
        assert_eq!(thin.n_interior(), 0);
        assert_eq!(thin.interior_cells().count(), 0);
    }

    #[test]
    fn test_edge_cells_point_inward() {
        let grid = Grid::new(1.0, 1.0, 4, 3).unwrap();

        let east = grid.edge_cells(Edge::East);
        assert_eq!(east.len(), 3);
        assert_eq!(east[1], (CellIndex::new(3, 1), CellIndex::new(2, 1)));

        let south = grid.edge_cells(Edge::South);
        assert_eq!(south.len(), 4);
        assert_eq!(south[2], (CellIndex::new(2, 0), CellIndex::new(2, 1)));

        assert!((grid.edge_cell_width(Edge::West) - grid.dy()).abs() < TOL);
        assert!((grid.edge_cell_width(Edge::North) - grid.dx()).abs() < TOL);
    }
}
