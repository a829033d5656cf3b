//! Bed elevation and Manning roughness.
//!
//! Bed-slope gradients are central differences evaluated once at
//! construction and stored beside the elevation. Border cells carry a zero
//! slope since they have no neighbour on one side.

use crate::error::SolverError;
use crate::mesh::Grid;

/// Per-cell bed elevation `z_b` [m] and Manning roughness `n` [s/m^(1/3)].
///
/// Layout matches [`Grid::index`]. Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Topography {
    z_b: Vec<f64>,
    manning_n: Vec<f64>,
    /// Pre-computed ∂z_b/∂x
    slope_x: Vec<f64>,
    /// Pre-computed ∂z_b/∂y
    slope_y: Vec<f64>,
}

impl Topography {
    /// Build from flat bed elevation and roughness arrays.
    ///
    /// # Errors
    ///
    /// [`SolverError::Configuration`] if an array does not have
    /// `grid.n_cells()` entries, an elevation is not finite or a roughness
    /// is not positive and finite.
    pub fn new(grid: &Grid, z_b: Vec<f64>, manning_n: Vec<f64>) -> Result<Self, SolverError> {
        let n = grid.n_cells();
        if z_b.len() != n {
            return Err(SolverError::config(
                "z_b",
                z_b.len(),
                &format!("expected {} values", n),
            ));
        }
        if manning_n.len() != n {
            return Err(SolverError::config(
                "n_manning",
                manning_n.len(),
                &format!("expected {} values", n),
            ));
        }
        if let Some(k) = z_b.iter().position(|z| !z.is_finite()) {
            return Err(SolverError::config(
                "z_b",
                z_b[k],
                &format!("not finite at cell {}", grid.cell(k)),
            ));
        }
        if let Some(k) = manning_n.iter().position(|&r| !(r > 0.0 && r.is_finite())) {
            return Err(SolverError::config(
                "n_manning",
                manning_n[k],
                &format!("must be positive at cell {}", grid.cell(k)),
            ));
        }

        let (slope_x, slope_y) = central_slopes(grid, &z_b);

        Ok(Self {
            z_b,
            manning_n,
            slope_x,
            slope_y,
        })
    }

    /// Horizontal bed with uniform roughness.
    pub fn flat(grid: &Grid, elevation: f64, manning_n: f64) -> Result<Self, SolverError> {
        let n = grid.n_cells();
        Self::new(grid, vec![elevation; n], vec![manning_n; n])
    }

    /// Build from a function of cell-centre coordinates returning `(z_b, n)`.
    pub fn from_fn<F>(grid: &Grid, f: F) -> Result<Self, SolverError>
    where
        F: Fn(f64, f64) -> (f64, f64),
    {
        let (z_b, manning_n) = grid
            .x_centers()
            .iter()
            .zip(grid.y_centers())
            .map(|(&x, &y)| f(x, y))
            .unzip();
        Self::new(grid, z_b, manning_n)
    }

    /// Bed elevation of cell `idx`.
    #[inline]
    pub fn elevation(&self, idx: usize) -> f64 {
        self.z_b[idx]
    }

    /// Manning coefficient of cell `idx`.
    #[inline]
    pub fn manning(&self, idx: usize) -> f64 {
        self.manning_n[idx]
    }

    /// Bed slope `(∂z_b/∂x, ∂z_b/∂y)` of cell `idx`.
    #[inline]
    pub fn slope(&self, idx: usize) -> (f64, f64) {
        (self.slope_x[idx], self.slope_y[idx])
    }

    /// Flat bed elevation array.
    pub fn elevations(&self) -> &[f64] {
        &self.z_b
    }

    /// Flat roughness array.
    pub fn roughness(&self) -> &[f64] {
        &self.manning_n
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.z_b.len()
    }

    /// True if the topography holds no cells.
    pub fn is_empty(&self) -> bool {
        self.z_b.is_empty()
    }
}

fn central_slopes(grid: &Grid, z_b: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = grid.n_cells();
    let mut slope_x = vec![0.0; n];
    let mut slope_y = vec![0.0; n];
    let (inv_2dx, inv_2dy) = (0.5 / grid.dx(), 0.5 / grid.dy());

    for (i, j) in grid.interior_cells() {
        let k = grid.index(i, j);
        slope_x[k] = (z_b[grid.index(i + 1, j)] - z_b[grid.index(i - 1, j)]) * inv_2dx;
        slope_y[k] = (z_b[grid.index(i, j + 1)] - z_b[grid.index(i, j - 1)]) * inv_2dy;
    }

    (slope_x, slope_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_flat_bed_has_zero_slope() {
        let grid = Grid::new(50.0, 50.0, 5, 5).unwrap();
        let topo = Topography::flat(&grid, 2.0, 0.03).unwrap();
        assert_eq!(topo.len(), 25);
        for k in 0..topo.len() {
            assert_eq!(topo.slope(k), (0.0, 0.0));
            assert!((topo.elevation(k) - 2.0).abs() < TOL);
        }
    }

    #[test]
    fn test_planar_bed_slope() {
        // z = 0.01 x - 0.02 y
        let grid = Grid::new(60.0, 40.0, 6, 4).unwrap();
        let topo = Topography::from_fn(&grid, |x, y| (0.01 * x - 0.02 * y, 0.03)).unwrap();

        for (i, j) in grid.interior_cells() {
            let (sx, sy) = topo.slope(grid.index(i, j));
            assert!((sx - 0.01).abs() < TOL, "sx = {}", sx);
            assert!((sy + 0.02).abs() < TOL, "sy = {}", sy);
        }
        assert_eq!(topo.slope(grid.index(0, 2)), (0.0, 0.0));
        assert_eq!(topo.slope(grid.index(3, 3)), (0.0, 0.0));

        assert_eq!(topo.elevations().len(), grid.n_cells());
        assert!((topo.elevations()[grid.index(2, 1)] - (0.25 - 0.3)).abs() < TOL);
        assert!(topo.roughness().iter().all(|&n| n == 0.03));
    }

    #[test]
    fn test_invalid_roughness_rejected() {
        let grid = Grid::new(30.0, 30.0, 3, 3).unwrap();
        assert!(matches!(
            Topography::flat(&grid, 0.0, 0.0),
            Err(SolverError::Configuration { ref key, .. }) if key == "n_manning"
        ));
        assert!(Topography::flat(&grid, 0.0, -0.01).is_err());

        let mut n = vec![0.03; 9];
        n[4] = f64::NAN;
        assert!(Topography::new(&grid, vec![0.0; 9], n).is_err());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let grid = Grid::new(30.0, 30.0, 3, 3).unwrap();
        assert!(Topography::new(&grid, vec![0.0; 8], vec![0.03; 9]).is_err());
        assert!(Topography::new(&grid, vec![0.0; 9], vec![0.03; 10]).is_err());
    }
}
