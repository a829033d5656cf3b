//! Gridded field of depth and velocity.

use crate::error::SolverError;
use crate::mesh::Grid;
use crate::solver::state::{
    Primitive, ShallowState, conserved_from_primitive, primitive_from_conserved,
};

/// Per-cell depth `h` and velocity `(u, v)`, flat in [`Grid::index`] order.
///
/// Every constructor runs reconstruction, so dry cells hold exactly
/// `(0, 0, 0)` from the start.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldState {
    h: Vec<f64>,
    u: Vec<f64>,
    v: Vec<f64>,
}

impl FieldState {
    /// Build from flat primitive arrays.
    ///
    /// # Errors
    ///
    /// [`SolverError::Configuration`] if an array length differs from
    /// `grid.n_cells()`, a depth is negative or not finite, or a velocity
    /// is not finite.
    pub fn from_primitives(
        grid: &Grid,
        h: Vec<f64>,
        u: Vec<f64>,
        v: Vec<f64>,
        h_dry: f64,
    ) -> Result<Self, SolverError> {
        let n = grid.n_cells();
        for (name, field) in [("h", &h), ("u", &u), ("v", &v)] {
            if field.len() != n {
                return Err(SolverError::config(
                    name,
                    field.len(),
                    &format!("expected {} values", n),
                ));
            }
        }
        if let Some(k) = h.iter().position(|&d| !(d >= 0.0 && d.is_finite())) {
            return Err(SolverError::config(
                "h",
                h[k],
                &format!("initial depth must be non-negative at cell {}", grid.cell(k)),
            ));
        }
        for (name, field) in [("u", &u), ("v", &v)] {
            if let Some(k) = field.iter().position(|c| !c.is_finite()) {
                return Err(SolverError::config(
                    name,
                    field[k],
                    &format!("not finite at cell {}", grid.cell(k)),
                ));
            }
        }

        let mut state = Self { h, u, v };
        state.reconstruct(h_dry);
        Ok(state)
    }

    /// Same depth and velocity in every cell.
    pub fn uniform(grid: &Grid, h: f64, u: f64, v: f64, h_dry: f64) -> Result<Self, SolverError> {
        let n = grid.n_cells();
        Self::from_primitives(grid, vec![h; n], vec![u; n], vec![v; n], h_dry)
    }

    /// Build from a function of cell-centre coordinates returning `(h, u, v)`.
    pub fn from_fn<F>(grid: &Grid, h_dry: f64, f: F) -> Result<Self, SolverError>
    where
        F: Fn(f64, f64) -> (f64, f64, f64),
    {
        let n = grid.n_cells();
        let mut h = Vec::with_capacity(n);
        let mut u = Vec::with_capacity(n);
        let mut v = Vec::with_capacity(n);
        for (&x, &y) in grid.x_centers().iter().zip(grid.y_centers()) {
            let (hk, uk, vk) = f(x, y);
            h.push(hk);
            u.push(uk);
            v.push(vk);
        }
        Self::from_primitives(grid, h, u, v, h_dry)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.h.len()
    }

    /// True if the field holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.h.is_empty()
    }

    /// Depth array.
    pub fn h(&self) -> &[f64] {
        &self.h
    }

    /// x-velocity array.
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    /// y-velocity array.
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    /// Primitive variables of cell `idx`.
    #[inline(always)]
    pub fn primitive(&self, idx: usize) -> Primitive {
        Primitive::new(self.h[idx], self.u[idx], self.v[idx])
    }

    /// Conserved variables of cell `idx`.
    #[inline(always)]
    pub fn conserved(&self, idx: usize) -> ShallowState {
        conserved_from_primitive(self.primitive(idx))
    }

    /// Overwrite cell `idx` with primitive values as given.
    #[inline(always)]
    pub fn set_primitive(&mut self, idx: usize, p: Primitive) {
        self.h[idx] = p.h;
        self.u[idx] = p.u;
        self.v[idx] = p.v;
    }

    /// Store a conserved state, reconstructing primitive values.
    #[inline(always)]
    pub fn set_conserved(&mut self, idx: usize, q: ShallowState, h_dry: f64) {
        self.set_primitive(idx, primitive_from_conserved(q, h_dry));
    }

    /// Set the depth of cell `idx`, keeping its velocity.
    #[inline]
    pub fn set_depth(&mut self, idx: usize, h: f64) {
        self.h[idx] = h;
    }

    /// Set the x-velocity of cell `idx`.
    #[inline]
    pub fn set_u(&mut self, idx: usize, u: f64) {
        self.u[idx] = u;
    }

    /// Set the y-velocity of cell `idx`.
    #[inline]
    pub fn set_v(&mut self, idx: usize, v: f64) {
        self.v[idx] = v;
    }

    /// Apply dry-cell reconstruction to every cell.
    ///
    /// Idempotent: a second pass leaves the field unchanged.
    pub fn reconstruct(&mut self, h_dry: f64) {
        for k in 0..self.len() {
            let q = self.conserved(k);
            self.set_conserved(k, q, h_dry);
        }
    }

    /// Total water volume `Σ h dx dy` [m³].
    pub fn total_volume(&self, grid: &Grid) -> f64 {
        self.h.iter().sum::<f64>() * grid.cell_area()
    }

    /// Number of cells with `h >= h_dry`.
    pub fn wet_cells(&self, h_dry: f64) -> usize {
        self.h.iter().filter(|&&d| d >= h_dry).count()
    }

    /// Copy all values from a field of the same size.
    pub fn copy_from(&mut self, other: &Self) {
        debug_assert_eq!(self.len(), other.len());
        self.h.copy_from_slice(&other.h);
        self.u.copy_from_slice(&other.u);
        self.v.copy_from_slice(&other.v);
    }
}
