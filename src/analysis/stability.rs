//! Stability checks on a field.
//!
//! A step that produces NaN or infinite values must not be accepted: the
//! stepper scans its output with [`find_non_finite`] before swapping it in.

use crate::mesh::Grid;
use crate::solver::FieldState;
use crate::types::CellIndex;

/// First cell holding a non-finite value, with the field name
/// (`"h"`, `"u"` or `"v"`), scanning in flat index order.
pub fn find_non_finite(grid: &Grid, state: &FieldState) -> Option<(CellIndex, &'static str)> {
    let (h, u, v) = (state.h(), state.u(), state.v());
    (0..state.len()).find_map(|k| {
        let field = if !h[k].is_finite() {
            "h"
        } else if !u[k].is_finite() {
            "u"
        } else if !v[k].is_finite() {
            "v"
        } else {
            return None;
        };
        Some((grid.cell(k), field))
    })
}

/// First cell with a negative depth.
pub fn find_negative_depth(grid: &Grid, state: &FieldState) -> Option<CellIndex> {
    state.h().iter().position(|&h| h < 0.0).map(|k| grid.cell(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Primitive;

    #[test]
    fn test_clean_field() {
        let grid = Grid::new(30.0, 30.0, 3, 3).unwrap();
        let state = FieldState::uniform(&grid, 1.0, 0.1, 0.2, 0.01).unwrap();
        assert!(find_non_finite(&grid, &state).is_none());
        assert!(find_negative_depth(&grid, &state).is_none());
    }

    #[test]
    fn test_reports_first_offending_cell() {
        let grid = Grid::new(30.0, 30.0, 3, 3).unwrap();
        let mut state = FieldState::uniform(&grid, 1.0, 0.0, 0.0, 0.01).unwrap();
        state.set_primitive(grid.index(2, 1), Primitive::new(1.0, 0.0, f64::INFINITY));
        state.set_primitive(grid.index(1, 2), Primitive::new(1.0, f64::NAN, 0.0));

        let (cell, field) = find_non_finite(&grid, &state).unwrap();
        assert_eq!(cell, CellIndex::new(1, 2));
        assert_eq!(field, "u");

        state.set_primitive(grid.index(0, 0), Primitive::new(-0.5, 0.0, 0.0));
        assert_eq!(find_negative_depth(&grid, &state), Some(CellIndex::new(0, 0)));
    }
}
