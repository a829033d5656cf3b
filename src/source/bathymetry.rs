//! Bed-slope source term.
//!
//! `S = (0, -g h ∂z_b/∂x, -g h ∂z_b/∂y)`

use crate::solver::ShallowState;
use crate::source::{SourceContext, SourceTerm};

/// Gravity acting along a sloping bed.
#[derive(Clone, Copy, Debug, Default)]
pub struct BedSlopeSource;

impl SourceTerm for BedSlopeSource {
    fn evaluate(&self, ctx: &SourceContext) -> ShallowState {
        if ctx.is_dry() {
            return ShallowState::zero();
        }
        let gh = ctx.g * ctx.primitive.h;
        let (dz_dx, dz_dy) = ctx.bed_slope;
        ShallowState::new(0.0, -gh * dz_dx, -gh * dz_dy)
    }

    fn name(&self) -> &'static str {
        "bed_slope"
    }
}
