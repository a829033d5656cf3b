//! Source term interface.

use crate::solver::{Primitive, ShallowState, conserved_from_primitive};

/// Everything a source term may read at a single cell.
#[derive(Clone, Copy, Debug)]
pub struct SourceContext {
    /// Depth and velocity at the start of the step
    pub primitive: Primitive,
    /// Bed slope (∂z_b/∂x, ∂z_b/∂y)
    pub bed_slope: (f64, f64),
    /// Manning coefficient
    pub manning_n: f64,
    /// Gravitational acceleration
    pub g: f64,
    /// Dry-cell depth threshold
    pub h_dry: f64,
    /// Speed below which friction vanishes
    pub epsilon: f64,
}

impl SourceContext {
    /// Conserved state `(h, hu, hv)` of the cell.
    #[inline]
    pub fn conserved(&self) -> ShallowState {
        conserved_from_primitive(self.primitive)
    }

    /// True if the cell is dry.
    #[inline]
    pub fn is_dry(&self) -> bool {
        self.primitive.h < self.h_dry
    }
}

/// A source term of the shallow water equations.
///
/// `dU/dt = -∇·F + S(U)`; implementations return `S` for one cell.
pub trait SourceTerm: Send + Sync {
    /// Source contribution `(S_h, S_hu, S_hv)`.
    fn evaluate(&self, ctx: &SourceContext) -> ShallowState;

    /// Name for logging.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(ShallowState);

    impl SourceTerm for Constant {
        fn evaluate(&self, _: &SourceContext) -> ShallowState {
            self.0
        }

        fn name(&self) -> &'static str {
            "constant"
        }
    }

    #[test]
    fn test_trait_object_dispatch() {
        let sources: Vec<Box<dyn SourceTerm>> = vec![
            Box::new(Constant(ShallowState::new(0.0, 1.0, 2.0))),
            Box::new(Constant(ShallowState::new(0.0, -0.5, 0.5))),
        ];
        let ctx = SourceContext {
            primitive: Primitive::new(1.0, 2.0, 0.0),
            bed_slope: (0.0, 0.0),
            manning_n: 0.03,
            g: 9.81,
            h_dry: 0.01,
            epsilon: 1e-6,
        };
        let total = sources
            .iter()
            .fold(ShallowState::zero(), |acc, s| acc + s.evaluate(&ctx));
        assert_eq!(total, ShallowState::new(0.0, 0.5, 2.5));
        assert_eq!(ctx.conserved(), ShallowState::new(1.0, 2.0, 0.0));
        assert!(!ctx.is_dry());
    }
}
