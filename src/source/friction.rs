//! Manning bottom friction.
//!
//! ```text
//! C_f = g n² |u| / h^{4/3}
//! S   = (0, -C_f u h, -C_f v h)
//! ```
//!
//! Friction only acts on wet cells (`h >= h_dry`) moving faster than
//! `epsilon`. It becomes stiff as the depth shrinks, so besides the explicit
//! source a semi-implicit update is available: with the explicit source
//! left out of the step, the updated momentum is divided by
//! `1 + dt C_f(U*)`, evaluated on the updated state `U*`.

use serde::{Deserialize, Serialize};

use crate::solver::ShallowState;
use crate::source::{SourceContext, SourceTerm};

/// Time treatment of the friction term.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrictionScheme {
    /// Friction is part of the explicit source
    #[default]
    Explicit,
    /// Friction damps the updated momentum after the explicit step
    SemiImplicit,
}

/// Manning friction with the roughness taken from the cell's topography.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManningFriction;

impl ManningFriction {
    /// Drag coefficient `C_f = g n² speed / h^{4/3}`.
    #[inline]
    pub fn drag_coefficient(g: f64, manning_n: f64, speed: f64, h: f64) -> f64 {
        // h^{4/3} = h * cbrt(h)
        g * manning_n * manning_n * speed / (h * h.cbrt())
    }

    /// Damp the momentum of an updated state: `hu / (1 + dt C_f)`.
    ///
    /// Dry or (nearly) still states are returned unchanged.
    pub fn semi_implicit_update(
        q: ShallowState,
        manning_n: f64,
        dt: f64,
        g: f64,
        h_dry: f64,
        epsilon: f64,
    ) -> ShallowState {
        if q.is_dry(h_dry) {
            return q;
        }
        let (u, v) = q.velocity(h_dry);
        let speed = (u * u + v * v).sqrt();
        if speed <= epsilon {
            return q;
        }

        let denom = 1.0 + dt * Self::drag_coefficient(g, manning_n, speed, q.h);
        ShallowState::new(q.h, q.hu / denom, q.hv / denom)
    }
}

impl SourceTerm for ManningFriction {
    fn evaluate(&self, ctx: &SourceContext) -> ShallowState {
        if ctx.is_dry() {
            return ShallowState::zero();
        }
        let p = ctx.primitive;
        let speed = p.speed();
        if speed <= ctx.epsilon {
            return ShallowState::zero();
        }

        let c_f = Self::drag_coefficient(ctx.g, ctx.manning_n, speed, p.h);
        ShallowState::new(0.0, -c_f * p.u * p.h, -c_f * p.v * p.h)
    }

    fn name(&self) -> &'static str {
        "manning_friction"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Primitive;

    const G: f64 = 10.0;
    const H_DRY: f64 = 0.01;
    const EPS: f64 = 1e-6;

    fn ctx(h: f64, u: f64, v: f64, n: f64) -> SourceContext {
        SourceContext {
            primitive: Primitive::new(h, u, v),
            bed_slope: (0.0, 0.0),
            manning_n: n,
            g: G,
            h_dry: H_DRY,
            epsilon: EPS,
        }
    }

    #[test]
    fn test_opposes_flow() {
        // h = 1: C_f = g n² |u| = 10 * 0.01 * 5 = 0.5
        let s = ManningFriction.evaluate(&ctx(1.0, 3.0, -4.0, 0.1));
        assert_eq!(s.h, 0.0);
        assert!((s.hu + 1.5).abs() < 1e-12);
        assert!((s.hv - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_depth_scaling() {
        // h = 8: h^{4/3} = 16, C_f = 10 * 0.01 * 1 / 16
        let s = ManningFriction.evaluate(&ctx(8.0, 1.0, 0.0, 0.1));
        assert!((s.hu + 0.1 / 16.0 * 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_when_dry_or_still() {
        assert_eq!(ManningFriction.evaluate(&ctx(0.0, 0.0, 0.0, 0.03)), ShallowState::zero());
        assert_eq!(ManningFriction.evaluate(&ctx(1.0, 1e-9, 0.0, 0.03)), ShallowState::zero());
    }

    #[test]
    fn test_semi_implicit_damps_without_reversal() {
        let q = ShallowState::new(0.05, 0.5, -0.1);
        // Large dt: explicit friction would reverse the flow
        let damped = ManningFriction::semi_implicit_update(q, 0.05, 100.0, G, H_DRY, EPS);
        assert_eq!(damped.h, q.h);
        assert!(damped.hu > 0.0 && damped.hu < q.hu);
        assert!(damped.hv < 0.0 && damped.hv > q.hv);
        // Direction preserved
        assert!((damped.hu / damped.hv - q.hu / q.hv).abs() < 1e-12);
    }

    #[test]
    fn test_semi_implicit_leaves_dry_state() {
        let q = ShallowState::new(0.001, 0.0, 0.0);
        assert_eq!(ManningFriction::semi_implicit_update(q, 0.03, 1.0, G, H_DRY, EPS), q);
    }

    #[test]
    fn test_scheme_serde_names() {
        let json = serde_json::to_string(&FrictionScheme::SemiImplicit).unwrap();
        assert_eq!(json, "\"semi_implicit\"");
        assert_eq!(FrictionScheme::default(), FrictionScheme::Explicit);
    }
}
