//! Rusanov (local Lax-Friedrichs) flux for the 2D shallow water equations.
//!
//! For a face between left state U_L and right state U_R:
//!
//! ```text
//! alpha = max(|u_L| + c_L, |u_R| + c_R)
//! F*    = 0.5 (F(U_L) + F(U_R)) - 0.5 alpha (U_R - U_L)
//! ```
//!
//! with `F(h, hu, hv) = (hu, hu u + g h²/2, hv u)`. A state with `h < h_dry`
//! contributes zero velocity and zero celerity, so two dry neighbours give
//! the zero flux.

use crate::solver::ShallowState;

/// Physical x-flux `F(U) = (hu, hu u + g h²/2, hv u)`.
#[inline(always)]
pub fn physical_flux_x(q: &ShallowState, g: f64, h_dry: f64) -> ShallowState {
    let (u, _) = q.velocity(h_dry);
    ShallowState::new(q.hu, q.hu * u + 0.5 * g * q.h * q.h, q.hv * u)
}

/// Physical y-flux `G(U) = (hv, hu v, hv v + g h²/2)`.
#[inline(always)]
pub fn physical_flux_y(q: &ShallowState, g: f64, h_dry: f64) -> ShallowState {
    physical_flux_x(&q.swap_momentum(), g, h_dry).swap_momentum()
}

/// Largest x-direction signal speed `|u| + sqrt(g h)`, zero for dry states.
#[inline(always)]
fn signal_speed_x(q: &ShallowState, g: f64, h_dry: f64) -> f64 {
    if q.is_dry(h_dry) {
        0.0
    } else {
        let (u, _) = q.velocity(h_dry);
        u.abs() + (g * q.h).sqrt()
    }
}

/// Rusanov flux across an x-normal face, `left` at smaller i.
pub fn rusanov_flux_x(
    left: &ShallowState,
    right: &ShallowState,
    g: f64,
    h_dry: f64,
) -> ShallowState {
    if left.is_dry(h_dry) && right.is_dry(h_dry) {
        return ShallowState::zero();
    }

    let alpha = signal_speed_x(left, g, h_dry).max(signal_speed_x(right, g, h_dry));
    let f_l = physical_flux_x(left, g, h_dry);
    let f_r = physical_flux_x(right, g, h_dry);

    0.5 * (f_l + f_r) - 0.5 * alpha * (*right - *left)
}

/// Rusanov flux across a y-normal face, `bottom` at smaller j.
///
/// Evaluated as the x-flux of the states with momentum components swapped.
pub fn rusanov_flux_y(
    bottom: &ShallowState,
    top: &ShallowState,
    g: f64,
    h_dry: f64,
) -> ShallowState {
    rusanov_flux_x(&bottom.swap_momentum(), &top.swap_momentum(), g, h_dry).swap_momentum()
}
