//! Ritter's dam-break solution on a dry, frictionless, horizontal bed.
//!
//! A still column of depth `h0` occupies `x < x0` at `t = 0`. With
//! `c0 = sqrt(g h0)`, for `t > 0`:
//!
//! ```text
//! x < x0 - c0 t                 h = h0,                                u = 0
//! x0 - c0 t <= x <= x0 + 2 c0 t  h = (2 c0 - (x - x0)/t)² / (9 g),     u = 2/3 ((x - x0)/t + c0)
//! x > x0 + 2 c0 t               h = 0,                                 u = 0
//! ```
//!
//! Reference: Stoker, "Water Waves" (1957), ch. 10.

/// Analytic dry-bed dam-break.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RitterDamBreak {
    /// Initial depth behind the dam [m]
    pub h_left: f64,
    /// Dam position [m]
    pub x0: f64,
    /// Gravitational acceleration [m/s²]
    pub g: f64,
}

impl RitterDamBreak {
    /// Create a dam-break reference solution.
    pub fn new(h_left: f64, x0: f64, g: f64) -> Self {
        Self { h_left, x0, g }
    }

    /// Celerity of the still column `sqrt(g h0)`.
    pub fn celerity(&self) -> f64 {
        (self.g * self.h_left).sqrt()
    }

    /// Position of the wet/dry front, `x0 + 2 c0 t`.
    pub fn front_position(&self, t: f64) -> f64 {
        self.x0 + 2.0 * self.celerity() * t
    }

    /// Position of the rarefaction head, `x0 - c0 t`.
    pub fn rarefaction_head(&self, t: f64) -> f64 {
        self.x0 - self.celerity() * t
    }

    /// Depth and velocity `(h, u)` at `(x, t)`.
    pub fn solution(&self, x: f64, t: f64) -> (f64, f64) {
        if t <= 0.0 {
            return if x < self.x0 { (self.h_left, 0.0) } else { (0.0, 0.0) };
        }
        let c0 = self.celerity();
        if x < self.rarefaction_head(t) {
            (self.h_left, 0.0)
        } else if x <= self.front_position(t) {
            let xi = (x - self.x0) / t;
            let c = (2.0 * c0 - xi) / 3.0;
            (c * c / self.g, 2.0 / 3.0 * (xi + c0))
        } else {
            (0.0, 0.0)
        }
    }

    /// Depth at `(x, t)`.
    pub fn depth(&self, x: f64, t: f64) -> f64 {
        self.solution(x, t).0
    }
}
