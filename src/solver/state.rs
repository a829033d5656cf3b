//! Per-cell state vectors and variable reconstruction.
//!
//! The scheme advances conserved variables `(h, hu, hv)` and stores
//! primitive variables `(h, u, v)`. [`primitive_from_conserved`] is the only
//! place that divides by depth: cells with `h < h_dry` come back as the
//! exact zero state.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Conserved shallow water state: (h, hu, hv).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShallowState {
    /// Water depth h
    pub h: f64,
    /// x-discharge hu = h * u
    pub hu: f64,
    /// y-discharge hv = h * v
    pub hv: f64,
}

impl ShallowState {
    /// Create a new state.
    #[inline(always)]
    pub fn new(h: f64, hu: f64, hv: f64) -> Self {
        Self { h, hu, hv }
    }

    /// Create a zero state.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::default()
    }

    /// True if `h < h_dry`.
    #[inline(always)]
    pub fn is_dry(&self, h_dry: f64) -> bool {
        self.h < h_dry
    }

    /// Velocity `(u, v)`, or `(0, 0)` for a dry state.
    #[inline(always)]
    pub fn velocity(&self, h_dry: f64) -> (f64, f64) {
        if self.is_dry(h_dry) {
            (0.0, 0.0)
        } else {
            let h_inv = 1.0 / self.h;
            (self.hu * h_inv, self.hv * h_inv)
        }
    }

    /// Mirror image across an x-normal wall (hu negated).
    #[inline(always)]
    pub fn reflect_x(&self) -> Self {
        Self::new(self.h, -self.hu, self.hv)
    }

    /// Mirror image across a y-normal wall (hv negated).
    #[inline(always)]
    pub fn reflect_y(&self) -> Self {
        Self::new(self.h, self.hu, -self.hv)
    }

    /// Swap the two momentum components.
    ///
    /// Rotates a y-direction problem onto the x-direction flux.
    #[inline(always)]
    pub fn swap_momentum(&self) -> Self {
        Self::new(self.h, self.hv, self.hu)
    }

    /// Convert to array representation [h, hu, hv].
    #[inline(always)]
    pub fn to_array(&self) -> [f64; 3] {
        [self.h, self.hu, self.hv]
    }

    /// True if all components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.h.is_finite() && self.hu.is_finite() && self.hv.is_finite()
    }
}

impl Add for ShallowState {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            h: self.h + other.h,
            hu: self.hu + other.hu,
            hv: self.hv + other.hv,
        }
    }
}

impl Sub for ShallowState {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            h: self.h - other.h,
            hu: self.hu - other.hu,
            hv: self.hv - other.hv,
        }
    }
}

impl Mul<f64> for ShallowState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            h: self.h * scalar,
            hu: self.hu * scalar,
            hv: self.hv * scalar,
        }
    }
}

impl Mul<ShallowState> for f64 {
    type Output = ShallowState;

    fn mul(self, state: ShallowState) -> ShallowState {
        state * self
    }
}

impl Neg for ShallowState {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.h, -self.hu, -self.hv)
    }
}

/// Primitive variables: depth and velocity components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    /// Water depth [m]
    pub h: f64,
    /// x-velocity [m/s]
    pub u: f64,
    /// y-velocity [m/s]
    pub v: f64,
}

impl Primitive {
    /// Create from depth and velocity.
    #[inline(always)]
    pub fn new(h: f64, u: f64, v: f64) -> Self {
        Self { h, u, v }
    }

    /// Velocity magnitude.
    #[inline]
    pub fn speed(&self) -> f64 {
        (self.u * self.u + self.v * self.v).sqrt()
    }

    /// Froude number `|u| / sqrt(g h)`, zero for dry cells.
    pub fn froude_number(&self, g: f64, h_dry: f64) -> f64 {
        if self.h < h_dry {
            0.0
        } else {
            self.speed() / (g * self.h).sqrt()
        }
    }
}

/// `(h, u, v) -> (h, hu, hv)`.
#[inline(always)]
pub fn conserved_from_primitive(p: Primitive) -> ShallowState {
    ShallowState::new(p.h, p.h * p.u, p.h * p.v)
}

/// `(h, hu, hv) -> (h, u, v)`, forcing `(0, 0, 0)` when `h < h_dry`.
///
/// Negative depths fall below the threshold too, so the result always has
/// `h >= 0` or `h` NaN; NaN passes through to be caught by the
/// non-finite scan.
#[inline(always)]
pub fn primitive_from_conserved(state: ShallowState, h_dry: f64) -> Primitive {
    if state.h < h_dry {
        Primitive::default()
    } else {
        let h_inv = 1.0 / state.h;
        Primitive::new(state.h, state.hu * h_inv, state.hv * h_inv)
    }
}
