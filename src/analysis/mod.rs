//! Checks and reference solutions.
//!
//! - [`find_non_finite`], [`find_negative_depth`]: field sanity scans
//! - [`RitterDamBreak`]: analytic dry-bed dam-break for validation

mod dam_break;
mod stability;

pub use dam_break::RitterDamBreak;
pub use stability::{find_negative_depth, find_non_finite};
