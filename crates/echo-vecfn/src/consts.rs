// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Angular constants shared by the conversion helpers.

pub use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// Multiply degrees by this to get radians (`π / 180`).
pub const DEG2RAD: f64 = PI / 180.0;

/// Multiply radians by this to get degrees (`180 / π`).
pub const RAD2DEG: f64 = 180.0 / PI;
