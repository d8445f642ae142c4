// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Angles: axis-aligned and polar angles, the 2D perpendicular, and
//! degree/radian conversion. All angles are radians unless a name says
//! otherwise.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arith::norm;
use crate::consts::{DEG2RAD, RAD2DEG, TAU};
use crate::error::MathError;

/// Coordinate axis of a 3D vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Component 0.
    X,
    /// Component 1.
    Y,
    /// Component 2.
    Z,
}

impl TryFrom<usize> for Axis {
    type Error = MathError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::X),
            1 => Ok(Self::Y),
            2 => Ok(Self::Z),
            other => Err(MathError::AxisOutOfRange(other)),
        }
    }
}

/// Angle between a 3D vector and the axis with index `axis` (0 = X, 1 = Y,
/// 2 = Z).
///
/// Returns `None` when `axis` is not 0, 1 or 2.
pub fn angle(vector: &[f64; 3], axis: usize) -> Option<f64> {
    match Axis::try_from(axis) {
        Ok(axis) => Some(angle_from(vector, axis)),
        Err(err) => {
            debug!(%err, "angle requested for an unknown axis");
            None
        }
    }
}

/// Angle between a 3D vector and `axis`, in `[0, π]`.
///
/// Computed as `atan2(|perpendicular part|, component along axis)`.
pub fn angle_from(vector: &[f64; 3], axis: Axis) -> f64 {
    let [x, y, z] = *vector;
    let (a, b, c) = match axis {
        Axis::X => (y, z, x),
        Axis::Y => (x, z, y),
        Axis::Z => (x, y, z),
    };
    (a * a + b * b).sqrt().atan2(c)
}

/// Polar angle of a 2D vector, `atan2(y, x)`.
pub fn angle2(vector: &[f64; 2]) -> f64 {
    vector[1].atan2(vector[0])
}

/// Rotates a 2D vector by 90° counter-clockwise and normalises it, in place.
pub fn orth2(vector: &mut [f64; 2]) -> &mut [f64; 2] {
    let x = -vector[1];
    vector[1] = vector[0];
    vector[0] = x;
    norm(vector.as_mut_slice());
    vector
}

/// Writes the normalised, 90° counter-clockwise rotation of `vector` into
/// `target`.
pub fn orth2_into<'t>(vector: &[f64; 2], target: &'t mut [f64; 2]) -> &'t mut [f64; 2] {
    *target = [-vector[1], vector[0]];
    norm(target.as_mut_slice());
    target
}

/// Degrees to radians.
#[inline]
pub fn rad(d: f64) -> f64 {
    d * DEG2RAD
}

/// Radians to degrees.
#[inline]
pub fn deg(r: f64) -> f64 {
    r * RAD2DEG
}

/// Wraps an angle into `[0, TAU)`.
///
/// Negative remainders are shifted up by a full turn. An exact negative
/// multiple of `TAU` yields `-0.0`; the sign of zero is kept.
pub fn nrad(r: f64) -> f64 {
    let v = r % TAU;
    if v < 0.0 {
        v + TAU
    } else {
        v
    }
}
