// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! GLSL-style value shaping: `clamp`, `step`, `smoothstep`, plus decimal
//! rounding.
//!
//! Each shaper exists as a scalar function (`*_value`), a slice function
//! (`*_array`, mutate-left, with an `_into` form) and a dispatching entry
//! point that takes an [`Operand`].

use crate::param::{Broadcast, Operand};

/// Number of fractional digits used when a caller has no preference.
pub const DEFAULT_ROUND_DIGITS: i32 = 1;

/// Returns `min` below the range, `max` above it, `value` otherwise.
///
/// `NaN` passes through unchanged.
#[inline]
pub fn clamp_value(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Clamps to `[0, 1]`.
#[inline]
pub fn saturate(value: f64) -> f64 {
    clamp_value(value, 0.0, 1.0)
}

/// Clamps every element of `arr` in place.
pub fn clamp_array(arr: &mut [f64], min: f64, max: f64) -> &mut [f64] {
    for value in &mut *arr {
        *value = clamp_value(*value, min, max);
    }
    arr
}

/// Writes the clamped elements of `arr` into `target`, one per target slot.
///
/// Values are read from `arr`; the previous contents of `target` are ignored.
pub fn clamp_array_into<'t>(
    arr: &[f64],
    min: f64,
    max: f64,
    target: &'t mut [f64],
) -> &'t mut [f64] {
    for (i, value) in target.iter_mut().enumerate() {
        *value = clamp_value(arr[i], min, max);
    }
    target
}

/// Clamps a scalar or, in place, a sequence.
///
/// ```
/// use echo_vecfn::{clamp, Operand};
///
/// assert_eq!(clamp(1.25, 0.0, 1.0), Operand::Scalar(1.0));
///
/// let mut v = [1.0, 2.0, 3.0, 4.0];
/// clamp(&mut v, 1.25, 3.5);
/// assert_eq!(v, [1.25, 2.0, 3.0, 3.5]);
/// ```
pub fn clamp<'a>(arg: impl Into<Operand<'a>>, min: f64, max: f64) -> Operand<'a> {
    match arg.into() {
        Operand::Scalar(value) => Operand::Scalar(clamp_value(value, min, max)),
        Operand::Sequence(values) => Operand::Sequence(clamp_array(values, min, max)),
    }
}

/// GLSL `step`: `1.0` if `x >= edge`, else `0.0`.
#[inline]
pub fn step_value(edge: f64, x: f64) -> f64 {
    if x >= edge {
        1.0
    } else {
        0.0
    }
}

/// Replaces every edge with `step_value(edge, x)`, where `x` is broadcast or
/// given per element.
pub fn step_array<'a, 'x>(edges: &'a mut [f64], x: impl Into<Broadcast<'x>>) -> &'a mut [f64] {
    let x = x.into();
    for (i, edge) in edges.iter_mut().enumerate() {
        *edge = step_value(*edge, x.at(i));
    }
    edges
}

/// Writes `step_value(edges[i], x[i])` into `target`, one per target slot.
///
/// Edges are read from `edges`; the previous contents of `target` are ignored.
pub fn step_array_into<'t, 'x>(
    edges: &[f64],
    x: impl Into<Broadcast<'x>>,
    target: &'t mut [f64],
) -> &'t mut [f64] {
    let x = x.into();
    for (i, value) in target.iter_mut().enumerate() {
        *value = step_value(edges[i], x.at(i));
    }
    target
}

/// GLSL `step` over a scalar or, in place, a sequence of edges.
///
/// A scalar edge is compared against the first value of `x`; an empty
/// per-element `x` compares as `0.0`.
pub fn step<'a, 'x>(edge: impl Into<Operand<'a>>, x: impl Into<Broadcast<'x>>) -> Operand<'a> {
    let x = x.into();
    match edge.into() {
        Operand::Scalar(edge) => Operand::Scalar(step_value(edge, x.first().unwrap_or(0.0))),
        Operand::Sequence(edges) => Operand::Sequence(step_array(edges, x)),
    }
}

/// GLSL `smoothstep`: cubic Hermite ramp from 0 at `edge0` to 1 at `edge1`.
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = saturate((x - edge0) / (edge1 - edge0));
    t * t * (3.0 - 2.0 * t)
}

/// Rounds to the nearest integer, ties towards `+∞`; results of zero keep
/// the sign of the input.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    if rounded == 0.0 {
        0.0_f64.copysign(x)
    } else {
        rounded
    }
}

/// Rounds `v` to `digits` fractional digits and returns the new value.
pub fn round_value(v: f64, digits: i32) -> f64 {
    let f = 10.0_f64.powi(digits);
    round_half_up(v * f) / f
}

/// Rounds every element of `v` in place.
pub fn round_slice(v: &mut [f64], digits: i32) -> &mut [f64] {
    for value in &mut *v {
        *value = round_value(*value, digits);
    }
    v
}

/// Rounds a scalar (returning a new value) or a sequence (in place).
pub fn round<'a>(v: impl Into<Operand<'a>>, digits: i32) -> Operand<'a> {
    match v.into() {
        Operand::Scalar(value) => Operand::Scalar(round_value(value, digits)),
        Operand::Sequence(values) => Operand::Sequence(round_slice(values, digits)),
    }
}
