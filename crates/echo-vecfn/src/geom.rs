// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Point/vector geometry and products.
//!
//! The point functions (`vec`, `descr`, `dir`, `dist`) never mutate their
//! inputs: the difference is built in a fresh copy of `to`, or in the
//! caller's target for the `_into` forms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::arith::{norm, scalar, scale, sub, sumsqr};
use crate::target::fit_target;

/// Relationship between two points, as computed by [`descr`].
///
/// `V` is the storage of the difference vector: an owned `Vec<f64>` for
/// [`descr`], the caller's buffer for [`descr_into`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Descriptor<V = Vec<f64>> {
    /// Vector from the start point to the end point.
    pub vector: V,
    /// Squared distance between the points.
    pub sqr: f64,
    /// Distance between the points.
    pub dist: f64,
    /// `vector` scaled to unit length (zero for coincident points). Always a
    /// separate allocation; never aliases `vector`.
    pub unit: Vec<f64>,
}

/// Vector from point `from` to point `to`, in a fresh allocation.
pub fn vec(from: &[f64], to: &[f64]) -> Vec<f64> {
    let mut target = to.to_vec();
    sub(&mut target, from);
    target
}

/// Writes the vector from `from` to `to` into `target`.
///
/// An empty `target` is resized to `to.len()`.
pub fn vec_into<'t>(from: &[f64], to: &[f64], target: &'t mut Vec<f64>) -> &'t mut [f64] {
    fit_target(target, to.len(), 0.0);
    for (i, value) in target.iter_mut().enumerate() {
        *value = to[i];
    }
    sub(target, from)
}

fn describe<V: AsRef<[f64]>>(vector: V) -> Descriptor<V> {
    let components = vector.as_ref();
    let sqr = sumsqr(components);
    let dist = sqr.sqrt();
    let mut unit = components.to_vec();
    scale(&mut unit, if dist > 0.0 { 1.0 / dist } else { 0.0 });
    Descriptor {
        vector,
        sqr,
        dist,
        unit,
    }
}

/// Describes the segment between two points.
pub fn descr(from: &[f64], to: &[f64]) -> Descriptor {
    describe(vec(from, to))
}

/// Like [`descr`], but the difference vector is written into `target` and
/// borrowed by the returned descriptor.
pub fn descr_into<'t>(
    from: &[f64],
    to: &[f64],
    target: &'t mut Vec<f64>,
) -> Descriptor<&'t mut [f64]> {
    describe(vec_into(from, to, target))
}

/// Unit vector pointing from `from` towards `to`.
pub fn dir(from: &[f64], to: &[f64]) -> Vec<f64> {
    let mut target = vec(from, to);
    norm(&mut target);
    target
}

/// Writes the unit vector from `from` towards `to` into `target`.
pub fn dir_into<'t>(from: &[f64], to: &[f64], target: &'t mut Vec<f64>) -> &'t mut [f64] {
    norm(vec_into(from, to, target))
}

/// Euclidean distance between two points.
pub fn dist(p1: &[f64], p2: &[f64]) -> f64 {
    scalar(&vec(p1, p2))
}

/// Dot product of two vectors of equal length.
pub fn dot(v1: &[f64], v2: &[f64]) -> f64 {
    debug_assert_eq!(v1.len(), v2.len(), "operand length mismatch");
    v1.iter()
        .enumerate()
        .fold(0.0, |sum, (i, c)| sum + c * v2[i])
}

/// Cross product of two 3D vectors.
pub fn cross(v1: &[f64; 3], v2: &[f64; 3]) -> [f64; 3] {
    let [ax, ay, az] = *v1;
    let [bx, by, bz] = *v2;
    [ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx]
}

/// Writes the cross product of `v1` and `v2` into `target`.
pub fn cross_into<'t>(
    v1: &[f64; 3],
    v2: &[f64; 3],
    target: &'t mut [f64; 3],
) -> &'t mut [f64; 3] {
    *target = cross(v1, v2);
    target
}

/// Replaces `v1` with `v1 × v2`.
///
/// Both operands are read in full before `v1` is written, so the result is
/// the same as [`cross`].
pub fn cross_assign<'a>(v1: &'a mut [f64; 3], v2: &[f64; 3]) -> &'a mut [f64; 3] {
    *v1 = cross(v1, v2);
    v1
}

/// Scalar triple product `v1 · (v2 × v3)`: the signed volume of the
/// parallelepiped spanned by the three vectors.
pub fn triple(v1: &[f64; 3], v2: &[f64; 3], v3: &[f64; 3]) -> f64 {
    dot(v1, &cross(v2, v3))
}

/// 2D pseudo cross product: signed area of the parallelogram spanned by
/// `v1` and `v2`.
pub fn cross2(v1: &[f64; 2], v2: &[f64; 2]) -> f64 {
    v1[0] * v2[1] - v1[1] * v2[0]
}

/// Tests whether every component is zero.
///
/// With `epsilon == 0.0` the test is exact. Otherwise each component must
/// satisfy `|c| <= epsilon` independently (a per-component bound, not a
/// bound on the vector's length).
pub fn is_null_vec(v: &[f64], epsilon: f64) -> bool {
    if epsilon == 0.0 {
        v.iter().all(|&c| c == 0.0)
    } else {
        v.iter().all(|&c| c.abs() - epsilon <= 0.0)
    }
}
