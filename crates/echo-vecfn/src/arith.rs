// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Component-wise arithmetic, accumulation, scaling and normalisation.
//!
//! Binary operations come in two shapes:
//! - `op(left, right)` overwrites `left` and returns it (mutate-left).
//! - `op_into(left, right, target)` writes `target` only. An empty `target`
//!   is resized to `left.len()` first; a sized one is iterated as-is, so its
//!   length must not exceed the operands'.
//!
//! Operands are expected to share one length. That is checked with
//! `debug_assert!` only; in release builds a shorter right operand panics on
//! indexing and a longer one is read up to the left operand's length.

use tracing::trace;

use crate::error::MathError;
use crate::target::fit_target;

fn assign_with(left: &mut [f64], right: &[f64], op: impl Fn(f64, f64) -> f64) {
    debug_assert_eq!(left.len(), right.len(), "operand length mismatch");
    for (i, value) in left.iter_mut().enumerate() {
        *value = op(*value, right[i]);
    }
}

fn write_with(
    left: &[f64],
    right: &[f64],
    target: &mut Vec<f64>,
    op: impl Fn(f64, f64) -> f64,
) {
    debug_assert_eq!(left.len(), right.len(), "operand length mismatch");
    fit_target(target, left.len(), 0.0);
    for (i, value) in target.iter_mut().enumerate() {
        *value = op(left[i], right[i]);
    }
}

/// Checks that two operands have the same number of components.
///
/// None of the arithmetic functions call this; it is the opt-in guard for
/// callers handling untrusted input.
pub fn ensure_same_dims(a: &[f64], b: &[f64]) -> Result<(), MathError> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(MathError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        })
    }
}

/// `to[i] += from[i]`; returns `to`.
pub fn add<'a>(to: &'a mut [f64], from: &[f64]) -> &'a mut [f64] {
    assign_with(to, from, |a, b| a + b);
    to
}

/// `target[i] = to[i] + from[i]`; the previous contents of `target` are
/// overwritten, not summed.
pub fn add_into<'t>(to: &[f64], from: &[f64], target: &'t mut Vec<f64>) -> &'t mut [f64] {
    write_with(to, from, target, |a, b| a + b);
    target.as_mut_slice()
}

/// `to[i] += from[i] * factor`; returns `to`.
pub fn add_scaled<'a>(to: &'a mut [f64], from: &[f64], factor: f64) -> &'a mut [f64] {
    assign_with(to, from, |a, b| a + b * factor);
    to
}

/// `target[i] = to[i] + from[i] * factor`.
pub fn add_scaled_into<'t>(
    to: &[f64],
    from: &[f64],
    factor: f64,
    target: &'t mut Vec<f64>,
) -> &'t mut [f64] {
    write_with(to, from, target, |a, b| a + b * factor);
    target.as_mut_slice()
}

/// `from[i] -= vector[i]`; returns `from`.
pub fn sub<'a>(from: &'a mut [f64], vector: &[f64]) -> &'a mut [f64] {
    assign_with(from, vector, |a, b| a - b);
    from
}

/// `target[i] = from[i] - vector[i]`.
pub fn sub_into<'t>(from: &[f64], vector: &[f64], target: &'t mut Vec<f64>) -> &'t mut [f64] {
    write_with(from, vector, target, |a, b| a - b);
    target.as_mut_slice()
}

/// `from[i] -= vector[i] * factor`; returns `from`.
pub fn sub_scaled<'a>(from: &'a mut [f64], vector: &[f64], factor: f64) -> &'a mut [f64] {
    assign_with(from, vector, |a, b| a - b * factor);
    from
}

/// `target[i] = from[i] - vector[i] * factor`.
pub fn sub_scaled_into<'t>(
    from: &[f64],
    vector: &[f64],
    factor: f64,
    target: &'t mut Vec<f64>,
) -> &'t mut [f64] {
    write_with(from, vector, target, |a, b| a - b * factor);
    target.as_mut_slice()
}

/// Sums every vector into the first one and returns it.
///
/// Returns `None` for an empty set.
pub fn add_all<V>(vectors: &mut [V]) -> Option<&mut [f64]>
where
    V: AsRef<[f64]> + AsMut<[f64]>,
{
    let Some((first, rest)) = vectors.split_first_mut() else {
        trace!("add_all called with an empty set");
        return None;
    };
    let acc = first.as_mut();
    for vector in &*rest {
        for (j, value) in vector.as_ref().iter().enumerate() {
            acc[j] += value;
        }
    }
    Some(acc)
}

/// Adds every vector into `target`, which is treated as a running sum.
///
/// On the first vector, non-finite entries of `target` (`NaN`, `±∞`) are
/// overwritten instead of added, so a target filled with `NaN` placeholders
/// behaves like a zeroed accumulator. An empty `target` is resized with such
/// placeholders to the first vector's length.
pub fn add_all_into<'t, V: AsRef<[f64]>>(
    vectors: &[V],
    target: &'t mut Vec<f64>,
) -> &'t mut [f64] {
    if let Some(first) = vectors.first() {
        fit_target(target, first.as_ref().len(), f64::NAN);
    }
    for (i, vector) in vectors.iter().enumerate() {
        for (j, &value) in vector.as_ref().iter().enumerate() {
            if i == 0 && !target[j].is_finite() {
                target[j] = value;
            } else {
                target[j] += value;
            }
        }
    }
    target.as_mut_slice()
}

/// Subtracts every vector from `from` in place and returns it.
pub fn sub_all<'a, V: AsRef<[f64]>>(from: &'a mut [f64], vectors: &[V]) -> &'a mut [f64] {
    for vector in vectors {
        for (j, value) in vector.as_ref().iter().enumerate() {
            from[j] -= value;
        }
    }
    from
}

/// `target = from - vectors[0] - vectors[1] - ...`.
///
/// The first pass assigns, so stale `target` contents never leak into the
/// result. Unlike [`add_all_into`] there is no non-finite special case. With
/// no vectors, `target` receives a copy of `from`.
pub fn sub_all_into<'t, V: AsRef<[f64]>>(
    from: &[f64],
    vectors: &[V],
    target: &'t mut Vec<f64>,
) -> &'t mut [f64] {
    fit_target(target, from.len(), 0.0);
    if vectors.is_empty() {
        for (i, value) in target.iter_mut().enumerate() {
            *value = from[i];
        }
    }
    for (i, vector) in vectors.iter().enumerate() {
        for (j, &value) in vector.as_ref().iter().enumerate() {
            if i == 0 {
                target[j] = from[j] - value;
            } else {
                target[j] -= value;
            }
        }
    }
    target.as_mut_slice()
}

/// Multiplies every component by `factor` in place.
pub fn scale(arr: &mut [f64], factor: f64) -> &mut [f64] {
    for value in &mut *arr {
        *value *= factor;
    }
    arr
}

/// `target[i] = arr[i] * factor` for every index of `arr`.
///
/// An empty `target` is resized to `arr.len()`.
///
/// # Panics
/// Panics if a sized `target` is shorter than `arr`.
pub fn scale_into<'t>(arr: &[f64], factor: f64, target: &'t mut Vec<f64>) -> &'t mut [f64] {
    fit_target(target, arr.len(), 0.0);
    for (i, value) in arr.iter().enumerate() {
        target[i] = value * factor;
    }
    target.as_mut_slice()
}

/// Sum of squared components.
pub fn sumsqr(arr: &[f64]) -> f64 {
    arr.iter().fold(0.0, |sum, v| sum + v * v)
}

/// Euclidean length. Exactly `0.0` when every component is zero.
pub fn scalar(vector: &[f64]) -> f64 {
    let sq = sumsqr(vector);
    if sq == 0.0 {
        return 0.0;
    }
    sq.sqrt()
}

fn norm_factor(vector: &[f64]) -> f64 {
    let len = scalar(vector);
    if len == 0.0 {
        0.0
    } else {
        1.0 / len
    }
}

/// Scales `vector` to unit length in place. The zero vector stays zero.
pub fn norm(vector: &mut [f64]) -> &mut [f64] {
    let factor = norm_factor(vector);
    scale(vector, factor)
}

/// Writes the unit vector of `vector` into `target`, sized like
/// [`scale_into`].
pub fn norm_into<'t>(vector: &[f64], target: &'t mut Vec<f64>) -> &'t mut [f64] {
    scale_into(vector, norm_factor(vector), target)
}
