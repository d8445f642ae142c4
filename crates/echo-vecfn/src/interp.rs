// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Interpolation and evenly spaced sampling.

use tracing::warn;

use crate::error::MathError;
use crate::param::Broadcast;
use crate::shaping::saturate;

/// Linear interpolation from `a` to `b`, with `t` clamped to `[0, 1]` so the
/// result never leaves the segment.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let m = saturate(t);
    a * (1.0 - m) + b * m
}

/// Element-wise [`lerp`] from `a` towards `b`, written back into `a`.
///
/// `t` is broadcast or given per element.
pub fn mix<'a, 't>(a: &'a mut [f64], b: &[f64], t: impl Into<Broadcast<'t>>) -> &'a mut [f64] {
    let t = t.into();
    for (i, value) in a.iter_mut().enumerate() {
        *value = lerp(*value, b[i], t.at(i));
    }
    a
}

/// Element-wise [`lerp`] written into `target`, one per target slot.
pub fn mix_into<'o, 't>(
    a: &[f64],
    b: &[f64],
    t: impl Into<Broadcast<'t>>,
    target: &'o mut [f64],
) -> &'o mut [f64] {
    let t = t.into();
    for (i, value) in target.iter_mut().enumerate() {
        *value = lerp(a[i], b[i], t.at(i));
    }
    target
}

/// Evaluates `eval` at `steps` evenly spaced parameters from `start` to
/// `end`, both inclusive. The last sample is always taken at exactly `end`.
///
/// Fewer than two steps cannot span a range; they yield the single sample
/// at `end`.
#[allow(clippy::cast_precision_loss)]
fn sample<T>(steps: usize, start: f64, end: f64, mut eval: impl FnMut(f64) -> T) -> Vec<T> {
    if steps < 2 {
        warn!(steps, "sequence requested with fewer than two steps");
    }
    let incr = (end - start) / (steps as f64 - 1.0);
    let mut out = Vec::with_capacity(steps.max(1));
    for i in 0..steps.saturating_sub(1) {
        out.push(eval(start + i as f64 * incr));
    }
    out.push(eval(end));
    out
}

/// `steps` values interpolated from `from` to `to`.
///
/// ```
/// assert_eq!(echo_vecfn::seq(0.0, 1.0, 5), [0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
///
/// `steps` should be at least 2; see [`try_seq`] for the checked form.
pub fn seq(from: f64, to: f64, steps: usize) -> Vec<f64> {
    seq_span(from, to, steps, 0.0, 1.0)
}

/// Like [`seq`], but samples the interpolation parameter over
/// `[start, end]` instead of `[0, 1]`.
pub fn seq_span(from: f64, to: f64, steps: usize, start: f64, end: f64) -> Vec<f64> {
    sample(steps, start, end, |t| lerp(from, to, t))
}

/// `steps` vectors interpolated element-wise from `from` to `to`. Every
/// sample is a fresh allocation.
pub fn seq_vec(from: &[f64], to: &[f64], steps: usize) -> Vec<Vec<f64>> {
    seq_vec_span(from, to, steps, 0.0, 1.0)
}

/// Like [`seq_vec`], over the parameter range `[start, end]`.
pub fn seq_vec_span(
    from: &[f64],
    to: &[f64],
    steps: usize,
    start: f64,
    end: f64,
) -> Vec<Vec<f64>> {
    sample(steps, start, end, |t| {
        let mut point = from.to_vec();
        mix(&mut point, to, t);
        point
    })
}

/// `steps` evenly spaced values from 0 to 1.
pub fn seq_i(steps: usize) -> Vec<f64> {
    seq(0.0, 1.0, steps)
}

/// Checked [`seq`]: rejects fewer than two steps.
pub fn try_seq(from: f64, to: f64, steps: usize) -> Result<Vec<f64>, MathError> {
    if steps < 2 {
        return Err(MathError::TooFewSteps(steps));
    }
    Ok(seq(from, to, steps))
}
