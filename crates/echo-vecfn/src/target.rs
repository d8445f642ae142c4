// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Sizing rule for caller-supplied `Vec` targets.

/// Resizes an empty `target` to `len` elements of `fill`.
///
/// A non-empty target is left alone: targets are sized all-or-nothing, never
/// grown or shrunk to fit.
pub(crate) fn fit_target(target: &mut Vec<f64>, len: usize, fill: f64) {
    if target.is_empty() {
        target.resize(len, fill);
    }
}
