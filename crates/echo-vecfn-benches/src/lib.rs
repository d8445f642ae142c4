// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Shared fixtures for the echo-vecfn benchmarks.

/// Builds `n` deterministic points of dimension `dim`.
///
/// Values follow a fixed arithmetic pattern so runs are comparable without a
/// PRNG.
#[allow(clippy::cast_precision_loss)]
pub fn points(n: usize, dim: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| {
            (0..dim)
                .map(|d| ((i * 31 + d * 7) % 97) as f64 * 0.25 - 12.0)
                .collect()
        })
        .collect()
}
