// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Error type for the few operations that validate their input.

use thiserror::Error;

/// Errors surfaced by the checked entry points.
///
/// The unchecked functions never produce these; they document their
/// preconditions instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// An axis index outside `0..=2` was supplied.
    #[error("axis {0} is out of range (expected 0, 1 or 2)")]
    AxisOutOfRange(usize),
    /// Two operands disagree on their number of components.
    #[error("dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch {
        /// Length of the left operand.
        expected: usize,
        /// Length of the right operand.
        actual: usize,
    },
    /// A sampled sequence needs at least two steps to span its range.
    #[error("sequence needs at least two steps, got {0}")]
    TooFewSteps(usize),
}
