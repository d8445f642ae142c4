// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar-or-sequence arguments.
//!
//! GLSL-style helpers accept either a single number or one number per
//! element. The variant is chosen once, at the call boundary, by converting
//! into one of these enums.

/// A read-only parameter that is either broadcast or given per element.
///
/// Used for the threshold of [`crate::step_array`] and the blend factor of
/// [`crate::mix`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Broadcast<'a> {
    /// One value applied to every element.
    Scalar(f64),
    /// One value per element, indexed alongside the operand.
    Each(&'a [f64]),
}

impl Broadcast<'_> {
    /// Returns the value that applies to element `idx`.
    ///
    /// # Panics
    /// Panics if this is [`Broadcast::Each`] and `idx` is out of bounds.
    #[inline]
    pub fn at(&self, idx: usize) -> f64 {
        match self {
            Self::Scalar(value) => *value,
            Self::Each(values) => values[idx],
        }
    }

    /// The value for the first element, or `None` for an empty
    /// [`Broadcast::Each`].
    #[inline]
    pub fn first(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::Each(values) => values.first().copied(),
        }
    }
}

impl From<f64> for Broadcast<'_> {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl<'a> From<&'a [f64]> for Broadcast<'a> {
    fn from(values: &'a [f64]) -> Self {
        Self::Each(values)
    }
}

impl<'a> From<&'a Vec<f64>> for Broadcast<'a> {
    fn from(values: &'a Vec<f64>) -> Self {
        Self::Each(values.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Broadcast<'a> {
    fn from(values: &'a [f64; N]) -> Self {
        Self::Each(values.as_slice())
    }
}

/// A mutable argument of the dispatching entry points ([`crate::clamp`],
/// [`crate::step`], [`crate::round`]).
///
/// Scalars are returned as new values; sequences are rewritten in place and
/// handed back in the same variant.
#[derive(Debug, PartialEq)]
pub enum Operand<'a> {
    /// A single number.
    Scalar(f64),
    /// A sequence that the operation mutates in place.
    Sequence(&'a mut [f64]),
}

impl<'a> Operand<'a> {
    /// Returns the number if this is a scalar.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::Sequence(_) => None,
        }
    }

    /// Borrows the sequence if this is one.
    pub fn as_slice(&self) -> Option<&[f64]> {
        match self {
            Self::Scalar(_) => None,
            Self::Sequence(values) => Some(&**values),
        }
    }

    /// Unwraps the mutable sequence if this is one.
    pub fn into_sequence(self) -> Option<&'a mut [f64]> {
        match self {
            Self::Scalar(_) => None,
            Self::Sequence(values) => Some(values),
        }
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl<'a> From<&'a mut [f64]> for Operand<'a> {
    fn from(values: &'a mut [f64]) -> Self {
        Self::Sequence(values)
    }
}

impl<'a> From<&'a mut Vec<f64>> for Operand<'a> {
    fn from(values: &'a mut Vec<f64>) -> Self {
        Self::Sequence(values.as_mut_slice())
    }
}

impl<'a, const N: usize> From<&'a mut [f64; N]> for Operand<'a> {
    fn from(values: &'a mut [f64; N]) -> Self {
        Self::Sequence(values.as_mut_slice())
    }
}
