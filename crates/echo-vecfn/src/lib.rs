// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! echo-vecfn: flat vector functions over `f64` slices.
//!
//! Vectors are plain ordered sequences of `f64`; nothing in the type system
//! distinguishes a 2D vector from a 3D one except where an operation only
//! makes sense for a fixed dimension (`cross`, `angle`, `orth2`, ...), which
//! take `[f64; 2]` / `[f64; 3]`.
//!
//! Output policy is part of every function's contract and differs per
//! operation:
//! - **mutate-left** (`add`, `scale`, `norm`, ...): the first operand is
//!   overwritten and handed back.
//! - **write-into** (`add_into`, `vec_into`, ...): the result lands in a
//!   caller-supplied buffer. `Vec` targets that are empty are resized to the
//!   operand length first; a non-empty target is never resized.
//! - **allocating** (`vec`, `descr`, `dir`, `seq`, ...): a fresh buffer is
//!   returned and no input is touched.
//!
//! Length preconditions are `debug_assert!`ed only. Hot loops stay free of
//! runtime validation; [`ensure_same_dims`] exists for callers that want it.
#![forbid(unsafe_code)]

pub mod angle;
pub mod arith;
pub mod consts;
pub mod error;
pub mod geom;
pub mod interp;
pub mod param;
pub mod shaping;

mod target;

pub use angle::{angle, angle2, angle_from, deg, nrad, orth2, orth2_into, rad, Axis};
pub use arith::{
    add, add_all, add_all_into, add_into, add_scaled, add_scaled_into, ensure_same_dims, norm,
    norm_into, scalar, scale, scale_into, sub, sub_all, sub_all_into, sub_into, sub_scaled,
    sub_scaled_into, sumsqr,
};
pub use consts::{DEG2RAD, RAD2DEG, TAU};
pub use error::MathError;
pub use geom::{
    cross, cross2, cross_assign, cross_into, descr, descr_into, dir, dir_into, dist, dot,
    is_null_vec, triple, vec, vec_into, Descriptor,
};
pub use interp::{lerp, mix, mix_into, seq, seq_i, seq_span, seq_vec, seq_vec_span, try_seq};
pub use param::{Broadcast, Operand};
pub use shaping::{
    clamp, clamp_array, clamp_array_into, clamp_value, round, round_slice, round_value, saturate,
    smoothstep, step, step_array, step_array_into, step_value, DEFAULT_ROUND_DIGITS,
};
