//! `invert_into()`: undo one node's forward effect on a value vector.
//!
//! The search walks from the end node toward the start node, so every
//! traversed operation is applied with its sign flipped:
//!
//! | kind            | inverse delta on `values[lhs]`   |
//! |-----------------|----------------------------------|
//! | `Add`           | `-rhs`                           |
//! | `Subtract`      | `+rhs`                           |
//! | `CondIncrement` | `-1` if `rhs > 0`, else `0`      |
//! | `CondDecrement` | `+1` if `rhs > 0`, else `0`      |
//! | everything else | identity                         |
//!
//! `rhs` is always resolved against the vector *before* the update.
//! Arithmetic wraps on overflow.

use crate::graph::node::{NodeKind, NodeV1};
use crate::values::ValueVector;

/// The signed amount [`invert_into`] adds to `values[node.lhs]`.
///
/// Returns `0` for identity kinds and for conditional kinds whose
/// condition is false.
#[must_use]
pub fn inverse_delta(node: &NodeV1, values: &[i64]) -> i64 {
    match node.kind {
        NodeKind::Add => node.rhs.resolve(values).wrapping_neg(),
        NodeKind::Subtract => node.rhs.resolve(values),
        NodeKind::CondIncrement if node.rhs.resolve(values) > 0 => -1,
        NodeKind::CondDecrement if node.rhs.resolve(values) > 0 => 1,
        NodeKind::CondIncrement
        | NodeKind::CondDecrement
        | NodeKind::Start
        | NodeKind::End
        | NodeKind::PrintInteger
        | NodeKind::PrintUnicode
        | NodeKind::NoOp => 0,
    }
}

/// Write the post-inversion vector for `node` into `out`.
///
/// `out` is cleared and refilled, so the engine can reuse one scratch
/// buffer across steps.
pub fn invert_into(node: &NodeV1, values: &[i64], out: &mut ValueVector) {
    out.clear();
    out.extend_from_slice(values);
    if node.kind.is_arithmetic() {
        let delta = inverse_delta(node, values);
        out[node.lhs] = out[node.lhs].wrapping_add(delta);
    }
}
