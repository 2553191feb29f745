//! `apply_forward()`: execute one node's effect on a value vector.
//!
//! Forward semantics are the meaning of a solved path. The search never
//! runs them; replay does, to confirm a reverse-walk result.

use crate::graph::node::{NodeKind, NodeV1};
use crate::values::ValueVector;

/// A value emitted by a print node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintedValueV1 {
    Integer(i64),
    /// A unicode scalar. Values that are not valid scalars print as
    /// `U+FFFD`.
    Unicode(char),
}

impl std::fmt::Display for PrintedValueV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Unicode(c) => write!(f, "{c}"),
        }
    }
}

/// The outcome of executing one node forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardStep {
    pub values: ValueVector,
    pub printed: Option<PrintedValueV1>,
}

/// The signed amount forward execution adds to `values[node.lhs]`.
#[must_use]
pub fn forward_delta(node: &NodeV1, values: &[i64]) -> i64 {
    match node.kind {
        NodeKind::Add => node.rhs.resolve(values),
        NodeKind::Subtract => node.rhs.resolve(values).wrapping_neg(),
        NodeKind::CondIncrement if node.rhs.resolve(values) > 0 => 1,
        NodeKind::CondDecrement if node.rhs.resolve(values) > 0 => -1,
        _ => 0,
    }
}

/// Execute `node` forward against `values`.
#[must_use]
pub fn apply_forward(node: &NodeV1, values: &[i64]) -> ForwardStep {
    let mut out = values.to_vec();
    let printed = match node.kind {
        kind if kind.is_arithmetic() => {
            out[node.lhs] = out[node.lhs].wrapping_add(forward_delta(node, values));
            None
        }
        NodeKind::PrintInteger => Some(PrintedValueV1::Integer(values[node.lhs])),
        NodeKind::PrintUnicode => {
            let scalar = u32::try_from(values[node.lhs])
                .ok()
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            Some(PrintedValueV1::Unicode(scalar))
        }
        _ => None,
    };
    ForwardStep {
        values: out,
        printed,
    }
}
