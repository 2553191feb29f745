//! Graph module: node records and the validated, immutable node graph.
//!
//! Leaf module: does not import from `values`, `operators`, or `proof`.

pub mod build;
pub mod node;
