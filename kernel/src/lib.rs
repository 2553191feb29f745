//! Revwalk Kernel: the pure core of the reverse-walk puzzle solver.
//!
//! # API Surface
//!
//! - [`graph::build::NodeGraphV1::build`] -- validate caller arrays into an immutable node graph
//! - [`operators::reverse::invert_into`] -- undo one node's effect on a value vector
//! - [`operators::forward::apply_forward`] -- execute one node's effect on a value vector
//! - [`proof::replay::verify_solution`] -- re-execute a solved path forward and check it
//!
//! # Module Dependency Direction
//!
//! `values`, `graph` ← `operators` ← `proof`
//!
//! One-way only. No cycles. Nothing in this crate performs I/O.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod graph;
pub mod operators;
pub mod proof;
pub mod values;
