//! Revwalk Search: resumable breadth-first reverse walk over a node graph.
//!
//! This crate provides the search layer. It depends only on
//! `revwalk_kernel`; it does NOT depend on `revwalk_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! revwalk_kernel  ←  revwalk_search  ←  revwalk_harness
//! (graph, ops)       (arena, engine)    (problems, reports, cli)
//! ```
//!
//! # Key types
//!
//! - [`workspace::SearchWorkspace`] -- persistent search state; construct once, call
//!   [`workspace::SearchWorkspace::next_solution`] repeatedly
//! - [`arena::QueueArena`] -- fixed-capacity, append-only BFS queue
//! - [`state::SearchStateV1`] -- one immutable queue entry
//! - [`policy::SearchPolicyV1`] -- iteration budget, arena capacity, maximum degree
//! - [`outcome::SearchOutcomeV1`] -- solution or halt reason of one invocation

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod error;
pub mod outcome;
pub mod policy;
pub mod reconstruct;
pub mod search;
pub mod state;
pub mod workspace;
