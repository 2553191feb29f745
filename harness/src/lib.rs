//! Revwalk Harness: problem files, runs, and auditable reports.
//!
//! The harness loads a [`problem::ProblemV1`], drives a
//! `revwalk_search` workspace through one or more invocations, replays
//! each solution forward with the kernel, and packages the result as a
//! digest-bound [`report::RunReportV1`].
//!
//! The harness does NOT implement search or replay logic; it delegates to
//! the search crate and the kernel.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod problem;
pub mod report;
pub mod runner;
