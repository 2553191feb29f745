//! Typed search errors.
//!
//! `WorkspaceError` represents construction failures only. Conditions met
//! while searching (queue, frontier, or budget exhaustion) are halt
//! reasons, expressed via [`crate::outcome::HaltReasonV1`], and leave the
//! workspace usable.

use revwalk_kernel::graph::build::GraphError;
use revwalk_kernel::values::LayoutError;
use thiserror::Error;

/// Invalid search policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// The arena cannot hold the seed plus one full expansion.
    #[error("arena capacity {capacity} leaves no room beyond the {max_degree}-state expansion headroom")]
    InsufficientCapacity { capacity: usize, max_degree: usize },
}

/// Fatal workspace construction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error("invalid policy: {0}")]
    Policy(#[from] PolicyError),
    #[error("invalid graph: {0}")]
    Graph(#[from] GraphError),
    #[error("invalid value layout: {0}")]
    Layout(#[from] LayoutError),
}
