//! Forward replay of a solved path.
//!
//! The reverse walk produces start values and a node path. Executing that
//! path forward from those values must leave every slot at zero when the
//! end node is reached; that is the acceptance rule of the puzzle.
//! Replay re-derives the final vector independently of the search engine.

use thiserror::Error;

use crate::graph::build::NodeGraphV1;
use crate::graph::node::{NodeIndex, NodeKind};
use crate::operators::forward::{apply_forward, PrintedValueV1};
use crate::values::ValueVector;

/// Why a path could not be replayed at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("path is empty")]
    EmptyPath,
    #[error("path step {step_index} names node {node}, graph has {node_count} nodes")]
    NodeOutOfRange {
        step_index: usize,
        node: NodeIndex,
        node_count: usize,
    },
    #[error("path starts at node {node} ({kind}), not the start node")]
    NotStartingAtStart { node: NodeIndex, kind: NodeKind },
    #[error("path ends at node {node} ({kind}), not the end node")]
    NotEndingAtEnd { node: NodeIndex, kind: NodeKind },
    #[error("path step {step_index} moves {from} -> {to}, which are not adjacent")]
    NotAdjacent {
        step_index: usize,
        from: NodeIndex,
        to: NodeIndex,
    },
    #[error("values do not fit the graph's operands: {detail}")]
    OperandMismatch { detail: String },
}

/// Result of executing a path forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayOutputV1 {
    pub final_values: ValueVector,
    pub printed: Vec<PrintedValueV1>,
}

/// Verdict of [`verify_solution`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayVerdict {
    /// Forward execution ends with every slot zero.
    Match { output: ReplayOutputV1 },
    /// Forward execution ends with a non-zero slot.
    Divergence {
        slot: usize,
        value: i64,
        output: ReplayOutputV1,
    },
    /// The path is structurally unusable.
    Invalid(ReplayError),
}

impl ReplayVerdict {
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }

    /// Stable lowercase label for reports.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Match { .. } => "match",
            Self::Divergence { .. } => "divergence",
            Self::Invalid(_) => "invalid",
        }
    }
}

/// Execute `forward_path` (start node first, end node last) from `values`.
///
/// The start node contributes nothing; every later node is applied in
/// order.
///
/// # Errors
///
/// Returns [`ReplayError`] if the path is empty, leaves the graph, does not
/// run start-to-end, steps between non-adjacent nodes, or if `values` is
/// too short for the graph's operand slots.
pub fn replay_forward(
    graph: &NodeGraphV1,
    forward_path: &[NodeIndex],
    values: &[i64],
) -> Result<ReplayOutputV1, ReplayError> {
    let (&first, _) = forward_path.split_first().ok_or(ReplayError::EmptyPath)?;
    if let Some((step_index, &node)) = forward_path
        .iter()
        .enumerate()
        .find(|&(_, &node)| node >= graph.len())
    {
        return Err(ReplayError::NodeOutOfRange {
            step_index,
            node,
            node_count: graph.len(),
        });
    }
    graph
        .check_operands(values.len())
        .map_err(|e| ReplayError::OperandMismatch {
            detail: e.to_string(),
        })?;

    if first != graph.initial() {
        return Err(ReplayError::NotStartingAtStart {
            node: first,
            kind: graph.node(first).kind,
        });
    }
    let last = forward_path[forward_path.len() - 1];
    if last != graph.terminal() {
        return Err(ReplayError::NotEndingAtEnd {
            node: last,
            kind: graph.node(last).kind,
        });
    }

    let mut current = values.to_vec();
    let mut printed = Vec::new();
    for (step_index, pair) in forward_path.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        if !graph.node(from).neighbors.contains(&to) {
            return Err(ReplayError::NotAdjacent {
                step_index: step_index + 1,
                from,
                to,
            });
        }
        let step = apply_forward(graph.node(to), &current);
        current = step.values;
        printed.extend(step.printed);
    }

    Ok(ReplayOutputV1 {
        final_values: current,
        printed,
    })
}

/// Replay a solution and check that forward execution ends all-zero.
///
/// The search emits node ids goal-first; the goal is the start node, so
/// that order is already forward execution order.
#[must_use]
pub fn verify_solution(graph: &NodeGraphV1, node_ids: &[NodeIndex], values: &[i64]) -> ReplayVerdict {
    match replay_forward(graph, node_ids, values) {
        Err(e) => ReplayVerdict::Invalid(e),
        Ok(output) => match output.final_values.iter().position(|&v| v != 0) {
            None => ReplayVerdict::Match { output },
            Some(slot) => ReplayVerdict::Divergence {
                slot,
                value: output.final_values[slot],
                output,
            },
        },
    }
}
