//! Shared puzzle generators for revwalk benchmark suites.

use revwalk_harness::problem::{NodeSpecV1, OperandSpecV1, PolicySpecV1, ProblemV1};
use revwalk_search::policy::SearchPolicyV1;
use revwalk_search::workspace::WorkspaceInputV1;

/// Bound applied to both slots of a grid puzzle.
pub const GRID_BOUND: i64 = 12;

/// A `rows x cols` grid of arithmetic cells with the end node in one
/// corner and the start node in the opposite one.
///
/// Cells alternate between add and subtract over two slots with small
/// constants, so the walk revisits cells with many distinct vectors. The
/// target lies outside the bounds: every run ends on a halt, never a goal.
///
/// # Panics
///
/// Panics if the grid has fewer than two cells.
#[must_use]
pub fn grid_problem(rows: usize, cols: usize, policy: SearchPolicyV1) -> ProblemV1 {
    assert!(rows * cols >= 2, "grid needs room for start and end");
    let last = rows * cols - 1;
    let nodes = (0..=last)
        .map(|index| {
            let (r, c) = (index / cols, index % cols);
            let kind = match index {
                0 => "end",
                i if i == last => "start",
                _ if (r + c) % 2 == 0 => "add",
                _ => "subtract",
            };
            let constant = i64::try_from((r + 2 * c) % 3).unwrap_or(0) - 1;
            NodeSpecV1 {
                kind: kind.to_string(),
                lhs: index % 2,
                rhs: OperandSpecV1::Constant(if constant == 0 { 2 } else { constant }),
            }
        })
        .collect();

    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let index = r * cols + c;
            if c + 1 < cols {
                edges.push([index, index + 1]);
            }
            if r + 1 < rows {
                edges.push([index, index + cols]);
            }
        }
    }

    ProblemV1 {
        num_fixed: 1,
        num_free: 1,
        target: vec![GRID_BOUND + 1],
        bounds: vec![[-GRID_BOUND, GRID_BOUND]; 2],
        nodes,
        edges,
        policy: Some(PolicySpecV1 {
            iteration_limit: Some(policy.iteration_limit),
            arena_capacity: Some(policy.arena_capacity),
            max_degree: Some(policy.max_degree),
        }),
    }
}

/// [`grid_problem`] as workspace input.
///
/// # Panics
///
/// Panics if the generated problem is malformed, which would be a
/// generator bug.
#[must_use]
pub fn grid_input(rows: usize, cols: usize) -> WorkspaceInputV1 {
    grid_problem(rows, cols, SearchPolicyV1::default())
        .to_workspace_input()
        .expect("grid problem converts")
}

/// A policy whose arena cannot fill before `iteration_limit` dequeues.
///
/// Grid cells have degree at most 4, so each dequeue pushes at most 3
/// states (4 for the seed).
#[must_use]
pub fn budget_bound_policy(iteration_limit: u64) -> SearchPolicyV1 {
    let limit = usize::try_from(iteration_limit).unwrap_or(usize::MAX);
    SearchPolicyV1 {
        iteration_limit,
        arena_capacity: limit.saturating_mul(3).saturating_add(16),
        max_degree: 4,
    }
}
