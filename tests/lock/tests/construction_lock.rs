//! Workspace construction lock tests.
//!
//! Proves construction is fail-closed and reports the first fault in a
//! fixed order: policy, layout size, array lengths, adjacency range, degree, end node,
//! start node, operand slots, target, bounds.

use lock_tests::puzzle_builders::{add_chain, PuzzleBuilder};
use revwalk_kernel::graph::build::{GraphError, GraphSpecV1};
use revwalk_kernel::graph::node::{NodeKind, RhsOperand};
use revwalk_kernel::values::{LayoutError, ValueLayout};
use revwalk_search::error::{PolicyError, WorkspaceError};
use revwalk_search::policy::SearchPolicyV1;
use revwalk_search::workspace::SearchWorkspace;

fn build(puzzle: &PuzzleBuilder, policy: SearchPolicyV1) -> Result<SearchWorkspace, WorkspaceError> {
    SearchWorkspace::new(&puzzle.build(), policy)
}

fn max_degree(max_degree: usize) -> SearchPolicyV1 {
    SearchPolicyV1 {
        max_degree,
        ..SearchPolicyV1::default()
    }
}

/// A hub with three spokes: end, start, and a no-op.
fn hub(hub_kind: NodeKind, end_kind: NodeKind) -> PuzzleBuilder {
    let mut puzzle = PuzzleBuilder::new(1, 0, 10);
    let center = puzzle.plain(hub_kind);
    let end = puzzle.plain(end_kind);
    let start = puzzle.plain(NodeKind::Start);
    let spare = puzzle.plain(NodeKind::NoOp);
    puzzle.edge(center, end).edge(center, start).edge(center, spare);
    puzzle
}

#[test]
fn missing_end_is_rejected() {
    let puzzle = hub(NodeKind::NoOp, NodeKind::NoOp);
    assert!(matches!(
        build(&puzzle, SearchPolicyV1::default()),
        Err(WorkspaceError::Graph(GraphError::MissingTerminal))
    ));
}

#[test]
fn degree_above_maximum_is_rejected() {
    let puzzle = hub(NodeKind::NoOp, NodeKind::End);
    assert!(matches!(
        build(&puzzle, max_degree(2)),
        Err(WorkspaceError::Graph(GraphError::DegreeOverflow {
            node: 0,
            degree: 3,
            max_degree: 2
        }))
    ));
}

#[test]
fn degree_equal_to_maximum_is_accepted() {
    let puzzle = hub(NodeKind::NoOp, NodeKind::End);
    assert!(build(&puzzle, max_degree(3)).is_ok());
}

#[test]
fn degree_fault_is_reported_before_missing_end() {
    let puzzle = hub(NodeKind::NoOp, NodeKind::NoOp);
    assert!(matches!(
        build(&puzzle, max_degree(2)),
        Err(WorkspaceError::Graph(GraphError::DegreeOverflow { .. }))
    ));
}

#[test]
fn missing_or_duplicate_start_is_rejected() {
    let mut puzzle = PuzzleBuilder::new(1, 0, 10);
    let end = puzzle.plain(NodeKind::End);
    let spare = puzzle.plain(NodeKind::NoOp);
    puzzle.edge(end, spare);
    assert!(matches!(
        build(&puzzle, SearchPolicyV1::default()),
        Err(WorkspaceError::Graph(GraphError::MissingInitial))
    ));

    let puzzle = hub(NodeKind::Start, NodeKind::End);
    assert!(matches!(
        build(&puzzle, SearchPolicyV1::default()),
        Err(WorkspaceError::Graph(GraphError::DuplicateInitial {
            first: 0,
            second: 2
        }))
    ));
}

#[test]
fn duplicate_end_is_rejected() {
    let puzzle = hub(NodeKind::End, NodeKind::End);
    assert!(matches!(
        build(&puzzle, SearchPolicyV1::default()),
        Err(WorkspaceError::Graph(GraphError::DuplicateTerminal {
            first: 0,
            second: 1
        }))
    ));
}

#[test]
fn operand_slots_must_fit_the_layout() {
    let mut puzzle = PuzzleBuilder::new(1, 0, 10);
    let end = puzzle.plain(NodeKind::End);
    let add = puzzle.node(NodeKind::Add, 0, RhsOperand::Slot(1));
    let start = puzzle.plain(NodeKind::Start);
    puzzle.chain(&[end, add, start]);
    assert!(matches!(
        build(&puzzle, SearchPolicyV1::default()),
        Err(WorkspaceError::Graph(GraphError::OperandOutOfRange {
            node: 1,
            operand: "rhs",
            index: 1,
            num_values: 1
        }))
    ));
}

#[test]
fn neighbor_outside_graph_is_rejected() {
    let (mut puzzle, [end, _, _]) = add_chain(1, 0);
    puzzle.edge(end, 9);
    assert!(matches!(
        build(&puzzle, SearchPolicyV1::default()),
        Err(WorkspaceError::Graph(GraphError::NeighborOutOfRange {
            node: 0,
            neighbor: 9,
            node_count: 3
        }))
    ));
}

#[test]
fn target_and_bounds_must_match_layout() {
    let (mut puzzle, _) = add_chain(1, 0);
    puzzle.target(&[0, 0]);
    assert!(matches!(
        build(&puzzle, SearchPolicyV1::default()),
        Err(WorkspaceError::Layout(LayoutError::LayoutMismatch {
            what: "target pattern",
            expected: 1,
            actual: 2
        }))
    ));

    let (mut puzzle, _) = add_chain(1, 0);
    puzzle.bound(0, 5, -5);
    assert!(matches!(
        build(&puzzle, SearchPolicyV1::default()),
        Err(WorkspaceError::Layout(LayoutError::InvertedBounds { index: 0, .. }))
    ));
}

#[test]
fn overflowing_layout_is_rejected_before_any_sizing() {
    let (puzzle, _) = add_chain(-3, 3);
    let mut input = puzzle.build();
    input.layout = ValueLayout::new(usize::MAX, 1);
    assert!(matches!(
        SearchWorkspace::new(&input, SearchPolicyV1::default()),
        Err(WorkspaceError::Layout(LayoutError::LayoutOverflow {
            num_fixed: usize::MAX,
            num_free: 1
        }))
    ));
}

#[test]
fn policy_is_checked_first() {
    let puzzle = hub(NodeKind::NoOp, NodeKind::NoOp);
    let policy = SearchPolicyV1 {
        iteration_limit: 10,
        arena_capacity: 3,
        max_degree: 3,
    };
    assert!(matches!(
        build(&puzzle, policy),
        Err(WorkspaceError::Policy(PolicyError::InsufficientCapacity { .. }))
    ));
}

#[test]
fn legacy_raw_arrays_solve_like_structured_input() {
    // end(0) - add(1, rhs -3) - start(2), as tag/operand/matrix arrays.
    let graph = GraphSpecV1::from_raw_arrays(
        3,
        &[NodeKind::End.tag(), NodeKind::Add.tag(), NodeKind::Start.tag()],
        &[0, 0, 0],
        &[1, 1, 1],
        &[0, -3, 0],
        &[0, 1, 0, 1, 0, 1, 0, 1, 0],
    )
    .expect("raw arrays are well formed");

    let (puzzle, _) = add_chain(-3, 3);
    let mut input = puzzle.build();
    let structured = SearchWorkspace::new(&input, SearchPolicyV1::default())
        .expect("structured input builds")
        .next_solution();
    input.graph = graph;
    let raw = SearchWorkspace::new(&input, SearchPolicyV1::default())
        .expect("raw input builds")
        .next_solution();

    assert_eq!(raw, structured);
    assert!(raw.solution().is_some());
}

#[test]
fn legacy_raw_arrays_reject_unknown_tags() {
    let err = GraphSpecV1::from_raw_arrays(1, &[42], &[0], &[1], &[0], &[0]).unwrap_err();
    assert_eq!(err, GraphError::UnknownKindTag { node: 0, tag: 42 });
}
