//! Fluent construction of small puzzles.
//!
//! Tests describe graphs as a node list plus undirected edges; the builder
//! fills in default operands and layout so each test names only what it
//! exercises.

use revwalk_kernel::graph::build::{AdjacencyV1, GraphSpecV1};
use revwalk_kernel::graph::node::{NodeIndex, NodeKind, RhsOperand};
use revwalk_kernel::values::ValueLayout;
use revwalk_search::policy::SearchPolicyV1;
use revwalk_search::workspace::{SearchWorkspace, WorkspaceInputV1};

/// Builder for a [`WorkspaceInputV1`].
#[derive(Debug, Clone)]
pub struct PuzzleBuilder {
    kinds: Vec<NodeKind>,
    lhs: Vec<usize>,
    rhs: Vec<RhsOperand>,
    edges: Vec<(NodeIndex, NodeIndex)>,
    layout: ValueLayout,
    target: Vec<i64>,
    bounds: Vec<(i64, i64)>,
}

impl PuzzleBuilder {
    /// An empty puzzle with `num_fixed` target slots and `num_free` free
    /// slots, all bounded by `[-bound, bound]`.
    #[must_use]
    pub fn new(num_fixed: usize, num_free: usize, bound: i64) -> Self {
        let layout = ValueLayout::new(num_fixed, num_free);
        Self {
            kinds: Vec::new(),
            lhs: Vec::new(),
            rhs: Vec::new(),
            edges: Vec::new(),
            layout,
            target: vec![0; num_fixed],
            bounds: vec![(-bound, bound); layout.num_values()],
        }
    }

    /// Add a node and return its index.
    pub fn node(&mut self, kind: NodeKind, lhs: usize, rhs: RhsOperand) -> NodeIndex {
        self.kinds.push(kind);
        self.lhs.push(lhs);
        self.rhs.push(rhs);
        self.kinds.len() - 1
    }

    /// Add a node whose operands are unused.
    pub fn plain(&mut self, kind: NodeKind) -> NodeIndex {
        self.node(kind, 0, RhsOperand::Constant(0))
    }

    pub fn edge(&mut self, a: NodeIndex, b: NodeIndex) -> &mut Self {
        self.edges.push((a, b));
        self
    }

    /// Connect `path` as a chain of edges.
    pub fn chain(&mut self, path: &[NodeIndex]) -> &mut Self {
        for pair in path.windows(2) {
            self.edges.push((pair[0], pair[1]));
        }
        self
    }

    pub fn target(&mut self, target: &[i64]) -> &mut Self {
        self.target = target.to_vec();
        self
    }

    pub fn bound(&mut self, slot: usize, lower: i64, upper: i64) -> &mut Self {
        self.bounds[slot] = (lower, upper);
        self
    }

    #[must_use]
    pub fn build(&self) -> WorkspaceInputV1 {
        WorkspaceInputV1 {
            graph: GraphSpecV1 {
                node_count: self.kinds.len(),
                kinds: self.kinds.clone(),
                lhs: self.lhs.clone(),
                rhs: self.rhs.clone(),
                adjacency: AdjacencyV1::Edges(self.edges.clone()),
            },
            layout: self.layout,
            target: self.target.clone(),
            bounds: self.bounds.clone(),
        }
    }

    /// Build a workspace under `policy`.
    ///
    /// # Panics
    ///
    /// Panics if construction fails; use [`PuzzleBuilder::build`] to test
    /// construction errors.
    #[must_use]
    pub fn workspace(&self, policy: SearchPolicyV1) -> SearchWorkspace {
        SearchWorkspace::new(&self.build(), policy).expect("puzzle builds")
    }
}

/// End - Add(slot 0, constant `rhs`) - Start, one fixed slot bounded by
/// `[-100, 100]`, target `[target]`.
///
/// Returns the builder and the `[end, add, start]` indices.
#[must_use]
pub fn add_chain(rhs: i64, target: i64) -> (PuzzleBuilder, [NodeIndex; 3]) {
    let mut puzzle = PuzzleBuilder::new(1, 0, 100);
    let end = puzzle.plain(NodeKind::End);
    let add = puzzle.node(NodeKind::Add, 0, RhsOperand::Constant(rhs));
    let start = puzzle.plain(NodeKind::Start);
    puzzle.chain(&[end, add, start]).target(&[target]);
    (puzzle, [end, add, start])
}

/// A policy with the given iteration budget and default capacity.
#[must_use]
pub fn budget(iteration_limit: u64) -> SearchPolicyV1 {
    SearchPolicyV1 {
        iteration_limit,
        ..SearchPolicyV1::default()
    }
}
