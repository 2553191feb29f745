//! Persistent search workspace.
//!
//! A workspace owns the validated graph, the target and bounds, and the
//! queue arena. It is built once; every call to
//! [`SearchWorkspace::next_solution`] continues the same breadth-first
//! walk from where the previous call stopped.

use revwalk_kernel::graph::build::{GraphSpecV1, NodeGraphV1};
use revwalk_kernel::values::{TargetPatternV1, ValueLayout, VariableBoundsV1};

use crate::arena::{ArenaCursors, QueueArena};
use crate::error::WorkspaceError;
use crate::outcome::HaltReasonV1;
use crate::policy::SearchPolicyV1;
use crate::state::{SearchStateV1, StateIndex};

/// Everything needed to describe one puzzle instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceInputV1 {
    pub graph: GraphSpecV1,
    pub layout: ValueLayout,
    /// Required values of the fixed prefix; length `layout.num_fixed`.
    pub target: Vec<i64>,
    /// Inclusive `(lower, upper)` per slot; length `layout.num_values()`.
    pub bounds: Vec<(i64, i64)>,
}

/// Search state that survives between invocations.
#[derive(Debug)]
pub struct SearchWorkspace {
    pub(crate) graph: NodeGraphV1,
    pub(crate) layout: ValueLayout,
    pub(crate) target: TargetPatternV1,
    pub(crate) bounds: VariableBoundsV1,
    pub(crate) arena: QueueArena,
    pub(crate) policy: SearchPolicyV1,
    pub(crate) iterations: u64,
    pub(crate) limit: u64,
    pub(crate) last_halt: Option<HaltReasonV1>,
}

impl SearchWorkspace {
    /// Validate the input and seed the arena with the end node.
    ///
    /// Checks run in order: policy, layout size, graph structure, operand
    /// slots, target length, bounds. The first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Policy`] for an unusable policy,
    /// [`WorkspaceError::Graph`] for structural faults (including a node
    /// whose degree exceeds `policy.max_degree` and a missing end node),
    /// and [`WorkspaceError::Layout`] for an overflowing layout or for
    /// target or bounds mismatches.
    pub fn new(input: &WorkspaceInputV1, policy: SearchPolicyV1) -> Result<Self, WorkspaceError> {
        policy.validate()?;
        input.layout.validate()?;
        let graph = NodeGraphV1::build(&input.graph, policy.max_degree)?;
        graph.check_operands(input.layout.num_values())?;
        let target = TargetPatternV1::new(input.target.clone(), input.layout)?;
        let bounds = VariableBoundsV1::from_pairs(&input.bounds, input.layout)?;

        let mut arena = QueueArena::new(policy.arena_capacity, policy.max_degree);
        arena.push(SearchStateV1::seed(graph.terminal(), input.layout.zeroed()));

        Ok(Self {
            graph,
            layout: input.layout,
            target,
            bounds,
            arena,
            policy,
            iterations: 0,
            limit: policy.iteration_limit,
            last_halt: None,
        })
    }

    /// Extend the lifetime iteration budget by `extra` dequeues.
    pub fn raise_budget(&mut self, extra: u64) {
        self.limit = self.limit.saturating_add(extra);
    }

    /// Dequeues performed over the workspace's life.
    #[must_use]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Current lifetime iteration budget.
    #[must_use]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    #[must_use]
    pub fn cursors(&self) -> ArenaCursors {
        self.arena.cursors()
    }

    #[must_use]
    pub fn frontier_len(&self) -> usize {
        self.arena.frontier_len()
    }

    /// Why the most recent invocation stopped; `None` before the first.
    #[must_use]
    pub fn halt_reason(&self) -> Option<HaltReasonV1> {
        self.last_halt
    }

    #[must_use]
    pub fn graph(&self) -> &NodeGraphV1 {
        &self.graph
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicyV1 {
        &self.policy
    }

    /// Borrow an enqueued state, or `None` past the push cursor.
    #[must_use]
    pub fn state(&self, index: StateIndex) -> Option<&SearchStateV1> {
        (index < self.arena.len()).then(|| self.arena.get(index))
    }
}
