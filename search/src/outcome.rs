//! Outcome of one search invocation.

use revwalk_kernel::graph::node::NodeIndex;
use revwalk_kernel::values::ValueVector;

/// Why an invocation of the step loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HaltReasonV1 {
    /// A start-node state matched the target pattern.
    GoalReached,
    /// The push cursor reached the headroom mark.
    QueueExhausted,
    /// No enqueued state remains to dequeue.
    FrontierExhausted,
    /// The lifetime iteration budget is spent.
    BudgetExhausted,
}

impl HaltReasonV1 {
    /// Stable lowercase label for logs and reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::QueueExhausted => "queue_exhausted",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::BudgetExhausted => "budget_exhausted",
        }
    }

    /// Whether another invocation can make progress.
    ///
    /// After `BudgetExhausted` this holds only once the caller has raised
    /// the budget. The arena never reclaims space, so `QueueExhausted` is
    /// as final as `FrontierExhausted`.
    #[must_use]
    pub const fn can_resume(self) -> bool {
        matches!(self, Self::GoalReached | Self::BudgetExhausted)
    }
}

impl std::fmt::Display for HaltReasonV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A reconstructed solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionV1 {
    /// Number of nodes on the path, goal and seed inclusive.
    pub path_length: usize,
    /// Start values: the goal state's full vector.
    pub values: ValueVector,
    /// Node ids from the start node to the end node. This is both the
    /// goal-to-seed order of the walk and forward execution order.
    pub node_ids: Vec<NodeIndex>,
}

impl SolutionV1 {
    /// Flat record `[path_length, values..., node_ids...]`.
    #[must_use]
    pub fn to_flat_record(&self) -> Vec<i64> {
        let mut record = Vec::with_capacity(1 + self.values.len() + self.node_ids.len());
        record.push(to_i64(self.path_length));
        record.extend_from_slice(&self.values);
        record.extend(self.node_ids.iter().map(|&id| to_i64(id)));
        record
    }
}

/// Result of [`crate::workspace::SearchWorkspace::next_solution`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcomeV1 {
    Solved(SolutionV1),
    NoSolution { halt: HaltReasonV1 },
}

impl SearchOutcomeV1 {
    #[must_use]
    pub fn solution(&self) -> Option<&SolutionV1> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::NoSolution { .. } => None,
        }
    }

    #[must_use]
    pub fn halt_reason(&self) -> HaltReasonV1 {
        match self {
            Self::Solved(_) => HaltReasonV1::GoalReached,
            Self::NoSolution { halt } => *halt,
        }
    }

    /// Flat record of the outcome; `[-1]` when there is no solution.
    #[must_use]
    pub fn to_flat_record(&self) -> Vec<i64> {
        match self {
            Self::Solved(solution) => solution.to_flat_record(),
            Self::NoSolution { .. } => vec![-1],
        }
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
