//! Search state: one immutable entry of the BFS queue.

use revwalk_kernel::graph::node::NodeIndex;
use revwalk_kernel::values::ValueVector;

/// Position of a state in [`crate::arena::QueueArena`].
pub type StateIndex = usize;

/// A queue entry. Created at enqueue time and never mutated.
///
/// `values` is the vector *before* this state's node is inverted; the
/// engine computes the node's inverse when it dequeues the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStateV1 {
    pub node: NodeIndex,
    /// The node this state was reached from (`None` for the seed). Only
    /// used to forbid stepping straight back.
    pub last_node: Option<NodeIndex>,
    pub values: ValueVector,
    /// The state that produced this one (`None` for the seed). Always a
    /// smaller index than this state's own.
    pub parent: Option<StateIndex>,
}

impl SearchStateV1 {
    /// The root of every walk: the end node with an all-zero vector.
    #[must_use]
    pub fn seed(terminal: NodeIndex, values: ValueVector) -> Self {
        Self {
            node: terminal,
            last_node: None,
            values,
            parent: None,
        }
    }

    #[must_use]
    pub fn is_seed(&self) -> bool {
        self.last_node.is_none()
    }
}
