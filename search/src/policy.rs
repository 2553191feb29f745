//! Search policy: budget and capacity configuration.

use crate::error::PolicyError;

/// Resource limits for one workspace.
///
/// All three values are fixed at construction. The iteration budget is a
/// lifetime total across invocations; see
/// [`crate::workspace::SearchWorkspace::raise_budget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Total dequeues allowed over the workspace's life.
    pub iteration_limit: u64,
    /// Maximum number of states the arena may ever hold.
    pub arena_capacity: usize,
    /// Maximum neighbor count of any node. Also the arena headroom.
    pub max_degree: usize,
}

impl SearchPolicyV1 {
    /// Check the arena can hold the seed and still reserve a full
    /// expansion's worth of headroom.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InsufficientCapacity`] if
    /// `arena_capacity <= max_degree`.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.arena_capacity <= self.max_degree {
            return Err(PolicyError::InsufficientCapacity {
                capacity: self.arena_capacity,
                max_degree: self.max_degree,
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            iteration_limit: 1_000_000,
            arena_capacity: 1_000_000,
            max_degree: 16,
        }
    }
}
