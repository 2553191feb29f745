//! Solution reconstruction from a goal state's parent chain.

use crate::arena::QueueArena;
use crate::outcome::SolutionV1;
use crate::state::StateIndex;

/// Build the solution ending at `goal`.
///
/// Node ids are listed goal-first and seed-last. Values are the goal
/// state's own vector. Each parent index is strictly smaller than its
/// child's, so the walk terminates at the seed.
#[must_use]
pub fn reconstruct_solution(arena: &QueueArena, goal: StateIndex) -> SolutionV1 {
    let node_ids: Vec<_> = arena.ancestry(goal).map(|(_, state)| state.node).collect();
    SolutionV1 {
        path_length: node_ids.len(),
        values: arena.get(goal).values.clone(),
        node_ids,
    }
}
