//! The step loop: breadth-first reverse walk from the end node.
//!
//! Each step dequeues one state, computes its node's inverse, and enqueues
//! one successor per neighbor (except the node it came from). A start-node
//! state whose fixed prefix equals the target is a goal.

use revwalk_kernel::graph::node::NodeKind;
use revwalk_kernel::operators::reverse::invert_into;
use revwalk_kernel::values::ValueVector;
use tracing::{debug, info, trace};

use crate::outcome::{HaltReasonV1, SearchOutcomeV1};
use crate::reconstruct::reconstruct_solution;
use crate::state::{SearchStateV1, StateIndex};
use crate::workspace::SearchWorkspace;

impl SearchWorkspace {
    /// Run the step loop until a goal is found or a halt condition holds.
    ///
    /// The walk resumes from the previous call's cursors, so repeated calls
    /// yield successive solutions in breadth-first order. Before every
    /// step the halts are checked in order: queue space, frontier,
    /// iteration budget.
    pub fn next_solution(&mut self) -> SearchOutcomeV1 {
        let started_at = self.iterations;
        debug!(
            iterations = self.iterations,
            limit = self.limit,
            frontier = self.arena.frontier_len(),
            "search invocation started"
        );

        let mut scratch = ValueVector::with_capacity(self.layout.num_values());
        let (halt, goal) = loop {
            if let Some(halt) = self.blocking_halt() {
                break (halt, None);
            }
            let Some(index) = self.arena.take_next() else {
                break (HaltReasonV1::FrontierExhausted, None);
            };
            self.iterations += 1;
            if self.step(index, &mut scratch) {
                break (HaltReasonV1::GoalReached, Some(index));
            }
        };
        self.last_halt = Some(halt);

        let cursors = self.arena.cursors();
        let spent = self.iterations - started_at;
        match halt {
            HaltReasonV1::QueueExhausted => info!(
                push = cursors.push,
                capacity = cursors.capacity,
                "out of queue space"
            ),
            HaltReasonV1::FrontierExhausted => {
                info!(iterations = self.iterations, "out of states to search");
            }
            HaltReasonV1::BudgetExhausted => {
                info!(limit = self.limit, "iteration budget exhausted");
            }
            HaltReasonV1::GoalReached => {}
        }
        debug!(
            halt = %halt,
            spent,
            pop = cursors.pop,
            push = cursors.push,
            "search invocation halted"
        );

        match goal {
            Some(index) => SearchOutcomeV1::Solved(reconstruct_solution(&self.arena, index)),
            None => SearchOutcomeV1::NoSolution { halt },
        }
    }

    /// The first halt condition that forbids another dequeue, if any.
    fn blocking_halt(&self) -> Option<HaltReasonV1> {
        if self.arena.is_out_of_space() {
            Some(HaltReasonV1::QueueExhausted)
        } else if self.arena.frontier_len() == 0 {
            Some(HaltReasonV1::FrontierExhausted)
        } else if self.iterations >= self.limit {
            Some(HaltReasonV1::BudgetExhausted)
        } else {
            None
        }
    }

    /// Process one dequeued state. Returns whether it is a goal.
    ///
    /// Out-of-bounds and dead-end states are not expanded, but the goal
    /// test still applies to them.
    fn step(&mut self, index: StateIndex, scratch: &mut ValueVector) -> bool {
        let state = self.arena.get(index);
        let node = self.graph.node(state.node);
        invert_into(node, &state.values, scratch);

        let dead_end = node.kind == NodeKind::End && !state.is_seed();
        let violation = self.bounds.first_violation(scratch);
        let is_goal = node.kind == NodeKind::Start && self.target.matches(&state.values);
        let came_from = state.last_node;

        if dead_end {
            trace!(state = index, node = node.index, "dead end");
        } else if let Some(slot) = violation {
            trace!(state = index, node = node.index, slot, "out of bounds");
        } else {
            for &neighbor in &node.neighbors {
                if Some(neighbor) == came_from {
                    continue;
                }
                self.arena.push(SearchStateV1 {
                    node: neighbor,
                    last_node: Some(node.index),
                    values: scratch.clone(),
                    parent: Some(index),
                });
            }
        }
        is_goal
    }
}
