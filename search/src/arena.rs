//! Fixed-capacity, append-only BFS queue.
//!
//! The arena is both the queue and the backing store for ancestry. States
//! are pushed at the end and never removed or reordered; the pop cursor
//! only moves forward. The region below the pop cursor holds explored
//! states, which stay addressable so a solution can walk its parent chain.
//!
//! `pop <= push <= capacity` holds at all times. The engine stops
//! dequeuing once `push >= capacity - max_degree`, which guarantees the
//! expansion of any dequeued state fits.

use crate::state::{SearchStateV1, StateIndex};

/// Initial allocation cap. The arena grows on demand up to its capacity.
const INITIAL_RESERVE: usize = 4096;

/// Snapshot of the arena cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaCursors {
    /// Next state to dequeue.
    pub pop: usize,
    /// Next free slot; equals the number of states ever enqueued.
    pub push: usize,
    pub capacity: usize,
    /// Slots reserved for one full expansion.
    pub headroom: usize,
}

/// The BFS queue arena.
#[derive(Debug)]
pub struct QueueArena {
    states: Vec<SearchStateV1>,
    pop: usize,
    capacity: usize,
    headroom: usize,
    /// `capacity - headroom`, saturating; dequeuing stops at this mark.
    push_limit: usize,
}

impl QueueArena {
    /// Create an empty arena.
    ///
    /// The caller guarantees `capacity > headroom`; see
    /// [`crate::policy::SearchPolicyV1::validate`].
    #[must_use]
    pub fn new(capacity: usize, headroom: usize) -> Self {
        Self {
            states: Vec::with_capacity(capacity.min(INITIAL_RESERVE)),
            pop: 0,
            capacity,
            headroom,
            push_limit: capacity.saturating_sub(headroom),
        }
    }

    /// Append a state and return its index.
    ///
    /// # Panics
    ///
    /// Panics if the arena is full. The engine's headroom check keeps this
    /// unreachable.
    pub fn push(&mut self, state: SearchStateV1) -> StateIndex {
        assert!(
            self.states.len() < self.capacity,
            "queue arena overflow at capacity {}",
            self.capacity
        );
        let index = self.states.len();
        self.states.push(state);
        index
    }

    /// Advance the pop cursor and return the dequeued index.
    ///
    /// Returns `None` when the frontier is empty.
    pub fn take_next(&mut self) -> Option<StateIndex> {
        if self.pop < self.states.len() {
            let index = self.pop;
            self.pop += 1;
            Some(index)
        } else {
            None
        }
    }

    /// Borrow a previously enqueued state.
    ///
    /// # Panics
    ///
    /// Panics if `index` has not been pushed.
    #[must_use]
    pub fn get(&self, index: StateIndex) -> &SearchStateV1 {
        &self.states[index]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of enqueued states not yet dequeued.
    #[must_use]
    pub fn frontier_len(&self) -> usize {
        self.states.len() - self.pop
    }

    /// Whether another expansion could overrun the capacity.
    #[must_use]
    pub fn is_out_of_space(&self) -> bool {
        self.states.len() >= self.push_limit
    }

    #[must_use]
    pub fn cursors(&self) -> ArenaCursors {
        ArenaCursors {
            pop: self.pop,
            push: self.states.len(),
            capacity: self.capacity,
            headroom: self.headroom,
        }
    }

    /// Walk the parent chain from `index` back to the seed.
    #[must_use]
    pub fn ancestry(&self, index: StateIndex) -> Ancestry<'_> {
        Ancestry {
            arena: self,
            next: Some(index),
        }
    }
}

/// Iterator over a state and its ancestors, nearest first.
#[derive(Debug)]
pub struct Ancestry<'a> {
    arena: &'a QueueArena,
    next: Option<StateIndex>,
}

impl<'a> Iterator for Ancestry<'a> {
    type Item = (StateIndex, &'a SearchStateV1);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let state = self.arena.get(index);
        self.next = state.parent;
        Some((index, state))
    }
}
