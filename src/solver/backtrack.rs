//! Exhaustive backtracking partition (the fallback path).
//!
//! Invoked when the greedy pass gets stuck. It deliberately discards the
//! greedy partial result and re-derives the whole partition from the
//! original edge universe: wasteful, but the completeness argument stays
//! trivial and the output ordering stays independent of how far the fast
//! path got.
//!
//! # Algorithm
//!
//! Iterative depth-first search over an explicit worklist of copy-on-branch
//! state snapshots, so search depth never depends on the call stack. Each
//! state holds the turn buckets built so far, the teams used per bucket,
//! and the remaining edges. One step pops a state, takes the first
//! remaining edge in canonical order, and pushes a successor for every
//! bucket that has room and neither endpoint. The first popped state with
//! no remaining edges wins (depth-first order, not optimal — any complete
//! valid partition is acceptable).
//!
//! # Complexity
//!
//! Worst-case branching factor equals the number of turns at every edge,
//! so runtime is exponential in the edge count. There is no memoization or
//! symmetry pruning. This bounds the practical problem size; the optional
//! explored-state cap turns a runaway search into a reported error instead
//! of an unbounded burn.

use std::collections::BTreeSet;

use crate::error::ScheduleError;
use crate::models::{Edge, TeamId};

/// One branch of the search: a partial partition plus what is left.
#[derive(Debug, Clone)]
struct State {
    buckets: Vec<BTreeSet<Edge>>,
    used_teams: Vec<BTreeSet<TeamId>>,
    remaining: BTreeSet<Edge>,
}

/// Exhaustive partitioner of an edge universe into capacity-bounded turns.
#[derive(Debug, Clone)]
pub struct BacktrackPartitioner {
    rounds: usize,
    capacity: usize,
    state_limit: Option<u64>,
}

impl BacktrackPartitioner {
    /// Creates a partitioner for `rounds` turns of at most `capacity`
    /// matches each. Unbounded search by default.
    pub fn new(capacity: usize, rounds: usize) -> Self {
        Self {
            rounds,
            capacity,
            state_limit: None,
        }
    }

    /// Caps the number of explored states.
    ///
    /// When the cap is hit the search stops with
    /// [`ScheduleError::SearchLimitReached`] instead of running to
    /// exhaustion.
    pub fn with_state_limit(mut self, limit: u64) -> Self {
        self.state_limit = Some(limit);
        self
    }

    /// Partitions every edge into exactly one turn bucket.
    ///
    /// Buckets respect the capacity bound and never reuse a team. Returns
    /// [`ScheduleError::PartitionExhausted`] when the search space is
    /// exhausted without a complete assignment.
    pub fn partition(
        &self,
        edges: &BTreeSet<Edge>,
    ) -> Result<Vec<BTreeSet<Edge>>, ScheduleError> {
        let mut stack = vec![State {
            buckets: vec![BTreeSet::new(); self.rounds],
            used_teams: vec![BTreeSet::new(); self.rounds],
            remaining: edges.clone(),
        }];

        let mut explored: u64 = 0;

        while let Some(state) = stack.pop() {
            explored += 1;
            if let Some(limit) = self.state_limit {
                if explored > limit {
                    return Err(ScheduleError::SearchLimitReached { limit });
                }
            }

            let edge = match state.remaining.iter().next() {
                Some(&edge) => edge,
                None => return Ok(state.buckets),
            };

            for i in 0..self.rounds {
                let used = &state.used_teams[i];
                let has_room = state.buckets[i].len() < self.capacity;

                if has_room && !used.contains(&edge.a()) && !used.contains(&edge.b()) {
                    let mut next = state.clone();
                    next.buckets[i].insert(edge);
                    next.used_teams[i].insert(edge.a());
                    next.used_teams[i].insert(edge.b());
                    next.remaining.remove(&edge);
                    stack.push(next);
                }
            }
        }

        Err(ScheduleError::PartitionExhausted)
    }
}
