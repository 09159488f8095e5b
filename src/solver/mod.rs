//! The scheduling pipeline.
//!
//! Four stages, run in order by [`ScheduleGenerator`]:
//!
//! 1. **Parameters** (`params`): pick the largest feasible per-team match
//!    count `k` for the given team/turn/court budget.
//! 2. **Regular graph** (`regular`): build a circulant `k`-regular edge
//!    universe so every team has exactly `k` matches to play.
//! 3. **Greedy partition** (`greedy`): fast single-sweep packing of edges
//!    into turns.
//! 4. **Backtracking partition** (`backtrack`): exhaustive depth-first
//!    fallback when the greedy pass gets stuck.
//!
//! The greedy pass succeeds on most circulant universes; the fallback
//! re-derives the whole partition from scratch rather than resuming the
//! partial greedy result, trading wasted work for a simpler completeness
//! argument.

mod backtrack;
mod generator;
mod greedy;
mod params;
mod regular;

pub use backtrack::BacktrackPartitioner;
pub use generator::{ScheduleGenerator, ScheduleRequest};
pub use greedy::{greedy_partition, GreedyOutcome};
pub use params::{solve_turn_params, TurnParams};
pub use regular::build_regular_edges;
