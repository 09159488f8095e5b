//! Scheduling domain models.
//!
//! Core data types for representing a round-robin tournament scheduling
//! problem and its solution. Teams are opaque indices into a caller-owned
//! ordered list; the scheduler tracks identity and counts only, never team
//! contents.
//!
//! | Type | Role |
//! |------|------|
//! | `Edge` | One required match (canonical unordered team pair) |
//! | `Graph` | Remaining-opponents adjacency over team indices |
//! | `Match` | A turn slot: pending or a fixed pairing |
//! | `Turn` | One round of simultaneous matches |
//! | `Schedule` | The ordered sequence of turns |

mod edge;
mod graph;
mod schedule;

pub use edge::{Edge, TeamId};
pub use graph::Graph;
pub use schedule::{Match, Schedule, Turn};
