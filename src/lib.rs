//! Fair round-robin tournament scheduling.
//!
//! Generates a collision-free match schedule for a team tournament: given a
//! number of teams, a number of turns (rounds), and a number of simultaneous
//! courts, produces an ordered sequence of turns such that every match occurs
//! exactly once, no team plays twice in the same turn, and every team ends up
//! with the same total match count.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Edge`, `Graph`, `Match`, `Turn`, `Schedule`
//! - **`solver`**: The scheduling pipeline — parameter solving, circulant
//!   regular-graph construction, greedy turn packing, backtracking fallback,
//!   and the end-to-end `ScheduleGenerator`
//! - **`validation`**: Invariant checks for completed schedules
//!
//! # Pipeline
//!
//! Team count → per-team degree `k` → `k`-regular edge universe → greedy
//! partition into turns → (if the greedy pass gets stuck) exhaustive
//! backtracking partition → schedule. Validation is advisory and never gates
//! the generator's output.
//!
//! # References
//!
//! - Diestel (2017), "Graph Theory", Ch. 2 (Matchings)
//! - Boesch & Tindell (1984), "Circulants and Their Connectivities"

pub mod error;
pub mod models;
pub mod solver;
pub mod validation;

pub use error::ScheduleError;
pub use models::{Edge, Graph, Match, Schedule, TeamId, Turn};
pub use solver::{ScheduleGenerator, ScheduleRequest};
pub use validation::{validate_schedule, ScheduleViolation, ViolationKind};
