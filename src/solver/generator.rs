//! End-to-end schedule generation.
//!
//! Ties the pipeline together: parameter solving, circulant edge-universe
//! construction, greedy packing, and the backtracking fallback. One
//! request in, one schedule (or a typed error) out; synchronous,
//! single-threaded, and deterministic.

use crate::error::ScheduleError;
use crate::models::{Graph, Match, Schedule, Turn};

use super::backtrack::BacktrackPartitioner;
use super::greedy::greedy_partition;
use super::params::solve_turn_params;
use super::regular::build_regular_edges;

/// Input container for one scheduling request.
///
/// Teams are referenced by index; the caller keeps the actual team list
/// and maps schedule indices back onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleRequest {
    /// Number of teams (`≥ 2`).
    pub team_count: usize,
    /// Number of turns to produce (`≥ 1`).
    pub rounds: usize,
    /// Number of simultaneous courts (`≥ 1`).
    pub courts: usize,
}

impl ScheduleRequest {
    /// Creates a new request.
    pub fn new(team_count: usize, rounds: usize, courts: usize) -> Self {
        Self {
            team_count,
            rounds,
            courts,
        }
    }
}

/// Round-robin schedule generator.
///
/// # Example
///
/// ```
/// use roundmatch::{ScheduleGenerator, ScheduleRequest};
///
/// let request = ScheduleRequest::new(5, 5, 2);
/// let schedule = ScheduleGenerator::new().generate(&request).unwrap();
///
/// assert_eq!(schedule.turn_count(), 5);
/// assert_eq!(schedule.match_count(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    state_limit: Option<u64>,
}

impl ScheduleGenerator {
    /// Creates a generator with an unbounded fallback search.
    pub fn new() -> Self {
        Self { state_limit: None }
    }

    /// Caps the backtracking fallback's explored states.
    ///
    /// Hitting the cap surfaces as
    /// [`ScheduleError::SearchLimitReached`] instead of an unbounded
    /// exponential search.
    pub fn with_state_limit(mut self, limit: u64) -> Self {
        self.state_limit = Some(limit);
        self
    }

    /// Generates a schedule for the request.
    ///
    /// # Algorithm
    /// 1. Derive the largest feasible per-team match count `k`.
    /// 2. Build the `k`-regular circulant edge universe.
    /// 3. Pack edges into turns greedily.
    /// 4. If the greedy pass got stuck, discard its partial result and
    ///    re-partition the full universe by backtracking.
    ///
    /// Infeasible parameters are a hard error, not an empty schedule:
    /// callers distinguish "no games possible" from "zero games asked
    /// for" without inspecting the result shape.
    pub fn generate(&self, request: &ScheduleRequest) -> Result<Schedule, ScheduleError> {
        let infeasible = ScheduleError::InfeasibleParameters {
            teams: request.team_count,
            rounds: request.rounds,
            courts: request.courts,
        };

        if request.team_count < 2 || request.rounds < 1 || request.courts < 1 {
            return Err(infeasible);
        }

        let params = solve_turn_params(request.team_count, request.rounds, request.courts)
            .ok_or_else(|| infeasible.clone())?;

        let universe = build_regular_edges(request.team_count, params.matches_per_team);
        if universe.is_empty() {
            // Degree unreachable with this many teams (k >= n).
            return Err(infeasible);
        }

        let capacity = params.turn_capacity();
        let mut graph = Graph::from_edges(&universe);
        let greedy = greedy_partition(&mut graph, capacity, request.rounds);

        let turn_sets = if greedy.complete {
            greedy.turns
        } else {
            let mut partitioner = BacktrackPartitioner::new(capacity, request.rounds);
            if let Some(limit) = self.state_limit {
                partitioner = partitioner.with_state_limit(limit);
            }
            partitioner.partition(&universe)?
        };

        let turns = turn_sets
            .into_iter()
            .map(|set| Turn::new(set.into_iter().map(Match::from_edge).collect()))
            .collect();

        Ok(Schedule::new(turns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_schedule;
    use std::collections::BTreeSet;

    fn assert_schedule_invariants(schedule: &Schedule, request: &ScheduleRequest) {
        assert_eq!(schedule.turn_count(), request.rounds);
        for turn in &schedule.turns {
            assert!(turn.match_count() <= request.courts);
            let mut teams = BTreeSet::new();
            for m in &turn.matches {
                let (a, b) = m.teams().expect("generated match must be assigned");
                assert!(teams.insert(a), "team {a} plays twice in a turn");
                assert!(teams.insert(b), "team {b} plays twice in a turn");
            }
        }
        validate_schedule(request.team_count, schedule).unwrap();
    }

    #[test]
    fn test_five_teams_five_rounds_two_courts() {
        let request = ScheduleRequest::new(5, 5, 2);
        let schedule = ScheduleGenerator::new().generate(&request).unwrap();

        assert_schedule_invariants(&schedule, &request);
        assert_eq!(schedule.match_count(), 10);
        assert_eq!(schedule.match_counts_per_team(5), vec![4; 5]);
    }

    #[test]
    fn test_each_match_scheduled_exactly_once() {
        let request = ScheduleRequest::new(6, 3, 3);
        let schedule = ScheduleGenerator::new().generate(&request).unwrap();

        assert_schedule_invariants(&schedule, &request);
        let mut seen = BTreeSet::new();
        for turn in &schedule.turns {
            for m in &turn.matches {
                assert!(seen.insert(m.teams().unwrap()));
            }
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_fallback_path_still_produces_valid_schedule() {
        // C5 into 4 turns strands the last cycle edge on teams already
        // playing, so the greedy pass stops early and the backtracking
        // partitioner takes over.
        let request = ScheduleRequest::new(5, 4, 2);
        let schedule = ScheduleGenerator::new().generate(&request).unwrap();

        assert_schedule_invariants(&schedule, &request);
        assert_eq!(schedule.match_count(), 5);
        assert_eq!(schedule.match_counts_per_team(5), vec![2; 5]);
    }

    #[test]
    fn test_infeasible_parameters_are_an_error() {
        let err = ScheduleGenerator::new()
            .generate(&ScheduleRequest::new(3, 1, 1))
            .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InfeasibleParameters {
                teams: 3,
                rounds: 1,
                courts: 1,
            }
        );
    }

    #[test]
    fn test_too_few_teams_is_an_error() {
        let err = ScheduleGenerator::new()
            .generate(&ScheduleRequest::new(1, 3, 2))
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InfeasibleParameters { .. }));
    }

    #[test]
    fn test_deterministic_output() {
        let request = ScheduleRequest::new(8, 4, 4);
        let generator = ScheduleGenerator::new();
        assert_eq!(
            generator.generate(&request).unwrap(),
            generator.generate(&request).unwrap()
        );
    }

    #[test]
    fn test_state_limit_reported_on_fallback() {
        // Same stuck instance as above, but the fallback is capped hard
        // enough that it cannot finish.
        let err = ScheduleGenerator::new()
            .with_state_limit(1)
            .generate(&ScheduleRequest::new(5, 4, 2))
            .unwrap_err();
        assert_eq!(err, ScheduleError::SearchLimitReached { limit: 1 });
    }
}
