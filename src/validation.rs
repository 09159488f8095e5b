//! Schedule invariant checks.
//!
//! Audits a completed schedule against the tournament invariants:
//! - every match has both teams assigned,
//! - no team plays twice within one turn,
//! - every team plays the same total number of matches.
//!
//! Validation is advisory: the generator never gates its own output on it.
//! It exists for auditing externally constructed or hand-edited schedules
//! and for tests. The first violation found is reported and checking
//! stops; callers wanting a full report re-run after each fix.

use std::collections::BTreeSet;

use crate::models::Schedule;

/// A detected schedule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleViolation {
    /// Violation category.
    pub kind: ViolationKind,
    /// Human-readable description naming the offending team/turn.
    pub message: String,
}

/// Categories of schedule violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// A match is still pending: not all teams were set.
    MatchNotSet,
    /// A team appears twice within the same turn.
    PlaysTwice,
    /// Teams do not all play the same total number of matches.
    UnevenMatchCounts,
}

impl ScheduleViolation {
    fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a schedule against the tournament invariants.
///
/// Checks, in order, stopping at the first violation:
/// 1. Every match in every turn has both teams assigned.
/// 2. No team appears twice within the same turn.
/// 3. All teams end with an identical total match count.
pub fn validate_schedule(
    team_count: usize,
    schedule: &Schedule,
) -> Result<(), ScheduleViolation> {
    for (turn_idx, turn) in schedule.turns.iter().enumerate() {
        for m in &turn.matches {
            if m.teams().is_none() {
                return Err(ScheduleViolation::new(
                    ViolationKind::MatchNotSet,
                    format!("turn {turn_idx} has a match whose teams were not all set"),
                ));
            }
        }
    }

    let mut totals = vec![0usize; team_count];

    for (turn_idx, turn) in schedule.turns.iter().enumerate() {
        let mut teams_in_turn = BTreeSet::new();

        for m in &turn.matches {
            if let Some((a, b)) = m.teams() {
                for team in [a, b] {
                    if !teams_in_turn.insert(team) {
                        return Err(ScheduleViolation::new(
                            ViolationKind::PlaysTwice,
                            format!("team {team} plays twice during turn {turn_idx}"),
                        ));
                    }
                    if team < team_count {
                        totals[team] += 1;
                    }
                }
            }
        }
    }

    let distinct: BTreeSet<usize> = totals.iter().copied().collect();
    if distinct.len() > 1 {
        return Err(ScheduleViolation::new(
            ViolationKind::UnevenMatchCounts,
            "at least one team plays fewer matches than the others",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Edge, Match, TeamId, Turn};

    fn assigned(a: TeamId, b: TeamId) -> Match {
        Match::from_edge(Edge::new(a, b).unwrap())
    }

    fn fair_four_team_schedule() -> Schedule {
        Schedule::new(vec![
            Turn::new(vec![assigned(0, 1), assigned(2, 3)]),
            Turn::new(vec![assigned(0, 2), assigned(1, 3)]),
            Turn::new(vec![assigned(0, 3), assigned(1, 2)]),
        ])
    }

    #[test]
    fn test_valid_schedule_passes() {
        assert_eq!(validate_schedule(4, &fair_four_team_schedule()), Ok(()));
    }

    #[test]
    fn test_pending_match_rejected() {
        let mut schedule = fair_four_team_schedule();
        schedule.turns[1].matches[0] = Match::Pending;

        let violation = validate_schedule(4, &schedule).unwrap_err();
        assert_eq!(violation.kind, ViolationKind::MatchNotSet);
        assert!(violation.message.contains("turn 1"));
    }

    #[test]
    fn test_team_playing_twice_rejected() {
        // Turn 2 repeats team 1.
        let schedule = Schedule::new(vec![
            Turn::new(vec![assigned(0, 1), assigned(2, 3)]),
            Turn::new(vec![assigned(0, 2), assigned(1, 3)]),
            Turn::new(vec![assigned(0, 3), assigned(1, 2), assigned(1, 3)]),
        ]);

        let violation = validate_schedule(4, &schedule).unwrap_err();
        assert_eq!(violation.kind, ViolationKind::PlaysTwice);
        assert!(violation.message.contains("team 1"));
        assert!(violation.message.contains("turn 2"));
    }

    #[test]
    fn test_uneven_totals_rejected() {
        let schedule = Schedule::new(vec![
            Turn::new(vec![assigned(0, 1), assigned(2, 3)]),
            Turn::new(vec![assigned(0, 2)]),
        ]);

        let violation = validate_schedule(4, &schedule).unwrap_err();
        assert_eq!(violation.kind, ViolationKind::UnevenMatchCounts);
    }

    #[test]
    fn test_first_violation_wins() {
        // Both a pending match and a duplicated team: the pending match is
        // checked first across the whole schedule.
        let schedule = Schedule::new(vec![
            Turn::new(vec![assigned(0, 1), assigned(1, 2)]),
            Turn::new(vec![Match::Pending]),
        ]);

        let violation = validate_schedule(3, &schedule).unwrap_err();
        assert_eq!(violation.kind, ViolationKind::MatchNotSet);
    }
}
