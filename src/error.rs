//! Error types for the scheduling pipeline.
//!
//! Each pipeline stage either produces a valid structure or signals
//! infeasibility; there is no retry. The caller decides whether to present
//! an error, request different parameters, or give up.

use std::fmt;

/// Failure modes of schedule generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// No per-team match count in `[1, rounds]` satisfies the parity and
    /// court constraints for this combination of parameters.
    InfeasibleParameters {
        /// Number of teams requested.
        teams: usize,
        /// Number of turns requested.
        rounds: usize,
        /// Number of simultaneous courts.
        courts: usize,
    },
    /// The backtracking search exhausted the state space without finding a
    /// valid partition of the edge universe into turns.
    PartitionExhausted,
    /// The backtracking search hit its configured explored-state cap before
    /// finding a partition or proving infeasibility.
    SearchLimitReached {
        /// The cap that was hit.
        limit: u64,
    },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InfeasibleParameters {
                teams,
                rounds,
                courts,
            } => write!(
                f,
                "no feasible per-team match count for {teams} teams, \
                 {rounds} rounds, {courts} courts"
            ),
            Self::PartitionExhausted => {
                write!(f, "could not partition matches into valid turns")
            }
            Self::SearchLimitReached { limit } => {
                write!(f, "backtracking search stopped after {limit} states")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ScheduleError::InfeasibleParameters {
            teams: 3,
            rounds: 1,
            courts: 1,
        };
        assert!(err.to_string().contains("3 teams"));

        let err = ScheduleError::SearchLimitReached { limit: 500 };
        assert!(err.to_string().contains("500"));
    }
}
