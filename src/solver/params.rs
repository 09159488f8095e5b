//! Per-team match count derivation.
//!
//! # Algorithm
//!
//! A team can play at most once per turn, so the per-team match count `k`
//! is bounded by the number of turns. Scanning `k` downward from that
//! bound, accept the first value where the total match count `n·k/2` is a
//! whole number (parity) and spreads over the turns without exceeding the
//! court budget. Choosing the largest feasible `k` maximizes how much of
//! the round-robin each team actually plays.

use serde::{Deserialize, Serialize};

/// Solved sizing for one scheduling request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnParams {
    /// Total matches across the whole tournament (`n·k/2`).
    pub total_matches: usize,
    /// Average matches per turn; fractional when the total does not divide
    /// evenly. Turn capacity is the ceiling of this value.
    pub matches_per_turn: f64,
    /// Matches each team plays across the tournament (the degree `k`).
    pub matches_per_team: usize,
}

impl TurnParams {
    /// Turn capacity: the most matches any single turn may hold.
    pub fn turn_capacity(&self) -> usize {
        self.matches_per_turn.ceil() as usize
    }
}

/// Finds the largest feasible per-team match count.
///
/// Scans `k` from `rounds` down to 1 and returns the first `k` where
/// `teams·k` is even and the resulting per-turn load fits in `courts`.
/// Returns `None` when no `k` in `[1, rounds]` qualifies.
pub fn solve_turn_params(teams: usize, rounds: usize, courts: usize) -> Option<TurnParams> {
    let mut matches_per_team = rounds;

    while matches_per_team > 0 {
        let total_participations = teams * matches_per_team;

        if total_participations % 2 == 0 {
            let total_matches = total_participations / 2;
            let matches_per_turn = total_matches as f64 / rounds as f64;

            if matches_per_turn <= courts as f64 {
                return Some(TurnParams {
                    total_matches,
                    matches_per_turn,
                    matches_per_team,
                });
            }
        }

        matches_per_team -= 1;
    }

    None
}
