//! Schedule (solution) model.
//!
//! A schedule is an ordered sequence of turns; each turn is a set of
//! simultaneous matches with no shared team. Match order within a turn
//! doubles as the court assignment: the match at position `i` plays on
//! court `i`.

use serde::{Deserialize, Serialize};

use super::edge::{Edge, TeamId};

/// One slot of a turn: either a fixed pairing or not yet assigned.
///
/// The `Pending` variant models "this match is not yet fixed" explicitly;
/// the validator rejects any schedule still carrying one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Match {
    /// Slot reserved, teams not yet fixed.
    Pending,
    /// A fixed pairing, lower team index first.
    Assigned(TeamId, TeamId),
}

impl Match {
    /// Creates an assigned match from a canonical edge.
    pub fn from_edge(edge: Edge) -> Self {
        Self::Assigned(edge.a(), edge.b())
    }

    /// The pairing, or `None` while pending.
    pub fn teams(&self) -> Option<(TeamId, TeamId)> {
        match *self {
            Self::Pending => None,
            Self::Assigned(a, b) => Some((a, b)),
        }
    }
}

/// One round of the tournament: simultaneous, non-overlapping matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Matches in court order (position = court index).
    pub matches: Vec<Match>,
}

impl Turn {
    /// Creates a turn from matches in court order.
    pub fn new(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    /// Number of matches (courts in use) this turn.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }
}

/// A complete tournament schedule: the ordered sequence of turns.
///
/// Produced by the generator and owned by the caller. When generation
/// succeeds, the turns partition the edge universe: every required match
/// appears in exactly one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Turns in playing order.
    pub turns: Vec<Turn>,
}

impl Schedule {
    /// Creates a schedule from turns in playing order.
    pub fn new(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    /// Number of turns.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Total number of matches across all turns.
    pub fn match_count(&self) -> usize {
        self.turns.iter().map(Turn::match_count).sum()
    }

    /// Matches played per team across the whole schedule.
    ///
    /// Indexed by team; pending matches contribute nothing.
    pub fn match_counts_per_team(&self, team_count: usize) -> Vec<usize> {
        let mut counts = vec![0usize; team_count];
        for turn in &self.turns {
            for m in &turn.matches {
                if let Some((a, b)) = m.teams() {
                    if a < team_count {
                        counts[a] += 1;
                    }
                    if b < team_count {
                        counts[b] += 1;
                    }
                }
            }
        }
        counts
    }
}
