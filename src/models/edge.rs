//! Team identity and match edges.

use serde::{Deserialize, Serialize};

/// Opaque team identifier: an index into the caller-supplied ordered team
/// list. The scheduler never dereferences team contents.
pub type TeamId = usize;

/// An unordered pair of distinct teams representing one required match.
///
/// Canonicalized on construction so the smaller index always comes first;
/// `(3, 1)` and `(1, 3)` are the same edge. `Ord` follows the canonical
/// pair, so edge sets iterate in a stable, deterministic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    a: TeamId,
    b: TeamId,
}

impl Edge {
    /// Creates a canonical edge between two distinct teams.
    ///
    /// Returns `None` when both endpoints are the same team; a team cannot
    /// play itself.
    pub fn new(x: TeamId, y: TeamId) -> Option<Self> {
        if x == y {
            return None;
        }
        Some(if x < y {
            Self { a: x, b: y }
        } else {
            Self { a: y, b: x }
        })
    }

    /// The lower-indexed endpoint.
    #[inline]
    pub fn a(&self) -> TeamId {
        self.a
    }

    /// The higher-indexed endpoint.
    #[inline]
    pub fn b(&self) -> TeamId {
        self.b
    }

    /// Whether `team` is one of the two endpoints.
    #[inline]
    pub fn touches(&self, team: TeamId) -> bool {
        self.a == team || self.b == team
    }
}
