//! Remaining-opponents adjacency graph.
//!
//! Models the universe of still-unscheduled matches as an undirected graph
//! over team indices. The partitioning stage consumes the graph
//! destructively: assigning a match removes the edge from both adjacency
//! sides, and an empty graph means every required match has been placed.

use std::collections::{BTreeMap, BTreeSet};

use super::edge::{Edge, TeamId};

/// Undirected adjacency over team indices.
///
/// Symmetric by construction: an edge is present in both endpoints'
/// neighbor sets until it is consumed. Backed by ordered maps/sets so
/// iteration order — and therefore scheduling output — is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: BTreeMap<TeamId, BTreeSet<TeamId>>,
}

impl Graph {
    /// Builds the adjacency graph from an edge set.
    ///
    /// Every index up to the maximum endpoint gets an entry, so teams that
    /// happen to have no matches still appear with an empty neighbor set.
    pub fn from_edges(edges: &BTreeSet<Edge>) -> Self {
        let mut nodes: BTreeMap<TeamId, BTreeSet<TeamId>> = BTreeMap::new();

        if let Some(max_node) = edges.iter().map(|e| e.b()).max() {
            for i in 0..=max_node {
                nodes.insert(i, BTreeSet::new());
            }
        }

        for edge in edges {
            nodes.entry(edge.a()).or_default().insert(edge.b());
            nodes.entry(edge.b()).or_default().insert(edge.a());
        }

        Self { nodes }
    }

    /// Team indices in ascending order.
    pub fn teams(&self) -> impl Iterator<Item = TeamId> + '_ {
        self.nodes.keys().copied()
    }

    /// Remaining opponents of `team`, in ascending order.
    pub fn neighbors(&self, team: TeamId) -> impl Iterator<Item = TeamId> + '_ {
        self.nodes.get(&team).into_iter().flatten().copied()
    }

    /// Removes an edge from both adjacency sides.
    ///
    /// Returns `true` if the edge was present.
    pub fn remove_edge(&mut self, edge: Edge) -> bool {
        let removed_a = self
            .nodes
            .get_mut(&edge.a())
            .is_some_and(|set| set.remove(&edge.b()));
        let removed_b = self
            .nodes
            .get_mut(&edge.b())
            .is_some_and(|set| set.remove(&edge.a()));
        removed_a && removed_b
    }

    /// Whether every team's remaining-opponent set is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.values().all(BTreeSet::is_empty)
    }

    /// Total number of remaining edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(BTreeSet::len).sum::<usize>() / 2
    }
}
