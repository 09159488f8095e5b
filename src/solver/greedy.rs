//! Greedy turn packing (the fast path).
//!
//! # Algorithm
//!
//! Repeatedly sweep the teams in ascending index order. A team not yet
//! playing in the current turn pairs with its lowest-indexed opponent that
//! is also free this turn; the edge moves from the graph into the turn. A
//! turn closes when it reaches capacity, or when the final turn and an
//! empty graph coincide. A full sweep that places nothing while edges
//! remain is a stuck state: the pass stops and reports `complete == false`
//! so the caller can fall back to the exhaustive search.
//!
//! The greedy pass succeeds when the circulant structure divides evenly
//! into turn slots; it gets stuck when the remaining edges cluster on
//! teams already playing that turn.

use std::collections::BTreeSet;

use crate::models::{Edge, Graph, TeamId};

/// Result of a greedy packing pass.
///
/// `complete` is the explicit success signal: `true` only when every edge
/// was consumed and every requested turn was produced. Callers must not
/// infer success from the residual graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyOutcome {
    /// Turns built so far, each a set of edges; may be fewer than
    /// requested when the pass got stuck.
    pub turns: Vec<BTreeSet<Edge>>,
    /// Whether the graph was fully consumed into `rounds` turns.
    pub complete: bool,
}

/// Packs the graph's edges into at most `rounds` turns of at most
/// `capacity` matches each, consuming the graph destructively.
pub fn greedy_partition(graph: &mut Graph, capacity: usize, rounds: usize) -> GreedyOutcome {
    let mut turns: Vec<BTreeSet<Edge>> = Vec::new();
    let mut playing: BTreeSet<TeamId> = BTreeSet::new();
    let mut turn_matches: BTreeSet<Edge> = BTreeSet::new();

    let teams: Vec<TeamId> = graph.teams().collect();

    while turns.len() < rounds {
        let mut added_something = false;

        for &team in &teams {
            if !playing.contains(&team) {
                let picked = graph
                    .neighbors(team)
                    .find(|opponent| !playing.contains(opponent))
                    .and_then(|opponent| Edge::new(team, opponent));

                if let Some(edge) = picked {
                    added_something = true;
                    playing.insert(edge.a());
                    playing.insert(edge.b());
                    turn_matches.insert(edge);
                    graph.remove_edge(edge);
                }
            }

            let closing_final_turn = turns.len() + 1 == rounds && graph.is_empty();
            if turn_matches.len() == capacity || closing_final_turn {
                turns.push(std::mem::take(&mut turn_matches));
                playing.clear();
            }
        }

        if !added_something {
            break;
        }
    }

    let complete = graph.is_empty() && turns.len() == rounds;
    GreedyOutcome { turns, complete }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(pairs: &[(TeamId, TeamId)]) -> Graph {
        let edges: BTreeSet<Edge> = pairs
            .iter()
            .map(|&(a, b)| Edge::new(a, b).unwrap())
            .collect();
        Graph::from_edges(&edges)
    }

    #[test]
    fn test_complete_on_full_k5() {
        // n=5, k=4 (complete graph), 2 matches/turn, 5 turns.
        let mut graph = Graph::from_edges(&crate::solver::build_regular_edges(5, 4));
        let outcome = greedy_partition(&mut graph, 2, 5);

        assert!(outcome.complete);
        assert_eq!(outcome.turns.len(), 5);
        assert!(outcome.turns.iter().all(|t| t.len() <= 2));
        assert_eq!(outcome.turns.iter().map(BTreeSet::len).sum::<usize>(), 10);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_no_team_twice_per_turn() {
        let mut graph = Graph::from_edges(&crate::solver::build_regular_edges(6, 3));
        let outcome = greedy_partition(&mut graph, 3, 3);

        assert!(outcome.complete);
        for turn in &outcome.turns {
            let mut seen = BTreeSet::new();
            for edge in turn {
                assert!(seen.insert(edge.a()));
                assert!(seen.insert(edge.b()));
            }
        }
    }

    #[test]
    fn test_stuck_star_reports_incomplete() {
        // Both edges share team 0: they cannot share the single turn, and
        // after (0,1) is placed a full sweep adds nothing.
        let mut graph = graph_of(&[(0, 1), (0, 2)]);
        let outcome = greedy_partition(&mut graph, 2, 1);

        assert!(!outcome.complete);
        assert!(!graph.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let run = || {
            let mut graph = Graph::from_edges(&crate::solver::build_regular_edges(8, 4));
            greedy_partition(&mut graph, 4, 4)
        };
        assert_eq!(run(), run());
    }
}
