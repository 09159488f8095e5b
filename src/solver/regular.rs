//! Circulant regular-graph construction.
//!
//! Builds the edge universe for the tournament: a graph over team indices
//! where every team has exactly the required degree `k`, so every team
//! plays the same number of matches.
//!
//! # Algorithm
//!
//! Teams sit on a logical cycle of size `n`:
//!
//! - even `k`: connect each team to its `k/2` nearest neighbors on each
//!   side of the cycle, wrapping with modular arithmetic;
//! - odd `k`: build the even `k−1`-regular graph, then add one edge per
//!   team to its antipodal team (`i + n/2 mod n`). This needs `n` even,
//!   which the `n·k` parity check guarantees.
//!
//! Edges are canonicalized and deduplicated by set semantics, so each pair
//! appears once no matter how many constructions touch it.
//!
//! # Reference
//! Boesch & Tindell (1984), "Circulants and Their Connectivities"

use std::collections::BTreeSet;

use crate::models::Edge;

/// Builds a `k`-regular edge universe over `n` teams.
///
/// Returns the empty set when no such graph exists: `k ≥ n` (not enough
/// distinct opponents) or `n·k` odd (no whole number of matches).
pub fn build_regular_edges(n: usize, k: usize) -> BTreeSet<Edge> {
    if (n * k) % 2 != 0 || k >= n {
        return BTreeSet::new();
    }

    if k % 2 == 0 {
        k_regular_even(n, k)
    } else {
        k_regular_odd(n, k)
    }
}

/// Even-degree circulant: `k/2` neighbors on each side of the cycle.
fn k_regular_even(n: usize, k: usize) -> BTreeSet<Edge> {
    let mut res = BTreeSet::new();

    for i in 0..n {
        for count in 1..=k / 2 {
            let left = (i + n - count) % n;
            let right = (i + count) % n;

            insert_edge(&mut res, left, i);
            insert_edge(&mut res, right, i);
        }
    }

    res
}

/// Odd-degree circulant: even `k−1`-regular graph plus antipodal edges.
fn k_regular_odd(n: usize, k: usize) -> BTreeSet<Edge> {
    let mut res = k_regular_even(n, k - 1);

    for i in 0..n {
        let partner = (i + n / 2) % n;
        insert_edge(&mut res, i, partner);
    }

    res
}

fn insert_edge(res: &mut BTreeSet<Edge>, a: usize, b: usize) {
    if let Some(edge) = Edge::new(a, b) {
        res.insert(edge);
    }
}
