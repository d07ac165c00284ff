//! Reference implementations the solvers are checked against.
//!
//! Neither oracle shares code with the solvers: [`cut_scan`] rescans every
//! raw edge for the lightest one leaving the current tree, and
//! [`exhaustive_minimum`] enumerates edge subsets.

use crate::graph::Edge;

/// Total weight, edge count and component count of a minimum spanning forest.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct OracleForest {
    pub total_weight: i128,
    pub edge_count: usize,
    pub component_count: usize,
}

/// O(n * m) Prim without a heap, over raw (possibly duplicated) edges.
///
/// Self-loops never cross a cut, so they are ignored naturally.
pub(super) fn cut_scan(vertex_count: usize, edges: &[Edge]) -> OracleForest {
    let mut in_tree = vec![false; vertex_count];
    let mut total_weight = 0_i128;
    let mut edge_count = 0;
    let mut component_count = 0;

    for root in 0..vertex_count {
        if in_tree[root] {
            continue;
        }
        in_tree[root] = true;
        component_count += 1;

        loop {
            let lightest = edges
                .iter()
                .filter(|edge| in_tree[edge.source()] != in_tree[edge.target()])
                .min_by_key(|edge| edge.weight());
            let Some(edge) = lightest else {
                break;
            };
            in_tree[edge.source()] = true;
            in_tree[edge.target()] = true;
            total_weight += i128::from(edge.weight());
            edge_count += 1;
        }
    }

    OracleForest {
        total_weight,
        edge_count,
        component_count,
    }
}

/// Minimum total weight over every acyclic subset of maximum size.
///
/// Exponential in `edges.len()`; callers keep inputs tiny and deduplicated.
pub(super) fn exhaustive_minimum(vertex_count: usize, edges: &[Edge]) -> OracleForest {
    let mut best: Option<(usize, i128)> = None;

    for mask in 0_u32..(1_u32 << edges.len()) {
        let chosen: Vec<&Edge> = edges
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| edge)
            .collect();
        if !is_acyclic(vertex_count, chosen.iter().copied()) {
            continue;
        }
        let size = chosen.len();
        let weight: i128 = chosen.iter().map(|edge| i128::from(edge.weight())).sum();
        best = match best {
            Some((best_size, best_weight))
                if best_size > size || (best_size == size && best_weight <= weight) =>
            {
                Some((best_size, best_weight))
            }
            _ => Some((size, weight)),
        };
    }

    let (edge_count, total_weight) = best.unwrap_or((0, 0));
    OracleForest {
        total_weight,
        edge_count,
        component_count: vertex_count - edge_count,
    }
}

/// Plain union-find root lookup without balancing.
pub(super) fn find_root(parents: &mut [usize], node: usize) -> usize {
    let mut current = node;
    while parents[current] != current {
        parents[current] = parents[parents[current]];
        current = parents[current];
    }
    current
}

/// Returns `true` when no subset of `edges` forms a cycle.
pub(super) fn is_acyclic<'a>(
    vertex_count: usize,
    edges: impl IntoIterator<Item = &'a Edge>,
) -> bool {
    let mut parents: Vec<usize> = (0..vertex_count).collect();
    for edge in edges {
        let left = find_root(&mut parents, edge.source());
        let right = find_root(&mut parents, edge.target());
        if left == right {
            return false;
        }
        parents[right] = left;
    }
    true
}
